//! Incremental list loading
//!
//! [`IncrementalList`] owns the items accumulated for one query together with
//! the load state that decides whether another page may be requested. The
//! fetch itself happens outside: `load_more` hands out a [`PageRequest`] and
//! the caller feeds the outcome back through `complete`.
//!
//! ```text
//! Idle --load_more--> Loading --complete--> Idle | Exhausted | Error
//! Error --load_more--> Loading
//! any --reset--> Idle
//! ```
//!
//! Every request carries the generation it was issued under and its own
//! sequence number. `reset` bumps the generation, so a completion that arrives
//! after the query changed is recognised as stale and dropped without touching
//! the list. Only the completion for the request currently in flight is
//! applied; a replayed completion of an earlier page is stale too.

use std::fmt::Display;

use crate::source::{Page, TaskSource};
use crate::types::Task;

/// Load state of an incremental list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Ready to load the next page
    #[default]
    Idle,
    /// A page request is in flight
    Loading,
    /// The last page request failed; loaded items are kept
    Error,
    /// The source reported no further pages
    Exhausted,
}

/// A request for one page, stamped with the generation it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    pub offset: usize,
    pub limit: usize,
    generation: u64,
    sequence: u64,
}

impl PageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What `complete` did with a fetch outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Items were appended; `exhausted` is set when no more pages remain
    Appended { count: usize, exhausted: bool },
    /// The fetch failed and the list moved to `LoadState::Error`
    Failed,
    /// The request was superseded by a reset and ignored
    Stale,
}

/// Paginated list state for a single query
#[derive(Debug, Clone)]
pub struct IncrementalList<T> {
    query: String,
    items: Vec<T>,
    offset: usize,
    page_size: usize,
    state: LoadState,
    generation: u64,
    /// Sequence number handed to the next request
    next_sequence: u64,
    /// Sequence number of the request awaiting completion
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl<T> Default for IncrementalList<T> {
    fn default() -> Self {
        Self::new(20)
    }
}

impl<T> IncrementalList<T> {
    /// Create an empty list that requests `page_size` items at a time
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            items: Vec::new(),
            offset: 0,
            page_size: page_size.max(1),
            state: LoadState::Idle,
            generation: 0,
            next_sequence: 0,
            in_flight: None,
            last_error: None,
        }
    }

    /// Start over for `query`, voiding any request still in flight
    pub fn reset(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.items.clear();
        self.offset = 0;
        self.state = LoadState::Idle;
        self.last_error = None;
        self.in_flight = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Claim the next page request, or `None` while loading or exhausted
    pub fn load_more(&mut self) -> Option<PageRequest> {
        match self.state {
            LoadState::Loading | LoadState::Exhausted => None,
            LoadState::Idle | LoadState::Error => {
                let sequence = self.next_sequence;
                self.next_sequence = self.next_sequence.wrapping_add(1);
                self.in_flight = Some(sequence);
                self.state = LoadState::Loading;
                Some(PageRequest {
                    query: self.query.clone(),
                    offset: self.offset,
                    limit: self.page_size,
                    generation: self.generation,
                    sequence,
                })
            }
        }
    }

    /// Apply the outcome of `request`
    pub fn complete<E: Display>(
        &mut self,
        request: &PageRequest,
        outcome: Result<Page<T>, E>,
    ) -> Completion {
        if request.generation != self.generation || self.in_flight != Some(request.sequence) {
            tracing::debug!(
                request_generation = request.generation,
                current_generation = self.generation,
                request_sequence = request.sequence,
                in_flight = ?self.in_flight,
                "dropping stale page completion"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(page) => {
                let count = page.items.len();
                let exhausted = !page.has_more || count == 0;
                self.items.extend(page.items);
                self.offset += count;
                self.last_error = None;
                self.state = if exhausted {
                    LoadState::Exhausted
                } else {
                    LoadState::Idle
                };
                Completion::Appended { count, exhausted }
            }
            Err(e) => {
                self.state = LoadState::Error;
                self.last_error = Some(e.to_string());
                Completion::Failed
            }
        }
    }

    /// Whether an external trigger should start the next page load
    pub fn should_auto_load(&self, trigger: bool) -> bool {
        trigger && self.state == LoadState::Idle
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == LoadState::Exhausted
    }

    /// Message of the last failed fetch, cleared by the next success or reset
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl IncrementalList<Task> {
    /// Load the next page from `source` in one step
    ///
    /// Returns `None` when no request could be issued.
    pub async fn load_more_from<S: TaskSource>(&mut self, source: &S) -> Option<Completion> {
        let request = self.load_more()?;
        let outcome = source
            .fetch_page(&request.query, request.offset, request.limit)
            .await;
        Some(self.complete(&request, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&'static str], has_more: bool) -> Result<Page<&'static str>, String> {
        Ok(Page::new(items.to_vec(), has_more))
    }

    fn failure() -> Result<Page<&'static str>, String> {
        Err("connection refused".to_string())
    }

    #[test]
    fn test_new_list_is_idle_and_empty() {
        let list: IncrementalList<&str> = IncrementalList::new(10);
        assert_eq!(list.state(), LoadState::Idle);
        assert!(list.is_empty());
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let list: IncrementalList<&str> = IncrementalList::new(0);
        assert_eq!(list.page_size(), 1);
    }

    #[test]
    fn test_two_pages_then_exhausted() {
        let mut list = IncrementalList::new(2);

        let first = list.load_more().unwrap();
        assert_eq!(first.offset, 0);
        assert_eq!(
            list.complete(&first, page(&["a", "b"], true)),
            Completion::Appended {
                count: 2,
                exhausted: false
            }
        );
        assert_eq!(list.state(), LoadState::Idle);

        let second = list.load_more().unwrap();
        assert_eq!(second.offset, 2);
        list.complete(&second, page(&["c"], false));

        assert_eq!(list.items(), &["a", "b", "c"]);
        assert_eq!(list.state(), LoadState::Exhausted);
    }

    #[test]
    fn test_no_duplicate_request_while_loading() {
        let mut list: IncrementalList<&str> = IncrementalList::new(5);

        let request = list.load_more();
        assert!(request.is_some());
        for _ in 0..10 {
            assert!(list.load_more().is_none());
        }
        assert!(list.is_loading());
    }

    #[test]
    fn test_exhausted_refuses_more() {
        let mut list = IncrementalList::new(5);
        let request = list.load_more().unwrap();
        list.complete(&request, page(&["a"], false));

        assert!(list.is_exhausted());
        assert!(list.load_more().is_none());
        assert!(!list.should_auto_load(true));
    }

    #[test]
    fn test_empty_first_page_is_exhausted_not_error() {
        let mut list = IncrementalList::new(5);
        let request = list.load_more().unwrap();
        let completion = list.complete(&request, page(&[], false));

        assert_eq!(
            completion,
            Completion::Appended {
                count: 0,
                exhausted: true
            }
        );
        assert!(list.is_empty());
        assert_eq!(list.state(), LoadState::Exhausted);
        assert!(list.last_error().is_none());
    }

    #[test]
    fn test_empty_page_claiming_more_still_exhausts() {
        let mut list = IncrementalList::new(5);
        let request = list.load_more().unwrap();
        list.complete(&request, page(&[], true));
        assert_eq!(list.state(), LoadState::Exhausted);
    }

    #[test]
    fn test_failure_keeps_items_and_allows_retry() {
        let mut list = IncrementalList::new(2);
        let first = list.load_more().unwrap();
        list.complete(&first, page(&["a", "b"], true));

        let second = list.load_more().unwrap();
        assert_eq!(list.complete(&second, failure()), Completion::Failed);
        assert_eq!(list.state(), LoadState::Error);
        assert_eq!(list.items(), &["a", "b"]);
        assert_eq!(list.last_error(), Some("connection refused"));
        assert_eq!(list.offset(), 2);

        let retry = list.load_more().unwrap();
        assert_eq!(retry.offset, 2);
        list.complete(&retry, page(&["c"], true));
        assert_eq!(list.state(), LoadState::Idle);
        assert_eq!(list.items(), &["a", "b", "c"]);
        assert!(list.last_error().is_none());
    }

    #[test]
    fn test_error_does_not_auto_load() {
        let mut list: IncrementalList<&str> = IncrementalList::new(2);
        let request = list.load_more().unwrap();
        list.complete(&request, failure());
        assert!(!list.should_auto_load(true));
    }

    #[test]
    fn test_stale_completion_after_reset_is_ignored() {
        let mut list = IncrementalList::new(2);
        let stale = list.load_more().unwrap();

        list.reset("deploy");
        assert_eq!(list.complete(&stale, page(&["old"], true)), Completion::Stale);
        assert!(list.is_empty());
        assert_eq!(list.state(), LoadState::Idle);

        let fresh = list.load_more().unwrap();
        assert_eq!(fresh.query, "deploy");
        assert_ne!(fresh.generation(), stale.generation());

        // A stale completion arriving while the fresh request is in flight
        // must not settle the fresh one either
        assert_eq!(list.complete(&stale, failure()), Completion::Stale);
        assert!(list.is_loading());

        list.complete(&fresh, page(&["new"], false));
        assert_eq!(list.items(), &["new"]);
    }

    #[test]
    fn test_duplicate_completion_is_stale() {
        let mut list = IncrementalList::new(2);
        let request = list.load_more().unwrap();
        list.complete(&request, page(&["a", "b"], true));
        assert_eq!(list.complete(&request, page(&["a", "b"], true)), Completion::Stale);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_replayed_completion_does_not_settle_next_request() {
        let mut list = IncrementalList::new(2);
        let first = list.load_more().unwrap();
        list.complete(&first, page(&["a", "b"], true));

        let second = list.load_more().unwrap();
        assert_eq!(second.generation(), first.generation());
        assert_eq!(list.complete(&first, page(&["a", "b"], true)), Completion::Stale);
        assert!(list.is_loading());
        assert_eq!(list.items(), &["a", "b"]);
        assert_eq!(list.offset(), 2);

        assert_eq!(
            list.complete(&second, page(&["c"], false)),
            Completion::Appended {
                count: 1,
                exhausted: true
            }
        );
        assert_eq!(list.items(), &["a", "b", "c"]);
        assert!(list.is_exhausted());
    }

    #[test]
    fn test_failed_request_is_settled_once() {
        let mut list = IncrementalList::new(2);
        let first = list.load_more().unwrap();
        assert_eq!(list.complete(&first, failure()), Completion::Failed);

        let retry = list.load_more().unwrap();
        assert_eq!(retry.offset, first.offset);
        assert_eq!(list.complete(&first, page(&["late"], true)), Completion::Stale);
        assert!(list.is_loading());
        list.complete(&retry, page(&["a"], true));
        assert_eq!(list.items(), &["a"]);
    }

    #[test]
    fn test_reset_leaves_exhausted() {
        let mut list = IncrementalList::new(2);
        let request = list.load_more().unwrap();
        list.complete(&request, page(&["a"], false));
        assert!(list.is_exhausted());

        list.reset("");
        assert_eq!(list.state(), LoadState::Idle);
        assert!(list.is_empty());
        assert_eq!(list.load_more().map(|r| r.offset), Some(0));
    }

    #[test]
    fn test_should_auto_load_requires_trigger() {
        let list: IncrementalList<&str> = IncrementalList::new(2);
        assert!(list.should_auto_load(true));
        assert!(!list.should_auto_load(false));
    }
}
