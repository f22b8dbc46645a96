//! Task list model types for testable state management
//!
//! This module separates state (TaskListState) from view (TaskListViewModel)
//! so the screen's behavior can be unit tested without the iocraft framework.
//! Async work never happens here: the reducer returns an [`Effect`] and the
//! component runs it.

use crate::source::Page;
use crate::tui::components::footer::{
    Shortcut, list_shortcuts, loading_error_shortcuts, modal_shortcuts, search_shortcuts,
};
use crate::tui::navigation::ListCursor;
use crate::types::Task;

use super::controller::{Completion, IncrementalList, LoadState, PageRequest};
use super::proximity::{ScrollWindow, near_end};

// ============================================================================
// State Types
// ============================================================================

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
    Modal,
}

/// The modal currently shown above the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenModal {
    Detail(Task),
    Help,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct TaskListState {
    /// Loaded tasks and paging state for the applied query
    pub list: IncrementalList<Task>,
    /// Text in the search box, which may not be applied yet
    pub search_query: String,
    /// Bumped on every search edit; only the latest revision may apply
    pub search_revision: u64,
    pub focus: Focus,
    /// Focus to restore when the modal closes
    pub focus_before_modal: Focus,
    pub cursor: ListCursor,
    pub modal: Option<OpenModal>,
    /// Rows from the end at which the next page is requested
    pub prefetch_rows: usize,
    pub should_exit: bool,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new(20, 3)
    }
}

impl TaskListState {
    pub fn new(page_size: usize, prefetch_rows: usize) -> Self {
        Self {
            list: IncrementalList::new(page_size),
            search_query: String::new(),
            search_revision: 0,
            focus: Focus::default(),
            focus_before_modal: Focus::default(),
            cursor: ListCursor::default(),
            modal: None,
            prefetch_rows,
            should_exit: false,
        }
    }

    /// Start with `query` already typed and applied
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.list.reset(query.clone());
        self.search_query = query;
        self
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list.items().get(self.cursor.selected_index)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Whether a render at this height should request the next page
    pub fn wants_auto_load(&self, list_height: usize) -> bool {
        let trigger = near_end(self.scroll_window(list_height), self.prefetch_rows);
        self.list.should_auto_load(trigger)
    }

    fn scroll_window(&self, list_height: usize) -> ScrollWindow {
        ScrollWindow {
            selected_index: self.cursor.selected_index,
            scroll_offset: self.cursor.scroll_offset,
            visible_rows: list_height,
            loaded: self.list.len(),
        }
    }

    /// Reset the list for the typed query unless it is already applied
    fn apply_search(&mut self) -> Option<Effect> {
        if self.search_query == self.list.query() {
            return None;
        }
        tracing::debug!(query = %self.search_query, "applying search");
        self.list.reset(self.search_query.clone());
        self.cursor.reset();
        self.list.load_more().map(Effect::Fetch)
    }

    fn open_modal(&mut self, modal: OpenModal) {
        if self.modal.is_none() {
            self.focus_before_modal = self.focus;
        }
        self.modal = Some(modal);
        self.focus = Focus::Modal;
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the task list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    /// Mouse wheel up
    ScrollUp,
    /// Mouse wheel down
    ScrollDown,

    // Search
    FocusSearch,
    /// The search box text changed
    UpdateSearch(String),
    /// Debounce elapsed for the given revision
    ApplySearch { revision: u64 },
    /// Enter in the search box: apply now and return to the list
    SubmitSearch,
    /// Esc in the search box: clear the query and return to the list
    ClearSearch,
    /// Leave the search box keeping the query
    ExitSearch,

    // Loading
    /// Render-time check of the scroll proximity trigger
    AutoLoad,
    /// Explicit retry after a failed page
    Retry,
    /// A page fetch finished
    PageLoaded {
        request: PageRequest,
        outcome: Result<Page<Task>, String>,
    },

    // Modals
    OpenDetail,
    ShowHelp,
    CloseModal,

    Quit,
}

impl TaskListAction {
    /// Navigation and search input aimed at the list itself
    fn is_list_input(&self) -> bool {
        matches!(
            self,
            TaskListAction::MoveUp
                | TaskListAction::MoveDown
                | TaskListAction::PageUp
                | TaskListAction::PageDown
                | TaskListAction::GoToTop
                | TaskListAction::GoToBottom
                | TaskListAction::ScrollUp
                | TaskListAction::ScrollDown
                | TaskListAction::FocusSearch
                | TaskListAction::OpenDetail
        )
    }
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a page and report back with `TaskListAction::PageLoaded`
    Fetch(PageRequest),
    /// Wait for the debounce delay, then dispatch `ApplySearch { revision }`
    DebounceSearch { revision: u64 },
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state and at most one effect for the component to run.
pub fn reduce_task_list_state(
    mut state: TaskListState,
    action: TaskListAction,
    list_height: usize,
) -> (TaskListState, Option<Effect>) {
    // List input goes nowhere while a modal covers the list
    if state.is_modal_open() && action.is_list_input() {
        return (state, None);
    }

    let count = state.list.len();

    let effect = match action {
        TaskListAction::MoveUp => {
            state.cursor.move_up(count, list_height);
            None
        }
        TaskListAction::MoveDown => {
            state.cursor.move_down(count, list_height);
            None
        }
        TaskListAction::PageUp => {
            state.cursor.page_up(count, list_height);
            None
        }
        TaskListAction::PageDown => {
            state.cursor.page_down(count, list_height);
            None
        }
        TaskListAction::GoToTop => {
            state.cursor.to_top();
            None
        }
        TaskListAction::GoToBottom => {
            state.cursor.to_bottom(count, list_height);
            None
        }
        TaskListAction::ScrollUp => {
            state.cursor.scroll_by(-3, count, list_height);
            None
        }
        TaskListAction::ScrollDown => {
            state.cursor.scroll_by(3, count, list_height);
            None
        }

        TaskListAction::FocusSearch => {
            state.focus = Focus::Search;
            None
        }
        TaskListAction::UpdateSearch(text) => {
            if text == state.search_query {
                None
            } else {
                state.search_query = text;
                state.search_revision += 1;
                Some(Effect::DebounceSearch {
                    revision: state.search_revision,
                })
            }
        }
        TaskListAction::ApplySearch { revision } => {
            if revision == state.search_revision {
                state.apply_search()
            } else {
                None
            }
        }
        TaskListAction::SubmitSearch => {
            state.focus = Focus::List;
            // Outdate any pending debounce
            state.search_revision += 1;
            state.apply_search()
        }
        TaskListAction::ClearSearch => {
            state.focus = Focus::List;
            state.search_query.clear();
            state.search_revision += 1;
            state.apply_search()
        }
        TaskListAction::ExitSearch => {
            state.focus = Focus::List;
            None
        }

        TaskListAction::AutoLoad => {
            if state.wants_auto_load(list_height) {
                state.list.load_more().map(Effect::Fetch)
            } else {
                None
            }
        }
        TaskListAction::Retry => {
            if state.list.state() == LoadState::Error {
                state.list.load_more().map(Effect::Fetch)
            } else {
                None
            }
        }
        TaskListAction::PageLoaded { request, outcome } => {
            match state.list.complete(&request, outcome) {
                Completion::Appended { count, exhausted } => {
                    tracing::debug!(count, exhausted, offset = request.offset, "page appended");
                }
                Completion::Failed => {
                    tracing::warn!(
                        error = state.list.last_error().unwrap_or_default(),
                        offset = request.offset,
                        "page fetch failed"
                    );
                }
                Completion::Stale => {}
            }
            None
        }

        TaskListAction::OpenDetail => {
            if let Some(task) = state.selected_task().cloned() {
                state.open_modal(OpenModal::Detail(task));
            }
            None
        }
        TaskListAction::ShowHelp => {
            state.open_modal(OpenModal::Help);
            None
        }
        TaskListAction::CloseModal => {
            if state.modal.take().is_some() {
                state.focus = state.focus_before_modal;
            }
            None
        }

        TaskListAction::Quit => {
            state.should_exit = true;
            None
        }
    };

    (state, effect)
}

// ============================================================================
// View Model Types
// ============================================================================

/// What fills the list area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// First page still loading
    Loading,
    /// First page failed
    Failed { message: String },
    /// Nothing to show for an empty query
    Empty,
    /// Nothing matches the applied query
    NoResults { query: String },
    /// At least one task loaded
    Tasks,
}

/// Status row under the last loaded task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFooterRow {
    Hidden,
    LoadingMore,
    LoadFailed { message: String },
    EndOfList,
}

/// Computed view model for rendering the task list screen
#[derive(Debug, Clone)]
pub struct TaskListViewModel {
    pub body: ListBody,
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub footer_row: ListFooterRow,
    /// Applied query, used for match highlighting
    pub applied_query: String,
    pub search_query: String,
    pub search_focused: bool,
    pub list_focused: bool,
    /// Header is dimmed while a page loads
    pub is_loading: bool,
    pub loaded_count: usize,
    /// Offer the go-to-top hint
    pub show_go_top: bool,
    pub modal: Option<OpenModal>,
    pub shortcuts: Vec<Shortcut>,
}

/// Pure function: compute view model from state
pub fn compute_task_list_view_model(state: &TaskListState) -> TaskListViewModel {
    let list = &state.list;
    let load_state = list.state();
    let error = list.last_error().unwrap_or_default().to_string();

    let body = if !list.is_empty() {
        ListBody::Tasks
    } else {
        match load_state {
            LoadState::Loading => ListBody::Loading,
            LoadState::Error => ListBody::Failed {
                message: error.clone(),
            },
            // First page not requested yet; the next render asks for it
            LoadState::Idle => ListBody::Loading,
            LoadState::Exhausted if list.query().is_empty() => ListBody::Empty,
            LoadState::Exhausted => ListBody::NoResults {
                query: list.query().to_string(),
            },
        }
    };

    let footer_row = if list.is_empty() {
        ListFooterRow::Hidden
    } else {
        match load_state {
            LoadState::Loading => ListFooterRow::LoadingMore,
            LoadState::Error => ListFooterRow::LoadFailed { message: error },
            LoadState::Exhausted => ListFooterRow::EndOfList,
            LoadState::Idle => ListFooterRow::Hidden,
        }
    };

    let shortcuts = match state.focus {
        Focus::Modal => modal_shortcuts(),
        Focus::Search => search_shortcuts(),
        Focus::List if load_state == LoadState::Error => loading_error_shortcuts(),
        Focus::List => list_shortcuts(),
    };

    TaskListViewModel {
        body,
        tasks: list.items().to_vec(),
        selected_index: state.cursor.selected_index,
        scroll_offset: state.cursor.scroll_offset,
        footer_row,
        applied_query: list.query().to_string(),
        search_query: state.search_query.clone(),
        search_focused: state.focus == Focus::Search,
        list_focused: state.focus == Focus::List,
        is_loading: list.is_loading(),
        loaded_count: list.len(),
        show_go_top: state.cursor.is_scrolled(),
        modal: state.modal.clone(),
        shortcuts,
    }
}
