//! Fuzzy search logic for filtering tasks
//!
//! Provides fuzzy matching across multiple task fields with support for
//! priority shorthand (p0-p4) filtering.

use std::sync::LazyLock;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use regex::Regex;

use crate::types::Task;

static PRIORITY_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bp([0-4])\b").expect("priority shorthand regex should be valid")
});

/// A task with its fuzzy match score
#[derive(Debug, Clone)]
pub struct ScoredTask<'a> {
    pub task: &'a Task,
    /// The fuzzy match score (higher is better)
    pub score: i64,
}

/// Filter tasks by a fuzzy search query
///
/// Supports:
/// - Fuzzy matching across id, title, assignee, and tags
/// - Priority shorthand: `p0` through `p4` filters by priority
/// - Smart case: case-insensitive unless query contains uppercase
///
/// Results are ordered by score, best first. Ties keep their input order, so
/// an empty query returns the tasks untouched.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<ScoredTask<'a>> {
    let priority = parse_priority_filter(query);
    let fuzzy_query = strip_priority_shorthand(query);

    let candidates = tasks
        .iter()
        .filter(|t| priority.is_none_or(|p| t.priority.as_num() == p));

    if fuzzy_query.is_empty() {
        return candidates
            .map(|task| ScoredTask { task, score: 0 })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();
    let mut results: Vec<ScoredTask<'a>> = candidates
        .filter_map(|task| {
            matcher
                .fuzzy_match(&searchable_text(task), &fuzzy_query)
                .map(|score| ScoredTask { task, score })
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn searchable_text(task: &Task) -> String {
    format!(
        "{} {} {} {}",
        task.id,
        task.title,
        task.assignee.as_deref().unwrap_or(""),
        task.tags.join(" ")
    )
}

/// Parse a priority filter from the query (e.g., "p0", "p1", "P2")
pub fn parse_priority_filter(query: &str) -> Option<u8> {
    PRIORITY_SHORTHAND
        .captures(query)
        .and_then(|c| c.get(1)?.as_str().parse().ok())
}

/// Strip priority shorthand from the query for fuzzy matching
pub fn strip_priority_shorthand(query: &str) -> String {
    PRIORITY_SHORTHAND.replace_all(query, "").trim().to_string()
}

/// Indices of title characters matched by `query`, for highlighting
pub fn title_match_indices(title: &str, query: &str) -> Vec<usize> {
    let text_query = strip_priority_shorthand(query);
    if text_query.is_empty() {
        return Vec::new();
    }

    SkimMatcherV2::default()
        .smart_case()
        .fuzzy_indices(title, &text_query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}
