//! Empty state component
//!
//! Fills the list area when there are no tasks to show.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// First page still loading
    #[default]
    Loading,
    /// The source has no tasks at all
    NoTasks,
    /// No tasks match the search
    NoSearchResults,
    /// The first page failed to load
    LoadFailed,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Search query (for NoSearchResults)
    pub search_query: Option<String>,
    /// Underlying error (for LoadFailed)
    pub detail: Option<String>,
}

/// Centered message with a hint about what to do next
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading tasks...", ""),
        EmptyStateKind::NoTasks => ("i", "Task list is empty", "Add tasks to the source, then restart."),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No results",
            "Try a different search term, or press / then Esc to clear.",
        ),
        EmptyStateKind::LoadFailed => (
            "!",
            "Something went wrong. Try again later.",
            "Press r to retry.",
        ),
    };
    let accent = if props.kind == EmptyStateKind::LoadFailed {
        theme.error
    } else {
        theme.text_dimmed
    };

    let subtitle = match props.kind {
        EmptyStateKind::NoSearchResults => props
            .search_query
            .as_ref()
            .map(|query| format!("Search: \"{}\"", query)),
        EmptyStateKind::LoadFailed => props.detail.clone(),
        _ => None,
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: accent, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            #(subtitle.map(|text| element! {
                View(margin_top: 1, max_width: 60) {
                    Text(content: text, color: theme.search_match)
                }
            }))

            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 2) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
