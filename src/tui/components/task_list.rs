//! Scrollable task list component
//!
//! Renders the loaded tasks with selection and search match highlighting,
//! followed by a status row telling the user whether more tasks are coming.

use iocraft::prelude::*;

use crate::source::filter::title_match_indices;
use crate::tui::layout::Breakpoint;
use crate::tui::task_list::ListFooterRow;
use crate::tui::theme::theme;
use crate::types::{Task, TaskStatus};

/// Props for the TaskList component
#[derive(Default, Props)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    /// First visible task index
    pub scroll_offset: usize,
    pub has_focus: bool,
    /// Number of task rows that fit, not counting the status row
    pub visible_height: usize,
    /// Applied search query, used for highlighting
    pub query: String,
    pub footer_row: Option<ListFooterRow>,
    pub breakpoint: Breakpoint,
}

/// Scrollable task list with selection
#[component]
pub fn TaskList(props: &TaskListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let breakpoint = props.breakpoint;

    let start = props.scroll_offset.min(props.tasks.len());
    let end = (start + props.visible_height).min(props.tasks.len());
    let footer_row = props.footer_row.clone().unwrap_or(ListFooterRow::Hidden);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            #(props.tasks[start..end].iter().enumerate().map(|(i, task)| {
                let is_selected = start + i == props.selected_index;
                element! {
                    TaskRow(
                        task: task.clone(),
                        title_indices: title_match_indices(&task.title, &props.query),
                        is_selected,
                        breakpoint,
                    )
                }
            }))

            #(status_row(&footer_row))
        }
    }
}

fn status_row(row: &ListFooterRow) -> Option<AnyElement<'static>> {
    let theme = theme();
    let (text, color) = match row {
        ListFooterRow::Hidden => return None,
        ListFooterRow::LoadingMore => ("Loading more...".to_string(), theme.text_dimmed),
        ListFooterRow::LoadFailed { message } => (
            format!("Failed to load more tasks: {message} (press r to retry)"),
            theme.error,
        ),
        ListFooterRow::EndOfList => ("End of list".to_string(), theme.text_dimmed),
    };

    Some(
        element! {
            View(height: 1, padding_left: 3, flex_shrink: 0.0) {
                Text(content: text, color, weight: Weight::Light)
            }
        }
        .into_any(),
    )
}

/// Split `title` into runs of matched and unmatched characters
///
/// `indices` are character positions, as reported by the fuzzy matcher.
pub fn highlight_segments(title: &str, indices: &[usize]) -> Vec<(String, bool)> {
    let mut segments: Vec<(String, bool)> = Vec::new();
    for (i, ch) in title.chars().enumerate() {
        let matched = indices.contains(&i);
        match segments.last_mut() {
            Some((text, last_matched)) if *last_matched == matched => text.push(ch),
            _ => segments.push((ch.to_string(), matched)),
        }
    }
    segments
}

/// Props for a single task row
#[derive(Default, Props)]
pub struct TaskRowProps {
    pub task: Task,
    /// Title characters to highlight
    pub title_indices: Vec<usize>,
    pub is_selected: bool,
    pub breakpoint: Breakpoint,
}

/// Single task row in the list
#[component]
pub fn TaskRow(props: &TaskRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let task = &props.task;

    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let pick = |color: Color| {
        if props.is_selected {
            theme.highlight_text
        } else {
            color
        }
    };

    let indicator = if props.is_selected { ">" } else { " " };
    let status_str = match task.status {
        TaskStatus::Todo => "todo",
        TaskStatus::InProgress => "wip",
        TaskStatus::Done => "done",
        TaskStatus::Cancelled => "can",
    };
    let assignee = task.assignee.clone().unwrap_or_default();
    let segments = highlight_segments(&task.title, &props.title_indices);

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            View(width: 10, flex_shrink: 0.0) {
                Text(content: format!("{:<9}", task.id), color: pick(theme.id_color))
            }

            #(props.breakpoint.shows_status().then(|| element! {
                View(flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                    View(width: 7) {
                        Text(
                            content: format!("[{}]", status_str),
                            color: pick(theme.status_color(task.status)),
                        )
                    }
                    View(width: 4) {
                        Text(
                            content: task.priority.to_string(),
                            color: pick(theme.priority_color(task.priority)),
                        )
                    }
                }
            }))

            View(flex_grow: 1.0, overflow: Overflow::Hidden, flex_direction: FlexDirection::Row) {
                Text(content: " ", color: text_color)
                #(segments.into_iter().map(|(text, matched)| element! {
                    Text(
                        content: text,
                        color: if matched { pick(theme.search_match) } else { text_color },
                        weight: if matched { Weight::Bold } else { Weight::Normal },
                    )
                }))
            }

            #(props.breakpoint.shows_assignee().then(|| element! {
                View(width: 14, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                    Text(content: format!("@{}", assignee), color: pick(theme.text_dimmed))
                }
            }))
        }
    }
}
