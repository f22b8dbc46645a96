//! App header bar component
//!
//! Displays the application title, the task source and how many tasks are
//! loaded. The bar is dimmed while a page is loading.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "taskdeck")
    pub title: Option<String>,
    /// Where the tasks come from
    pub source: Option<String>,
    /// Number of tasks loaded so far
    pub task_count: Option<usize>,
    /// More pages may follow the loaded ones
    pub has_more: bool,
    pub is_loading: bool,
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.clone().unwrap_or_else(|| "taskdeck".to_string());
    let left_text = match &props.source {
        Some(source) => format!("{} [{}]", title, source),
        None => title,
    };
    let (background, text_color) = if props.is_loading {
        (theme.border, theme.text_dimmed)
    } else {
        (theme.highlight, theme.text)
    };
    let count_text = props.task_count.map(|count| {
        let plus = if props.has_more { "+" } else { "" };
        format!("{}{} tasks", count, plus)
    });

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: background,
        ) {
            Text(content: left_text, color: text_color, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(props.is_loading.then(|| element! {
                    Text(content: "loading", color: text_color)
                }))
                #(count_text.map(|text| element! {
                    Text(content: text, color: text_color)
                }))
            }
        }
    }
}
