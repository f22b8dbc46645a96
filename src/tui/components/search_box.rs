//! Inline search input

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// Current text of the search box
    pub value: String,
    pub has_focus: bool,
    /// Invoked with the new text on every edit
    pub on_change: Option<Handler<String>>,
}

/// Single-line search input with a `/` prompt
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;
    let on_change = props.on_change.clone();
    let show_placeholder = props.value.is_empty() && !has_focus;

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }

            View(flex_grow: 1.0) {
                #(if show_placeholder {
                    element! {
                        Text(content: "Search tasks (press /)", color: theme.text_dimmed)
                    }.into_any()
                } else {
                    element! {
                        TextInput(
                            value: props.value.clone(),
                            has_focus,
                            on_change: move |new_value: String| {
                                if let Some(handler) = &on_change {
                                    handler(new_value);
                                }
                            },
                            color: theme.text,
                        )
                    }.into_any()
                })
            }
        }
    }
}
