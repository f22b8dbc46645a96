//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Search")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

fn shortcuts(entries: &[(&str, &str)]) -> Vec<Shortcut> {
    entries
        .iter()
        .map(|(key, action)| Shortcut::new(*key, *action))
        .collect()
}

/// Shortcuts for the task list
pub fn list_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("j/k", "Up/Down"),
        ("g/G", "Top/Bottom"),
        ("/", "Search"),
        ("Enter", "Details"),
        ("?", "Help"),
        ("q", "Quit"),
    ])
}

/// Shortcuts while the last page request failed
pub fn loading_error_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("r", "Retry"),
        ("j/k", "Up/Down"),
        ("/", "Search"),
        ("?", "Help"),
        ("q", "Quit"),
    ])
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("Enter", "Apply Search"),
        ("Tab", "Exit Search"),
        ("Esc", "Clear & Exit"),
        ("C-q", "Quit"),
    ])
}

/// Shortcuts while a modal is open
pub fn modal_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[("Esc", "Close"), ("click [x]", "Close")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shortcuts_cover_keymap() {
        let keys: Vec<_> = list_shortcuts().into_iter().map(|s| s.key).collect();
        for key in ["j/k", "/", "Enter", "?", "q"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn test_error_shortcuts_lead_with_retry() {
        assert_eq!(loading_error_shortcuts()[0], Shortcut::new("r", "Retry"));
    }
}
