//! Theme system for TUI colors and styles

use std::sync::OnceLock;

use iocraft::prelude::Color;

use crate::types::{TaskPriority, TaskStatus};

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    pub is_dark_mode: bool,

    // Status colors
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_cancelled: Color,

    // Priority colors
    pub priority_p0: Color,
    pub priority_p1: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub error: Color,

    /// Solid fill behind open modals
    pub backdrop: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            is_dark_mode: true,
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_cancelled: GRAY,
            priority_p0: Color::Red,
            priority_p1: Color::Yellow,
            priority_default: Color::White,
            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
            error: Color::Red,
            backdrop: Color::Rgb {
                r: 20,
                g: 20,
                b: 20,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark_mode: false,
            priority_default: Color::Black,
            background: Color::Reset,
            text: Color::Black,
            id_color: Color::DarkCyan,
            backdrop: Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
            ..Self::dark()
        }
    }

    /// Get the color for a task status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Todo => self.status_todo,
            TaskStatus::InProgress => self.status_in_progress,
            TaskStatus::Done => self.status_done,
            TaskStatus::Cancelled => self.status_cancelled,
        }
    }

    /// Get the color for a task priority
    pub fn priority_color(&self, priority: TaskPriority) -> Color {
        match priority {
            TaskPriority::P0 => self.priority_p0,
            TaskPriority::P1 => self.priority_p1,
            _ => self.priority_default,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme for this process; later calls are ignored
pub fn init_theme(dark_mode: bool) {
    let _ = THEME.set(if dark_mode {
        Theme::dark()
    } else {
        Theme::light()
    });
}

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_keeps_status_colors() {
        let light = Theme::light();
        assert!(!light.is_dark_mode);
        assert!(matches!(light.status_color(TaskStatus::Done), Color::Green));
        assert!(matches!(light.text, Color::Black));
    }

    #[test]
    fn test_priority_colors() {
        let theme = Theme::dark();
        assert!(matches!(theme.priority_color(TaskPriority::P0), Color::Red));
        assert!(matches!(theme.priority_color(TaskPriority::P3), Color::White));
    }
}
