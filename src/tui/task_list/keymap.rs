//! Key bindings for the task list screen

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{Focus, TaskListAction};

/// Convert a key event to a TaskListAction (pure function)
///
/// Returns `None` if the key doesn't map to any action. While a modal is
/// focused every key is left to the modal, which handles its own dismissal.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    focus: Focus,
) -> Option<TaskListAction> {
    match focus {
        Focus::Modal => None,
        Focus::Search => search_key_to_action(code, modifiers),
        Focus::List => list_key_to_action(code, modifiers),
    }
}

fn list_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<TaskListAction> {
    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(TaskListAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(TaskListAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(TaskListAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(TaskListAction::GoToBottom),
        KeyCode::PageDown => Some(TaskListAction::PageDown),
        KeyCode::PageUp => Some(TaskListAction::PageUp),

        // Actions
        KeyCode::Char('/') => Some(TaskListAction::FocusSearch),
        KeyCode::Enter => Some(TaskListAction::OpenDetail),
        KeyCode::Char('r') => Some(TaskListAction::Retry),
        KeyCode::Char('?') => Some(TaskListAction::ShowHelp),
        KeyCode::Char('q') => Some(TaskListAction::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TaskListAction::Quit)
        }
        KeyCode::Esc => Some(TaskListAction::Quit),

        _ => None,
    }
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<TaskListAction> {
    match (code, modifiers) {
        // Escape clears and exits
        (KeyCode::Esc, _) => Some(TaskListAction::ClearSearch),
        (KeyCode::Enter, _) => Some(TaskListAction::SubmitSearch),
        (KeyCode::Tab, _) => Some(TaskListAction::ExitSearch),
        (KeyCode::Char('q') | KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(TaskListAction::Quit)
        }
        // Other characters are handled by the search box component
        _ => None,
    }
}
