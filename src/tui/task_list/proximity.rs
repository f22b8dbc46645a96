//! Scroll proximity trigger for infinite scrolling
//!
//! The terminal equivalent of an intersection observer watching the bottom of
//! the list: the trigger holds when the user is close enough to the end of
//! the loaded rows that the next page should already be on its way.

/// Where the visible window sits relative to the loaded rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub visible_rows: usize,
    pub loaded: usize,
}

/// True when the next page should be requested
///
/// Holds when the selection is within `threshold` rows of the last loaded
/// row, or when every loaded row already fits on screen (including an empty
/// list), since the user cannot scroll further to ask for more.
pub fn near_end(window: ScrollWindow, threshold: usize) -> bool {
    if window.scroll_offset + window.visible_rows >= window.loaded {
        return true;
    }
    window.selected_index + threshold + 1 >= window.loaded
}
