//! Selection and scroll position for a vertical list
//!
//! Tracks which row is selected and which row is at the top of the viewport.
//! Every move keeps the selection visible.

/// Selection plus scroll offset for one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Whether the viewport has moved away from the first row
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn move_down(&mut self, count: usize, height: usize) {
        self.move_to(self.selected_index.saturating_add(1), count, height);
    }

    pub fn move_up(&mut self, count: usize, height: usize) {
        self.move_to(self.selected_index.saturating_sub(1), count, height);
    }

    /// Jump down half a page
    pub fn page_down(&mut self, count: usize, height: usize) {
        let jump = (height / 2).max(1);
        self.move_to(self.selected_index.saturating_add(jump), count, height);
    }

    /// Jump up half a page
    pub fn page_up(&mut self, count: usize, height: usize) {
        let jump = (height / 2).max(1);
        self.move_to(self.selected_index.saturating_sub(jump), count, height);
    }

    pub fn to_top(&mut self) {
        self.reset();
    }

    pub fn to_bottom(&mut self, count: usize, height: usize) {
        self.move_to(count.saturating_sub(1), count, height);
    }

    /// Scroll the viewport by `delta` rows without changing the selection
    /// unless it would leave the viewport
    pub fn scroll_by(&mut self, delta: isize, count: usize, height: usize) {
        let max_offset = count.saturating_sub(height);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);
        if height > 0 {
            let last_visible = self.scroll_offset + height - 1;
            self.selected_index = self
                .selected_index
                .clamp(self.scroll_offset, last_visible)
                .min(count.saturating_sub(1));
        }
    }

    /// Select `index` (clamped to the list) and scroll it into view
    pub fn move_to(&mut self, index: usize, count: usize, height: usize) {
        if count == 0 {
            self.reset();
            return;
        }

        self.selected_index = index.min(count - 1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if height > 0 && self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
    }
}
