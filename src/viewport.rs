//! Choice and scroll state for the match list
//!
//! `choice` indexes the match set (not the candidate list) and `view_offset` is
//! the first match-set index on screen. Whenever the match set is non-empty:
//!
//! - `choice < match_count`
//! - `view_offset <= choice < view_offset + max_visible_lines`
//! - `view_offset <= max(0, match_count - max_visible_lines)`
//!
//! The viewport scrolls only as far as needed to keep the choice on screen,
//! so moving within the visible rows never moves the list.

use std::ops::Range;

/// Current choice, scroll offset and display bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    choice: usize,
    view_offset: usize,
    max_visible_lines: usize,
    max_columns: usize,
}

impl ViewportState {
    /// Create a viewport showing at most `max_visible_lines` rows
    ///
    /// A height of zero is treated as one row so a choice can always be shown.
    #[must_use]
    pub fn new(max_visible_lines: usize, max_columns: usize) -> Self {
        Self {
            choice: 0,
            view_offset: 0,
            max_visible_lines: max_visible_lines.max(1),
            max_columns,
        }
    }

    /// Move the choice by `delta` rows, wrapping around the match set
    ///
    /// Does nothing when there are no matches.
    pub fn move_choice(&mut self, delta: isize, match_count: usize) {
        if match_count == 0 {
            return;
        }

        let step = delta.unsigned_abs() % match_count;
        let current = self.choice % match_count;
        self.choice = if delta >= 0 {
            (current + step) % match_count
        } else {
            (current + match_count - step) % match_count
        };
        self.reconcile(match_count);
    }

    /// Bring choice and offset back in line with the match count
    pub fn reconcile(&mut self, match_count: usize) {
        if match_count == 0 {
            self.choice = 0;
            self.view_offset = 0;
            return;
        }

        self.choice %= match_count;

        let last_row = self.max_visible_lines - 1;
        if self.choice < self.view_offset {
            self.view_offset = self.choice;
        }
        if self.choice > self.view_offset + last_row {
            self.view_offset = self.choice - last_row;
        }

        let last_offset = match_count.saturating_sub(self.max_visible_lines);
        self.view_offset = self.view_offset.min(last_offset);
    }

    /// Update the display bounds and reconcile
    pub fn resize(&mut self, max_visible_lines: usize, max_columns: usize, match_count: usize) {
        self.max_visible_lines = max_visible_lines.max(1);
        self.max_columns = max_columns;
        self.reconcile(match_count);
    }

    /// Match-set indices currently on screen
    #[must_use]
    pub fn visible_range(&self, match_count: usize) -> Range<usize> {
        let start = self.view_offset.min(match_count);
        let end = (self.view_offset + self.max_visible_lines).min(match_count);
        start..end
    }

    /// Index of the highlighted match
    #[must_use]
    pub const fn choice(&self) -> usize {
        self.choice
    }

    /// First visible match-set index
    #[must_use]
    pub const fn view_offset(&self) -> usize {
        self.view_offset
    }

    /// Rows available for matches
    #[must_use]
    pub const fn max_visible_lines(&self) -> usize {
        self.max_visible_lines
    }

    /// Columns available for each match
    #[must_use]
    pub const fn max_columns(&self) -> usize {
        self.max_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_forward() {
        let mut viewport = ViewportState::new(10, 80);
        let mut seen = Vec::new();
        for _ in 0..5 {
            viewport.move_choice(1, 5);
            seen.push(viewport.choice());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_wraparound_backward() {
        let mut viewport = ViewportState::new(10, 80);
        viewport.move_choice(-1, 5);
        assert_eq!(viewport.choice(), 4);
        viewport.move_choice(-10, 5);
        assert_eq!(viewport.choice(), 4);
        viewport.move_choice(-12, 5);
        assert_eq!(viewport.choice(), 2);
    }

    #[test]
    fn test_page_step_wraps() {
        let mut viewport = ViewportState::new(3, 80);
        viewport.move_choice(10, 7);
        assert_eq!(viewport.choice(), 3);
    }

    #[test]
    fn test_minimal_scroll() {
        let mut viewport = ViewportState::new(3, 80);

        viewport.move_choice(1, 5);
        viewport.move_choice(1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (2, 0));

        viewport.move_choice(1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (3, 1));

        viewport.move_choice(1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (4, 2));

        viewport.move_choice(1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (0, 0));

        // Moving back up inside the window does not scroll.
        viewport.move_choice(-1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (4, 2));
        viewport.move_choice(-1, 5);
        assert_eq!((viewport.choice(), viewport.view_offset()), (3, 2));
    }

    #[test]
    fn test_empty_match_set() {
        let mut viewport = ViewportState::new(3, 80);
        viewport.move_choice(2, 5);
        viewport.move_choice(1, 0);
        assert_eq!(viewport.choice(), 2);

        viewport.reconcile(0);
        assert_eq!((viewport.choice(), viewport.view_offset()), (0, 0));
        assert!(viewport.visible_range(0).is_empty());
    }

    #[test]
    fn test_shrinking_match_set_wraps_choice() {
        let mut viewport = ViewportState::new(3, 80);
        viewport.move_choice(4, 10);
        assert_eq!((viewport.choice(), viewport.view_offset()), (4, 2));

        viewport.reconcile(3);
        assert_eq!((viewport.choice(), viewport.view_offset()), (1, 0));
    }

    #[test]
    fn test_offset_clamped_when_set_shrinks() {
        let mut viewport = ViewportState::new(3, 80);
        viewport.move_choice(8, 10);
        assert_eq!(viewport.view_offset(), 6);

        viewport.move_choice(-7, 10);
        viewport.reconcile(4);
        assert_eq!((viewport.choice(), viewport.view_offset()), (1, 1));
    }

    #[test]
    fn test_resize_keeps_choice_visible() {
        let mut viewport = ViewportState::new(10, 80);
        viewport.move_choice(8, 20);
        assert_eq!(viewport.view_offset(), 0);

        viewport.resize(3, 40, 20);
        assert_eq!((viewport.choice(), viewport.view_offset()), (8, 6));
        assert_eq!(viewport.max_columns(), 40);
        assert_eq!(viewport.visible_range(20), 6..9);
    }

    #[test]
    fn test_zero_height_is_one_row() {
        let mut viewport = ViewportState::new(0, 80);
        assert_eq!(viewport.max_visible_lines(), 1);
        viewport.move_choice(3, 5);
        assert_eq!(viewport.view_offset(), 3);
        assert_eq!(viewport.visible_range(5), 3..4);
    }
}
