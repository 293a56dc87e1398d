//! Logical input events and the transitions they cause
//!
//! The session never sees raw key codes. A frontend decodes keys and resize
//! notifications into these events.

/// Rows moved by a page up or page down
pub const PAGE_STEP: isize = 10;

/// A decoded user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character typed into the query
    Char(char),
    /// Delete the last query character
    Backspace,
    /// Move the choice by a signed number of rows
    Navigate(isize),
    /// Accept the current choice
    Confirm,
    /// Leave without a selection
    Cancel,
    /// The display area changed size
    Resize {
        /// Rows available for matches
        lines: usize,
        /// Columns available for each match
        columns: usize,
    },
    /// A key the frontend could not map, with a short description
    Unknown(String),
}

impl InputEvent {
    /// One row up
    #[must_use]
    pub const fn up() -> Self {
        Self::Navigate(-1)
    }

    /// One row down
    #[must_use]
    pub const fn down() -> Self {
        Self::Navigate(1)
    }

    /// One page up
    #[must_use]
    pub const fn page_up() -> Self {
        Self::Navigate(-PAGE_STEP)
    }

    /// One page down
    #[must_use]
    pub const fn page_down() -> Self {
        Self::Navigate(PAGE_STEP)
    }
}

/// What handling an event did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The query changed and the match set was recomputed
    QueryChanged,
    /// The choice moved
    Moved,
    /// The display bounds changed
    Resized,
    /// Nothing changed
    Ignored,
    /// The session ended with the given candidate id selected
    Selected(usize),
    /// The session ended without a selection
    Cancelled,
}

impl Transition {
    /// Whether the session is over after this transition
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Selected(_) | Self::Cancelled)
    }
}
