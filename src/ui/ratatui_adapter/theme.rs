//! Color theme definitions for the ratatui TUI

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the chosen row
    pub selection_bg: Color,
    /// Foreground color for the chosen row
    pub selection_fg: Color,
    /// Color for the choice marker and key names
    pub cursor: Color,
    /// Color for the prompt text
    pub prompt: Color,
    /// Color for transient notices
    pub warning: Color,
    /// Color for counters and separators
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            prompt: Color::Green,
            warning: Color::Yellow,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the chosen row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for other rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the choice marker (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the prompt
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt)
    }

    /// Style for notices
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
