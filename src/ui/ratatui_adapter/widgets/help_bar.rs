//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "PgUp")
    pub key: String,
    /// Action description (e.g., "select")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints, right-aligned
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Get default hints for the picker
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "select"),
            KeyHint::new("Esc", "cancel"),
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("PgUp/PgDn", "page"),
        ]
    }

    /// Keep as many leading hints as fit in `max_width` columns
    #[must_use]
    pub fn fitted(hints: &'a [KeyHint], theme: &'a Theme, max_width: usize) -> Self {
        let mut count = hints.len();
        while count > 0 && Self::new(&hints[..count], theme).width() > max_width {
            count -= 1;
        }
        Self::new(&hints[..count], theme)
    }

    fn line(&self) -> Line<'a> {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Line::from(spans)
    }

    /// Columns needed to show every hint
    #[must_use]
    pub fn width(&self) -> usize {
        self.line().width()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
