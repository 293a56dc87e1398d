//! Prompt line widget: the prompt followed by the query

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line widget showing the prompt and the typed query
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Prompt text
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(prompt: &'a str, query: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            prompt,
            theme,
        }
    }

    fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.prompt, self.theme.prompt_style()),
            Span::raw(self.query),
        ])
    }

    /// Display width of prompt plus query, where the terminal cursor goes
    #[must_use]
    pub fn cursor_offset(&self) -> usize {
        self.line().width()
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::row_text;

    #[test]
    fn test_renders_prompt_and_query() {
        let theme = Theme::default();
        let bar = SearchBar::new("> ", "app", &theme);
        assert_eq!(bar.cursor_offset(), 5);

        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "> app     ");
    }

    #[test]
    fn test_empty_prompt() {
        let theme = Theme::default();
        let bar = SearchBar::new("", "", &theme);
        assert_eq!(bar.cursor_offset(), 0);
    }
}
