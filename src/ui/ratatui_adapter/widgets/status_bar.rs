//! Status bar widget: match counter and the transient notice

use crate::session::RenderView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget showing `matches/candidates` and any notice
pub struct StatusBar<'a> {
    /// Session snapshot
    view: &'a RenderView<'a>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(view: &'a RenderView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn line(&self) -> Line<'a> {
        let counter = format!("{}/{}", self.view.match_count, self.view.candidate_count);

        let mut spans = vec![Span::styled(counter, self.theme.dimmed_style())];
        if let Some(notice) = self.view.notice {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(notice, self.theme.warning_style()));
        }

        Line::from(spans)
    }

    /// Columns taken by the counter and notice
    #[must_use]
    pub fn width(&self) -> usize {
        self.line().width()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
