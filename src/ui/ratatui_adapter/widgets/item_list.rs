//! Item list widget for displaying the visible matches

use crate::session::{RenderView, VisibleRow};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

/// Marker drawn before the chosen row
pub const CHOICE_MARKER: &str = "> ";
/// Padding drawn before every other row
pub const ROW_PADDING: &str = "  ";

/// Item list widget that draws the rows of a [`RenderView`]
pub struct ItemList<'a> {
    /// Session snapshot
    view: &'a RenderView<'a>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(view: &'a RenderView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    /// Render a single row
    fn render_item(&self, row: &VisibleRow<'_>) -> ListItem<'a> {
        let text = self.view.clipped(row);

        let line = if row.is_choice {
            Line::from(vec![
                Span::styled(CHOICE_MARKER, self.theme.cursor_style()),
                Span::styled(text, self.theme.selected_style()),
            ])
        } else {
            Line::from(vec![
                Span::raw(ROW_PADDING),
                Span::styled(text, self.theme.normal_style()),
            ])
        };

        ListItem::new(line)
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self
            .view
            .rows
            .iter()
            .map(|row| self.render_item(row))
            .collect();

        List::new(items).render(area, buf);
    }
}
