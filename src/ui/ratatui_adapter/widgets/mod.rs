//! Ratatui widgets for the picker TUI

mod help_bar;
mod item_list;
mod search_bar;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use item_list::{CHOICE_MARKER, ItemList, ROW_PADDING};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

/// Text of one buffer row, for assertions
#[cfg(test)]
pub(crate) fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    let area = buf.area;
    (area.left()..area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect()
}
