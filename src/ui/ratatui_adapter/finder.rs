//! Ratatui-based picker implementation
//!
//! Implements the `LinePicker` trait by drawing a [`Session`] to the
//! controlling terminal and feeding it decoded crossterm events.

use super::events::decode_event;
use super::theme::Theme;
use super::widgets::{CHOICE_MARKER, HelpBar, ItemList, KeyHint, SearchBar, StatusBar};
use crate::session::{RenderView, Session};
use crate::ui::error::{Result, UiError};
use crate::ui::traits::LinePicker;
use crate::ui::types::{PickOutcome, PickRequest};
use crossterm::{
    cursor::Show,
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position},
};
use std::fs::{File, OpenOptions};
use std::io;
use tracing::{debug, warn};

/// Terminal device the picker draws on; stdout is left for the result
#[cfg(unix)]
const TTY_PATH: &str = "/dev/tty";
#[cfg(windows)]
const TTY_PATH: &str = "CONOUT$";

/// Rows taken by the prompt line and the status line
const CHROME_ROWS: u16 = 2;

/// `EIO`, returned by reads on a terminal whose other end hung up
#[cfg(unix)]
const EIO: i32 = 5;

/// Whether a failed event read means the terminal input is gone
fn is_end_of_input(err: &io::Error) -> bool {
    #[cfg(unix)]
    let hung_up = err.raw_os_error() == Some(EIO);
    #[cfg(not(unix))]
    let hung_up = false;

    hung_up
        || matches!(
            err.kind(),
            io::ErrorKind::UnexpectedEof
                | io::ErrorKind::BrokenPipe
                | io::ErrorKind::ConnectionReset
        )
}

/// Rows and columns left for matches on a `width` x `height` terminal
///
/// Both are at least one.
#[must_use]
pub fn list_bounds(width: u16, height: u16) -> (usize, usize) {
    let lines = height.saturating_sub(CHROME_ROWS).max(1);
    let marker = u16::try_from(CHOICE_MARKER.len()).unwrap_or(u16::MAX);
    let columns = width.saturating_sub(marker).max(1);
    (usize::from(lines), usize::from(columns))
}

/// Raw mode and alternate screen on the controlling terminal
///
/// Both are undone when the guard drops, whether the pick finished,
/// was cancelled or failed.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<File>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open(TTY_PATH)
            .map_err(UiError::NoTerminal)?;

        let terminal = Terminal::new(CrosstermBackend::new(tty))?;
        enable_raw_mode()?;

        let mut guard = Self { terminal };
        execute!(guard.terminal.backend_mut(), EnterAlternateScreen)?;
        debug!("terminal set up");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show) {
            warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
        debug!("terminal restored");
    }
}

/// Ratatui-based picker implementation
pub struct RatatuiPicker {
    theme: Theme,
    hints: Vec<KeyHint>,
}

impl RatatuiPicker {
    /// Create a new ratatui picker
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
        }
    }

    /// Draw one frame: prompt line, match list, status line
    pub fn draw(&self, frame: &mut Frame, view: &RenderView<'_>, prompt: &str) {
        let area = frame.area();

        let [prompt_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let search_bar = SearchBar::new(prompt, view.query, &self.theme);
        let cursor_offset = search_bar.cursor_offset();
        frame.render_widget(search_bar, prompt_area);

        frame.render_widget(ItemList::new(view, &self.theme), list_area);

        let status_bar = StatusBar::new(view, &self.theme);
        let room = usize::from(status_area.width).saturating_sub(status_bar.width() + 2);
        let help_bar = HelpBar::fitted(&self.hints, &self.theme, room);
        let help_width = u16::try_from(help_bar.width()).unwrap_or(u16::MAX);
        let [counter_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(help_width)])
                .areas(status_area);
        frame.render_widget(status_bar, counter_area);
        frame.render_widget(help_bar, help_area);

        let max_x = prompt_area.width.saturating_sub(1);
        let x = u16::try_from(cursor_offset).unwrap_or(u16::MAX).min(max_x);
        frame.set_cursor_position(Position::new(prompt_area.x + x, prompt_area.y));
    }

    /// Draw and read events until the session finishes
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<File>>,
        session: &mut Session,
        prompt: &str,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame, &session.view(), prompt))?;

            let event = match event::read() {
                Ok(event) => event,
                Err(e) if is_end_of_input(&e) => {
                    debug!(error = %e, "terminal input closed");
                    return Err(UiError::InputClosed);
                }
                Err(e) => return Err(e.into()),
            };

            let Some(input) = decode_event(&event) else {
                continue;
            };

            if session.handle(input)?.is_terminal() {
                return Ok(());
            }
        }
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePicker for RatatuiPicker {
    fn pick(&self, request: PickRequest) -> Result<PickOutcome> {
        let mut guard = TerminalGuard::new()?;

        let size = guard.terminal.size()?;
        let (lines, columns) = list_bounds(size.width, size.height);
        let prompt = request.prompt.clone();
        let mut session = request.into_session(lines, columns);

        self.run_loop(&mut guard.terminal, &mut session, &prompt)?;
        drop(guard);

        PickOutcome::from_session(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{InputEvent, SessionOptions};
    use crate::testing::{fruit_lines, type_query};
    use crate::ui::ratatui_adapter::widgets::row_text;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_list_bounds() {
        assert_eq!(list_bounds(80, 24), (22, 78));
        assert_eq!(list_bounds(1, 1), (1, 1));
    }

    #[test]
    fn test_end_of_input_errors() {
        assert!(is_end_of_input(&io::Error::from(io::ErrorKind::UnexpectedEof)));
        assert!(is_end_of_input(&io::Error::from(io::ErrorKind::BrokenPipe)));
        assert!(!is_end_of_input(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    #[cfg(unix)]
    #[test]
    fn test_hangup_is_end_of_input() {
        assert!(is_end_of_input(&io::Error::from_raw_os_error(EIO)));
    }

    #[test]
    fn test_draw_frame() {
        let (lines, columns) = list_bounds(40, 6);
        let mut session = Session::new(fruit_lines(), SessionOptions::default(), lines, columns);
        type_query(&mut session, "ap");
        session.handle(InputEvent::down()).unwrap();

        let picker = RatatuiPicker::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|frame| picker.draw(frame, &session.view(), "> "))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert!(row_text(buf, 0).starts_with("> ap"));
        assert!(row_text(buf, 1).starts_with("  apple pie"));
        assert!(row_text(buf, 2).starts_with("> apple tart"));
        assert!(row_text(buf, 3).starts_with("  grape"));
        assert!(row_text(buf, 5).starts_with("3/4"));
        // "3/4" leaves room for the first three hints on a 40 column line
        assert!(row_text(buf, 5).ends_with("Enter:select  Esc:cancel  ↑/↓:move"));
    }
}
