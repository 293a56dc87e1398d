//! Event decoding for the ratatui TUI
//!
//! Maps crossterm key and resize events to session [`InputEvent`]s.

use super::finder::list_bounds;
use crate::session::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert a key event to a short name such as `ctrl-x` or `f5`
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Insert => "ins".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Decode one key press
///
/// Returns `None` for key releases, which the session never sees.
#[must_use]
pub fn decode_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Esc => InputEvent::Cancel,
        KeyCode::Char('c') if ctrl => InputEvent::Cancel,
        KeyCode::Enter => InputEvent::Confirm,

        KeyCode::Up => InputEvent::up(),
        KeyCode::Char('k' | 'p') if ctrl => InputEvent::up(),
        KeyCode::Down => InputEvent::down(),
        KeyCode::Char('j' | 'n') if ctrl => InputEvent::down(),
        KeyCode::PageUp => InputEvent::page_up(),
        KeyCode::PageDown => InputEvent::page_down(),

        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Char('h') if ctrl => InputEvent::Backspace,

        KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            InputEvent::Char(c)
        }

        _ => InputEvent::Unknown(
            key_to_string(key).unwrap_or_else(|| format!("{:?}", key.code)),
        ),
    };

    Some(event)
}

/// Decode a terminal event
///
/// Resize events are turned into list bounds with the same layout the
/// picker draws. Mouse, focus and paste events are dropped.
#[must_use]
pub fn decode_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Resize(width, height) => {
            let (lines, columns) = list_bounds(*width, *height);
            Some(InputEvent::Resize { lines, columns })
        }
        _ => None,
    }
}
