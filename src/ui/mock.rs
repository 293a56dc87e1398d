//! Scripted picker for testing

use super::error::Result;
use super::traits::LinePicker;
use super::types::{PickOutcome, PickRequest};
use crate::session::InputEvent;

/// Picker that replays a fixed list of events through a real session
///
/// Useful for testing without requiring a terminal. Events left over after
/// the session finishes are ignored.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    /// Events fed to the session in order
    pub events: Vec<InputEvent>,
    /// Rows available for matches
    pub lines: usize,
    /// Columns available for each match
    pub columns: usize,
}

impl ScriptedPicker {
    /// Create a picker that replays `events` on a 10x80 display
    #[must_use]
    pub const fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            lines: 10,
            columns: 80,
        }
    }

    /// Type `query`, then confirm
    #[must_use]
    pub fn typing(query: &str) -> Self {
        let mut events: Vec<InputEvent> = query.chars().map(InputEvent::Char).collect();
        events.push(InputEvent::Confirm);
        Self::new(events)
    }
}

impl LinePicker for ScriptedPicker {
    fn pick(&self, request: PickRequest) -> Result<PickOutcome> {
        let mut session = request.into_session(self.lines, self.columns);

        for event in &self.events {
            if session.is_finished() {
                break;
            }
            session.handle(event.clone())?;
        }

        PickOutcome::from_session(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionOptions;
    use crate::testing::fruit_lines;
    use crate::ui::UiError;

    #[test]
    fn test_scripted_selection() {
        let picker = ScriptedPicker::typing("tart");
        let outcome = picker.pick(PickRequest::new(fruit_lines())).unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Selected {
                id: 2,
                line: "apple tart".to_string()
            }
        );
    }

    #[test]
    fn test_scripted_cancel() {
        let picker = ScriptedPicker::new(vec![InputEvent::Char('a'), InputEvent::Cancel]);
        let outcome = picker.pick(PickRequest::new(fruit_lines())).unwrap();
        assert_eq!(outcome, PickOutcome::Cancelled);
        assert_eq!(outcome.line(), None);
    }

    #[test]
    fn test_script_runs_out() {
        let picker = ScriptedPicker::new(vec![InputEvent::Char('a')]);
        let result = picker.pick(PickRequest::new(fruit_lines()));
        assert!(matches!(result, Err(UiError::InputClosed)));
    }

    #[test]
    fn test_events_after_auto_select_are_ignored() {
        let picker = ScriptedPicker::new(vec![
            InputEvent::Char('g'),
            InputEvent::Char('x'),
            InputEvent::Cancel,
        ]);
        let request = PickRequest::new(fruit_lines())
            .with_options(SessionOptions::default().with_select_one(true));

        let outcome = picker.pick(request).unwrap();
        assert_eq!(outcome.line(), Some("grape"));
    }
}
