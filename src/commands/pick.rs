//! Pick command - read candidates and let the user choose one

use crate::{
    PickError, config::PickerSettings, source::read_candidates,
    ui::{LinePicker, PickOutcome, PickRequest, UiError},
};
use std::io::BufRead;
use tracing::info;

type Result<T> = std::result::Result<T, PickError>;

/// Execute the pick command
///
/// Settings are validated before any input is read, so a bad delimiter
/// fails fast even on a large stream. Input that ends before a line is
/// picked counts as a cancel.
///
/// # Errors
///
/// Returns `PickError` if the settings are invalid, reading the input
/// fails, or the picker fails.
pub fn execute<P, R>(picker: &P, input: R, settings: &PickerSettings) -> Result<PickOutcome>
where
    P: LinePicker + ?Sized,
    R: BufRead,
{
    let options = settings.session_options()?;
    let candidates = read_candidates(input)?;
    info!(candidates = candidates.len(), mode = %options.match_options.mode, "starting pick");

    let request = PickRequest::new(candidates)
        .with_prompt(settings.prompt.as_str())
        .with_options(options);
    let outcome = match picker.pick(request) {
        Err(UiError::InputClosed) => {
            info!("input ended without a selection");
            PickOutcome::Cancelled
        }
        result => result?,
    };

    info!(selected = outcome.line().is_some(), "pick finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchMode;
    use crate::session::InputEvent;
    use crate::ui::mock::ScriptedPicker;
    use std::io::Cursor;

    const INPUT: &str = "apple pie\nbanana split\napple tart\ngrape\n";

    #[test]
    fn test_pick_selects_line() {
        let picker = ScriptedPicker::new(vec![
            InputEvent::Char('a'),
            InputEvent::Char('p'),
            InputEvent::down(),
            InputEvent::Confirm,
        ]);
        let outcome = execute(&picker, Cursor::new(INPUT), &PickerSettings::default()).unwrap();
        assert_eq!(outcome.line(), Some("apple tart"));
    }

    #[test]
    fn test_pick_cancel() {
        let picker = ScriptedPicker::new(vec![InputEvent::Cancel]);
        let outcome = execute(&picker, Cursor::new(INPUT), &PickerSettings::default()).unwrap();
        assert_eq!(outcome, PickOutcome::Cancelled);
    }

    #[test]
    fn test_end_of_input_is_cancel() {
        let picker = ScriptedPicker::new(vec![InputEvent::Char('a'), InputEvent::Char('p')]);
        let outcome = execute(&picker, Cursor::new(INPUT), &PickerSettings::default()).unwrap();
        assert_eq!(outcome, PickOutcome::Cancelled);
        assert_eq!(outcome.exit_status(), 1);
    }

    #[test]
    fn test_pick_select_one() {
        let settings = PickerSettings {
            select_one: true,
            ..PickerSettings::default()
        };
        let picker = ScriptedPicker::new(vec![InputEvent::Char('b')]);
        let outcome = execute(&picker, Cursor::new(INPUT), &settings).unwrap();
        assert_eq!(outcome.line(), Some("banana split"));
    }

    #[test]
    fn test_pick_word_mode() {
        let settings = PickerSettings {
            match_mode: MatchMode::Word,
            select_one: true,
            ..PickerSettings::default()
        };
        let picker = ScriptedPicker::typing("pie");
        let outcome = execute(&picker, Cursor::new(INPUT), &settings).unwrap();
        assert_eq!(outcome.line(), Some("apple pie"));
    }

    #[test]
    fn test_invalid_delimiter_fails_before_picking() {
        let settings = PickerSettings {
            delimiter: String::new(),
            ..PickerSettings::default()
        };
        let picker = ScriptedPicker::new(vec![InputEvent::Confirm]);
        let result = execute(&picker, Cursor::new(INPUT), &settings);
        assert!(matches!(result, Err(PickError::Matcher(_))));
    }
}
