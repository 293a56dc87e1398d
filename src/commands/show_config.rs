//! Show-config command - print the effective settings as TOML

use crate::{PickError, config::PickerSettings, ui::OutputWriter};

type Result<T> = std::result::Result<T, PickError>;

/// Execute the show-config command
///
/// # Errors
///
/// Returns `PickError::Config` if the settings cannot be serialized.
pub fn execute(settings: &PickerSettings, output: &dyn OutputWriter) -> Result<()> {
    let text = settings.to_toml()?;
    output.write(text.trim_end());
    Ok(())
}
