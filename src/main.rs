//! linepick CLI application entry point
//!
//! Reads newline-separated candidates from stdin, lets the user narrow them
//! down on the terminal and prints the chosen line to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Pick a file and open it
//! vim "$(git ls-files | linepick -p 'file> ')"
//!
//! # Select automatically once one line is left
//! ps -e | linepick -1
//!
//! # Match whole words, best edit distance first
//! cat words.txt | linepick -w -r
//! ```
//!
//! # Exit status
//!
//! - 0: a line was picked and printed
//! - 1: the user cancelled, or input ended before a line was picked
//! - 2: an error occurred (no terminal, bad configuration, I/O failure)
//!
//! # Configuration
//!
//! Defaults can be set in `~/.config/linepick/config.toml` on Linux or with
//! `LINEPICK_*` environment variables; flags override both.

use linepick::{
    PickError,
    cli::{Cli, generate_completions},
    commands,
    config::PickerSettings,
    logging,
    ui::{OutputWriter, PickOutcome, RatatuiPicker, StdoutWriter},
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, PickError>;

/// Exit status for any error
const EXIT_ERROR: u8 = 2;

/// Layer config file, environment and flags
fn load_settings(cli: &Cli) -> Result<PickerSettings> {
    let mut settings = if cli.no_config {
        PickerSettings::default()
    } else {
        PickerSettings::load()?
    };
    settings.merge_cli(cli);
    Ok(settings)
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        generate_completions(shell, &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = load_settings(cli)?;

    if cli.print_config {
        commands::show_config(&settings, output)?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &settings.log_file {
        logging::init(path, &settings.log_level)?;
    }

    let picker = RatatuiPicker::new();
    let outcome = commands::pick(&picker, io::stdin().lock(), &settings)?;
    if let PickOutcome::Selected { line, .. } = &outcome {
        output.write(line);
    }
    Ok(ExitCode::from(outcome.exit_status()))
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = StdoutWriter::new();

    match run(&cli, &output) {
        Ok(code) => code,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
