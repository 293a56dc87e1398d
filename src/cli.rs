//! Command-line interface definitions and parsing
//!
//! linepick has no subcommands: it reads candidates from stdin, runs the
//! picker on the terminal and prints the chosen line. Flags override values
//! from the config file and environment.
//!
//! # Examples
//!
//! ```
//! use linepick::cli::Cli;
//!
//! let cli = Cli::parse_from_args(["linepick", "-1", "-p", "> "]);
//! assert!(cli.select_one);
//! assert_eq!(cli.prompt.as_deref(), Some("> "));
//! ```

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "linepick")]
#[command(about = "Interactively pick one line from standard input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text shown before the query
    #[arg(short = 'p', long = "prompt", value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Select automatically once exactly one line matches
    #[arg(short = '1', long = "select-one")]
    pub select_one: bool,

    /// Only match tokens at word boundaries
    #[arg(short = 'w', long = "word-boundary")]
    pub word_boundary: bool,

    /// Order matches by edit distance to the query
    #[arg(short = 'r', long = "rank")]
    pub rank: bool,

    /// Character separating query tokens
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        conflicts_with = "delimiter_regex"
    )]
    pub delimiter: Option<String>,

    /// Regular expression separating query tokens
    #[arg(long = "delimiter-regex", value_name = "PATTERN")]
    pub delimiter_regex: Option<String>,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Ignore the config file and LINEPICK_* environment variables
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Print a shell completion script and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list, exiting on invalid input
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }
}

/// Write a completion script for `shell` to `buf`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
