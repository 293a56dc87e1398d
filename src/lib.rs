//! linepick - pick one line from standard input on the terminal
//!
//! The library is split so that everything but the terminal frontend can be
//! driven from tests: a [`matcher::MatchEngine`] keeps the match set for a
//! query, a [`viewport::ViewportState`] keeps the choice on screen, and a
//! [`session::Session`] turns input events into state changes. Frontends
//! implement [`ui::LinePicker`].

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod matcher;
pub mod session;
pub mod source;
pub mod ui;
pub mod viewport;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickError {
    /// Invalid matcher options
    #[error("Matcher error: {0}")]
    Matcher(#[from] matcher::MatcherError),
    /// Session misuse
    #[error("Session error: {0}")]
    Session(#[from] session::SessionError),
    /// Frontend failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Log setup failure
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
