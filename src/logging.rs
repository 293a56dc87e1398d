//! Log file setup
//!
//! The terminal is taken by the picker and stdout carries the result, so
//! logs only ever go to a file. Without a configured file no subscriber is
//! installed and every `tracing` event is dropped.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;

/// Errors raised while installing the log subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level string is not a known level
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),

    /// The log path has no file name
    #[error("Invalid log file path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The log file could not be opened
    #[error("Failed to open log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global subscriber is already set
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Parse a level name such as `debug` or `warn`
///
/// # Errors
///
/// Returns `LoggingError::InvalidLevel` for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Open `path` for appending without rotation
///
/// # Errors
///
/// Returns an error if the path has no file name or the file cannot be opened.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?)
}

/// Install a global subscriber writing to `path` at `level`
///
/// # Errors
///
/// Returns an error if the level is unknown, the file cannot be opened, or a
/// subscriber was already installed.
pub fn init(path: &Path, level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let appender = file_appender(path)?;

    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(
            parse_level("loud"),
            Err(LoggingError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_file_appender_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linepick.log");
        file_appender(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_path_without_file_name() {
        assert!(matches!(
            file_appender(Path::new("/")),
            Err(LoggingError::InvalidPath(_))
        ));
    }
}
