//! Output abstraction layer
//!
//! stdout is reserved for the picked line so scripts can capture it;
//! diagnostics go to stderr.

use colored::Colorize;
use std::io::{self, Write};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use linepick::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("picked line");
/// output.error("no terminal available");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line to stdout
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);
}

/// CLI implementation - results to stdout, diagnostics to stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        // A closed pipe on stdout is not worth reporting.
        let _ = writeln!(stdout, "{message}").and_then(|()| stdout.flush());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Result line
    Normal,
    /// Error message
    Error,
}

/// Writer that records messages instead of printing them
#[cfg(test)]
#[derive(Default)]
pub struct BufferWriter {
    messages: std::sync::Mutex<Vec<(MessageLevel, String)>>,
}

#[cfg(test)]
impl BufferWriter {
    /// Recorded messages, oldest first
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }
}
