//! Testing utilities for linepick
//!
//! Candidate fixtures, a helper for typing whole queries into a session and
//! a temporary config file wrapper.
//!
//! Only available when compiled with `cfg(test)`.

use crate::session::{InputEvent, Session};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Convert string slices into owned candidate lines
#[must_use]
pub fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

/// The four-line candidate list used throughout the tests
#[must_use]
pub fn fruit_lines() -> Vec<String> {
    to_lines(&["apple pie", "banana split", "apple tart", "grape"])
}

/// Feed every character of `query` to the session as a `Char` event
///
/// # Panics
/// Panics if the session has already finished.
pub fn type_query(session: &mut Session, query: &str) {
    for c in query.chars() {
        session
            .handle(InputEvent::Char(c))
            .expect("session finished while typing");
    }
}

/// A TOML config file that is removed when dropped
pub struct TestConfig {
    file: NamedTempFile,
}

impl TestConfig {
    /// Write `contents` to a fresh temporary `.toml` file
    ///
    /// # Panics
    /// Panics if the file cannot be created or written.
    #[must_use]
    pub fn new(contents: &str) -> Self {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp config");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp config");
        Self { file }
    }

    /// Path of the config file
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
