//! Common types for UI abstraction layer

use super::error::{Result, UiError};
use crate::session::{Session, SessionOptions, SessionState};

/// Everything a picker needs to run one session
#[derive(Debug, Clone, Default)]
pub struct PickRequest {
    /// Lines to choose from, in input order
    pub candidates: Vec<String>,
    /// Text shown before the query
    pub prompt: String,
    /// Matching and auto-select options
    pub options: SessionOptions,
}

impl PickRequest {
    /// Create a request with default options and no prompt
    #[must_use]
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            prompt: String::new(),
            options: SessionOptions::default(),
        }
    }

    /// Set the prompt
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the session options
    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Start a session for this request
    #[must_use]
    pub fn into_session(self, max_visible_lines: usize, max_columns: usize) -> Session {
        Session::new(self.candidates, self.options, max_visible_lines, max_columns)
    }
}

/// Exit status for a picked line
const EXIT_SELECTED: u8 = 0;
/// Exit status for a cancelled pick or input that ended first
const EXIT_CANCELLED: u8 = 1;

/// How a pick ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A line was chosen
    Selected {
        /// Candidate id (input line number, zero-based)
        id: usize,
        /// Candidate text
        line: String,
    },
    /// The user left without choosing
    Cancelled,
}

impl PickOutcome {
    /// Read the outcome of a finished session
    ///
    /// # Errors
    ///
    /// Returns `UiError::InputClosed` if the session is still editing.
    pub fn from_session(session: &Session) -> Result<Self> {
        match session.state() {
            SessionState::Selected(_) => session
                .selection()
                .map(|(id, line)| Self::Selected {
                    id,
                    line: line.to_string(),
                })
                .ok_or(UiError::InputClosed),
            SessionState::Cancelled => Ok(Self::Cancelled),
            SessionState::Editing => Err(UiError::InputClosed),
        }
    }

    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Selected { .. } => EXIT_SELECTED,
            Self::Cancelled => EXIT_CANCELLED,
        }
    }

    /// The chosen line, if any
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Selected { line, .. } => Some(line),
            Self::Cancelled => None,
        }
    }
}
