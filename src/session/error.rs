//! Session error types

use super::SessionState;
use thiserror::Error;

/// Errors returned by `Session::handle`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An event arrived after the session reached a terminal state
    #[error("Session already finished: {0}")]
    Finished(SessionState),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
