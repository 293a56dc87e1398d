//! UI error types

use crate::session::SessionError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The controlling terminal could not be opened
    #[error("No terminal available: {0}")]
    NoTerminal(#[source] std::io::Error),

    /// Input ended while the session was still editing
    ///
    /// The pick command reports this as a cancel.
    #[error("Input ended before a line was picked")]
    InputClosed,

    /// The session rejected an event
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
