//! Matcher error types

use thiserror::Error;

/// Errors raised while building a matcher from user-supplied options
///
/// Matching itself never fails; these only surface when a tokenizer is
/// configured from the command line or the config file.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The delimiter regex did not compile
    #[error("Invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The delimiter regex matches the empty string, which would split every character
    #[error("Delimiter pattern '{0}' matches the empty string")]
    EmptyMatchingPattern(String),

    /// A literal delimiter must be exactly one character
    #[error("Delimiter must be a single character, got '{0}'")]
    InvalidDelimiter(String),
}

/// Result type for matcher construction
pub type Result<T> = std::result::Result<T, MatcherError>;
