//! Query tokenizer
//!
//! Splits the query typed by the user into lowercase tokens. Empty tokens
//! produced by leading, trailing or repeated delimiters are dropped, so a
//! query made only of delimiters yields no tokens at all.

use super::error::{MatcherError, Result};
use regex::Regex;

/// How a query is split into tokens
#[derive(Debug, Clone)]
pub enum Delimiter {
    /// Split on every occurrence of a single character
    Literal(char),
    /// Split on every match of a regular expression
    Pattern(Regex),
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::Literal(' ')
    }
}

impl Delimiter {
    /// Build a literal delimiter from a one-character string
    ///
    /// # Errors
    ///
    /// Returns `MatcherError::InvalidDelimiter` unless `s` holds exactly one character.
    pub fn literal(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Literal(c)),
            _ => Err(MatcherError::InvalidDelimiter(s.to_string())),
        }
    }

    /// Build a pattern delimiter from a regex
    ///
    /// # Errors
    ///
    /// Returns `MatcherError::InvalidPattern` if the regex does not compile and
    /// `MatcherError::EmptyMatchingPattern` if it can match the empty string.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        if regex.is_match("") {
            return Err(MatcherError::EmptyMatchingPattern(pattern.to_string()));
        }
        Ok(Self::Pattern(regex))
    }
}

/// Splits queries into lowercase tokens
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    delimiter: Delimiter,
}

impl Tokenizer {
    /// Create a tokenizer with the given delimiter
    #[must_use]
    pub const fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Split `query` into lowercase, non-empty tokens in query order
    #[must_use]
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        match &self.delimiter {
            Delimiter::Literal(c) => collect_tokens(query.split(*c)),
            Delimiter::Pattern(regex) => collect_tokens(regex.split(query)),
        }
    }
}

fn collect_tokens<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}
