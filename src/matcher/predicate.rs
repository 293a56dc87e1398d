//! Line predicates
//!
//! Both predicates expect the line to be lowercased already; the engine keeps a
//! lowercased copy of every candidate so this is done once at load time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How tokens are matched against a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every token occurs somewhere in the line
    #[default]
    Contains,
    /// Every token occurs with no letter directly before or after it
    #[serde(alias = "word-boundary", alias = "word_boundary")]
    Word,
}

impl MatchMode {
    /// Name used in configuration files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Word => "word",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a lowercased line satisfies every token
///
/// Tokens may appear in any order. An empty token list matches every line.
#[must_use]
pub fn fuzzy_match(line: &str, tokens: &[String], mode: MatchMode) -> bool {
    match mode {
        MatchMode::Contains => tokens.iter().all(|token| line.contains(token.as_str())),
        MatchMode::Word => tokens.iter().all(|token| has_word_occurrence(line, token)),
    }
}

/// Scan occurrences of `token` left to right and accept the first one flanked
/// by non-alphabetic characters or the string edges.
fn has_word_occurrence(line: &str, token: &str) -> bool {
    if token.is_empty() {
        return true;
    }

    let mut from = 0;
    while let Some(pos) = line[from..].find(token) {
        let start = from + pos;
        let end = start + token.len();

        let clear_before = line[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphabetic());
        let clear_after = line[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphabetic());
        if clear_before && clear_after {
            return true;
        }

        // Occurrences may overlap, so resume one character past this start.
        from = start + line[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
