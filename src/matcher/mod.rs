//! Incremental match engine
//!
//! The engine owns the immutable candidate list (plus a lowercased copy of
//! every line) and the current match set: an ordered list of candidate ids
//! that satisfy the current query.
//!
//! # Narrowing discipline
//!
//! Appending to the query can only shrink the match set in contains mode, so
//! the engine filters the previous match set instead of scanning every
//! candidate. Anything else (a deleted character, word-boundary mode, or a
//! pattern delimiter that turned part of a token into a delimiter) recomputes
//! from the full list, because entries dropped by an earlier narrowing can
//! never come back from a filtered set.
//!
//! ```
//! use linepick::matcher::{MatchEngine, MatchOptions, UpdatePath};
//!
//! let lines = vec!["apple pie".to_string(), "banana split".to_string()];
//! let mut engine = MatchEngine::new(lines, MatchOptions::default());
//!
//! assert_eq!(engine.set_query("ap"), &[0]);
//! assert_eq!(engine.last_update(), UpdatePath::Narrowed);
//!
//! assert_eq!(engine.set_query("a"), &[0, 1]);
//! assert_eq!(engine.last_update(), UpdatePath::Reset);
//! ```

mod error;
mod predicate;
mod rank;
mod tokenizer;

pub use error::{MatcherError, Result};
pub use predicate::{MatchMode, fuzzy_match};
pub use rank::{edit_distance, rank, score};
pub use tokenizer::{Delimiter, Tokenizer};

use tracing::debug;

/// Options controlling how queries are matched and ordered
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// Contains or word-boundary matching
    pub mode: MatchMode,
    /// Order matches by edit distance instead of input order
    pub ranked: bool,
    /// How the query is split into tokens
    pub tokenizer: Tokenizer,
}

impl MatchOptions {
    /// Set the match mode
    #[must_use]
    pub const fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable ranked ordering
    #[must_use]
    pub const fn with_ranked(mut self, ranked: bool) -> Self {
        self.ranked = ranked;
        self
    }

    /// Set the tokenizer
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

/// Which path the most recent query update took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePath {
    /// Only the previous match set was filtered
    Narrowed,
    /// Every candidate was tested again
    Reset,
}

/// Candidate list plus the match set for the current query
#[derive(Debug)]
pub struct MatchEngine {
    lines: Vec<String>,
    lower_lines: Vec<String>,
    options: MatchOptions,
    query: String,
    tokens: Vec<String>,
    matches: Vec<usize>,
    last_update: UpdatePath,
}

impl MatchEngine {
    /// Create an engine over `lines` with the empty query applied
    #[must_use]
    pub fn new(lines: Vec<String>, options: MatchOptions) -> Self {
        let lower_lines = lines.iter().map(|line| line.to_lowercase()).collect();
        let mut engine = Self {
            lines,
            lower_lines,
            options,
            query: String::new(),
            tokens: Vec::new(),
            matches: Vec::new(),
            last_update: UpdatePath::Reset,
        };
        engine.matches = engine.evaluate("");
        engine
    }

    /// Recompute the match set for `query` and return it
    pub fn set_query(&mut self, query: &str) -> &[usize] {
        let tokens = self.options.tokenizer.tokenize(query);
        let path = if self.can_narrow(query, &tokens) {
            UpdatePath::Narrowed
        } else {
            UpdatePath::Reset
        };

        let filtered: Vec<usize> = match path {
            UpdatePath::Narrowed => self
                .matches
                .iter()
                .copied()
                .filter(|&id| self.is_match(id, &tokens))
                .collect(),
            UpdatePath::Reset => self.filter_all(&tokens),
        };

        self.matches = self.order(filtered, &tokens);
        self.query = query.to_string();
        self.tokens = tokens;
        self.last_update = path;

        debug!(
            query = %self.query,
            path = ?path,
            matches = self.matches.len(),
            "match set updated"
        );

        &self.matches
    }

    /// Compute the match set for `query` from scratch without changing state
    #[must_use]
    pub fn evaluate(&self, query: &str) -> Vec<usize> {
        let tokens = self.options.tokenizer.tokenize(query);
        let filtered = self.filter_all(&tokens);
        self.order(filtered, &tokens)
    }

    /// Whether a candidate satisfies the given tokens
    #[must_use]
    pub fn is_match(&self, id: usize, tokens: &[String]) -> bool {
        self.lower_lines
            .get(id)
            .is_some_and(|line| fuzzy_match(line, tokens, self.options.mode))
    }

    /// Apply the configured ordering to a filtered id list
    #[must_use]
    pub fn order(&self, ids: Vec<usize>, tokens: &[String]) -> Vec<usize> {
        if self.options.ranked {
            rank(ids, &self.lower_lines, tokens)
        } else {
            ids
        }
    }

    fn filter_all(&self, tokens: &[String]) -> Vec<usize> {
        (0..self.lines.len())
            .filter(|&id| self.is_match(id, tokens))
            .collect()
    }

    /// Narrowing is only sound when the new query can never match a line the
    /// previous query rejected.
    fn can_narrow(&self, query: &str, tokens: &[String]) -> bool {
        self.options.mode == MatchMode::Contains
            && query.len() > self.query.len()
            && query.starts_with(self.query.as_str())
            && self
                .tokens
                .iter()
                .all(|old| tokens.iter().any(|new| new.contains(old.as_str())))
    }

    /// The query the current match set was computed for
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current match set, as candidate ids
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Number of matching candidates
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.lines.len()
    }

    /// Original text of a candidate
    #[must_use]
    pub fn line(&self, id: usize) -> Option<&str> {
        self.lines.get(id).map(String::as_str)
    }

    /// Path taken by the last `set_query`
    #[must_use]
    pub const fn last_update(&self) -> UpdatePath {
        self.last_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fruit_lines, to_lines};
    use pretty_assertions::assert_eq;

    fn engine(options: MatchOptions) -> MatchEngine {
        MatchEngine::new(fruit_lines(), options)
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let engine = engine(MatchOptions::default());
        assert_eq!(engine.matches(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_fruit_scenario() {
        let mut engine = engine(MatchOptions::default());

        assert_eq!(engine.set_query("apple"), &[0, 2]);
        assert_eq!(engine.set_query("ap pie"), &[0]);
    }

    #[test]
    fn test_backspace_resets_from_full_list() {
        let mut engine = engine(MatchOptions::default());
        for query in ["a", "ap", "app", "appl", "apple"] {
            engine.set_query(query);
            assert_eq!(engine.last_update(), UpdatePath::Narrowed);
        }

        assert_eq!(engine.set_query("appl"), &[0, 2]);
        assert_eq!(engine.last_update(), UpdatePath::Reset);
    }

    #[test]
    fn test_reset_recovers_entries_lost_while_narrowing() {
        let mut engine = engine(MatchOptions::default());
        engine.set_query("g");
        assert_eq!(engine.matches(), &[3]);

        engine.set_query("");
        assert_eq!(engine.matches(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_appending_delimiter_and_new_token_narrows() {
        let mut engine = engine(MatchOptions::default());
        engine.set_query("ap");
        engine.set_query("ap ");
        assert_eq!(engine.last_update(), UpdatePath::Narrowed);
        engine.set_query("ap t");
        assert_eq!(engine.last_update(), UpdatePath::Narrowed);
        assert_eq!(engine.matches(), &[2]);
    }

    #[test]
    fn test_word_mode_never_narrows() {
        let mut engine = MatchEngine::new(
            to_lines(&["app", "apple"]),
            MatchOptions::default().with_mode(MatchMode::Word),
        );
        assert!(engine.set_query("ap").is_empty());
        assert_eq!(engine.set_query("app"), &[0]);
        assert_eq!(engine.last_update(), UpdatePath::Reset);
    }

    #[test]
    fn test_pattern_delimiter_completion_resets() {
        let tokenizer = Tokenizer::new(Delimiter::pattern("--").unwrap());
        let mut engine = MatchEngine::new(
            to_lines(&["x-y", "x", "xz"]),
            MatchOptions::default().with_tokenizer(tokenizer),
        );
        assert_eq!(engine.set_query("x-"), &[0]);
        // The second dash completes a delimiter, shrinking the token to "x".
        assert_eq!(engine.set_query("x--"), &[0, 1, 2]);
        assert_eq!(engine.last_update(), UpdatePath::Reset);
    }

    #[test]
    fn test_case_insensitive_candidates() {
        let mut engine = MatchEngine::new(
            to_lines(&["README.md", "src/main.rs"]),
            MatchOptions::default(),
        );
        assert_eq!(engine.set_query("readme"), &[0]);
    }

    #[test]
    fn test_ranked_mode_orders_by_distance() {
        let mut engine = engine(MatchOptions::default().with_ranked(true));
        // "apple pie" is 4 edits from "apple", "apple tart" is 5.
        assert_eq!(engine.set_query("apple"), &[0, 2]);
        assert_eq!(engine.set_query("tart"), &[2]);
    }

    #[test]
    fn test_ranked_empty_query_is_lexicographic() {
        let engine = MatchEngine::new(
            to_lines(&["pear", "Apple", "fig"]),
            MatchOptions::default().with_ranked(true),
        );
        assert_eq!(engine.matches(), &[1, 2, 0]);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut engine = engine(MatchOptions::default());
        engine.set_query("apple");
        assert_eq!(engine.evaluate("grape"), vec![3]);
        assert_eq!(engine.query(), "apple");
        assert_eq!(engine.matches(), &[0, 2]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let mut engine = MatchEngine::new(Vec::new(), MatchOptions::default());
        assert!(engine.matches().is_empty());
        assert!(engine.set_query("x").is_empty());
        assert_eq!(engine.line(0), None);
    }
}
