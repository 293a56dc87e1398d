//! Edit-distance ranking
//!
//! Ranked mode orders matches by how far each candidate is from the query:
//! the sum of Levenshtein distances between the lowercased candidate and
//! every token, lowest first, with the lowercased text breaking ties.

use std::mem;

/// Levenshtein distance with unit insert, delete and substitute costs
///
/// Works on Unicode scalar values and keeps two rows sized by the shorter
/// input.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + usize::from(long_char != short_char);
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Sum of edit distances between a lowercased line and each token
#[must_use]
pub fn score(line: &str, tokens: &[String]) -> usize {
    tokens.iter().map(|token| edit_distance(line, token)).sum()
}

/// Reorder candidate ids by ascending score, then by lowercased text
///
/// `lower_lines` is indexed by candidate id. The sort is stable, so ids that
/// tie on both keys keep their incoming order.
#[must_use]
pub fn rank(ids: Vec<usize>, lower_lines: &[String], tokens: &[String]) -> Vec<usize> {
    let mut scored: Vec<(usize, usize)> = ids
        .into_iter()
        .map(|id| (score(&lower_lines[id], tokens), id))
        .collect();

    scored.sort_by(|(score_a, id_a), (score_b, id_b)| {
        score_a
            .cmp(score_b)
            .then_with(|| lower_lines[*id_a].cmp(&lower_lines[*id_b]))
    });

    scored.into_iter().map(|(_, id)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_edit_distance_classic_cases() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_edit_distance_is_symmetric() {
        assert_eq!(edit_distance("apple pie", "pie"), edit_distance("pie", "apple pie"));
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_score_sums_tokens_and_empty_is_zero() {
        assert_eq!(score("apple", &[]), 0);
        let tokens = vec!["apple".to_string(), "ap".to_string()];
        assert_eq!(score("apple", &tokens), 3);
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let lower = lines(&["apple tart", "apple", "apple pie"]);
        let ranked = rank(vec![0, 1, 2], &lower, &["apple".to_string()]);
        assert_eq!(ranked, vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_ties_break_lexicographically() {
        let lower = lines(&["Beta", "alpha", "gamma"]);
        // Every candidate is five characters away from "zzzzz".
        let ranked = rank(vec![0, 1, 2], &lower, &["zzzzz".to_string()]);
        assert_eq!(ranked, vec![1, 0, 2]);
    }

    #[test]
    fn test_rank_identical_text_keeps_incoming_order() {
        let lower = lines(&["dup", "DUP", "dup"]);
        let ranked = rank(vec![2, 0, 1], &lower, &[]);
        assert_eq!(ranked, vec![2, 0, 1]);
    }
}
