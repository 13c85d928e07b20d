//! Term-frequency relevance scoring.
//!
//! Deliberately a simple, explainable, length-normalized function rather
//! than a statistical ranking model, so retrieval behavior stays auditable
//! against the literal material text. There is no inverse-document-frequency
//! weighting: the corpus is small and usually topic-filtered before scoring.

use std::collections::HashMap;

/// Bonus added per query token that also appears in the chunk's title.
pub const TITLE_MATCH_BONUS: f64 = 0.5;

/// Score a chunk against a query.
///
/// Each query token contributes its frequency in `chunk_tokens` divided by
/// the chunk's total token count; tokens absent from the chunk contribute
/// nothing. A query token that also appears in `title_tokens` adds
/// [`TITLE_MATCH_BONUS`] on top, rewarding title matches independently of
/// body term frequency. Repeated query tokens contribute each time they
/// occur.
///
/// The result is never negative, and is exactly 0 when the query overlaps
/// neither the chunk text nor the title.
pub fn relevance(query_tokens: &[String], chunk_tokens: &[String], title_tokens: &[String]) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in chunk_tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let total = chunk_tokens.len();

    let mut score = 0.0;
    for token in query_tokens {
        if let Some(&n) = counts.get(token.as_str()) {
            score += n as f64 / total as f64;
        }
        if title_tokens.iter().any(|t| t == token) {
            score += TITLE_MATCH_BONUS;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn test_no_overlap_scores_zero() {
        let score = relevance(
            &tokenize("sphere radius"),
            &tokenize("a cube has six faces"),
            &tokenize("Cube Basics"),
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_term_frequency_is_length_normalized() {
        // "cube" appears once among four tokens.
        let score = relevance(
            &tokenize("cube"),
            &tokenize("the cube is blue"),
            &tokenize("Shapes"),
        );
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_higher_frequency_never_scores_lower() {
        let query = tokenize("volume");
        let sparse = tokenize("volume of water in a large glass container");
        let dense = tokenize("volume volume volume of water in a container");
        let title = tokenize("Measures");

        let low = relevance(&query, &sparse, &title);
        let high = relevance(&query, &dense, &title);
        assert!(high > low);
    }

    #[test]
    fn test_title_bonus_breaks_body_tie() {
        let query = tokenize("cube");
        let body = tokenize("volume equals side times side times side");

        let without = relevance(&query, &body, &tokenize("Solid Shapes"));
        let with = relevance(&query, &body, &tokenize("Cube Basics"));
        assert!(with > without);
        assert!((with - without - TITLE_MATCH_BONUS).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_query_tokens_count_each_time() {
        let query = tokenize("cube cube");
        let body = tokenize("a cube");
        let title = tokenize("Cube Basics");

        // Each occurrence adds tf (1/2) plus the title bonus.
        let score = relevance(&query, &body, &title);
        assert!((score - 2.0 * (0.5 + TITLE_MATCH_BONUS)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chunk_tokens_no_division_by_zero() {
        let score = relevance(&tokenize("cube"), &[], &tokenize("Cube Basics"));
        assert!((score - TITLE_MATCH_BONUS).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let score = relevance(&[], &tokenize("a cube"), &tokenize("Cube Basics"));
        assert_eq!(score, 0.0);
    }
}
