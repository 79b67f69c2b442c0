// Frequency keyword extraction.
//
// One pass over the normalized tokens counts the survivors of the length,
// stopword, and numeral filters. Each distinct token is then scored by its
// count plus a small bonus for length, so that among equally frequent words
// the longer, usually more specific ones rank first.

use std::collections::HashMap;

use tracing::debug;

use super::stopwords;
use super::tokenize::{char_len, tokens};

/// Number of keywords shown in a summary.
pub const DEFAULT_TOP_K: usize = 6;

/// Tokens shorter than this (in characters) are never keywords.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Length bonus per character, capped at `LENGTH_BONUS_CAP` characters.
pub const LENGTH_BONUS_PER_CHAR: f64 = 0.2;
pub const LENGTH_BONUS_CAP: usize = 10;

/// A surviving token with its occurrence count and final score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredKeyword {
    pub token: String,
    pub count: u32,
    pub score: f64,
}

/// Score = occurrences + 0.2 per character, counting at most 10 characters.
pub fn score(count: u32, token: &str) -> f64 {
    count as f64 + char_len(token).min(LENGTH_BONUS_CAP) as f64 * LENGTH_BONUS_PER_CHAR
}

fn is_numeral(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a normalized token can be counted as a keyword.
fn qualifies(token: &str) -> bool {
    char_len(token) >= MIN_TOKEN_CHARS && !stopwords::is_stopword(token) && !is_numeral(token)
}

/// Score every qualifying token in `text`, best first.
///
/// Ordering is by descending score, then ascending token (code point order)
/// so the result is fully deterministic.
pub fn score_keywords(text: &str) -> Vec<ScoredKeyword> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens(text).filter(|t| qualifies(t)) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut scored: Vec<ScoredKeyword> = counts
        .into_iter()
        .map(|(token, count)| ScoredKeyword {
            score: score(count, &token),
            token,
            count,
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.token.cmp(&b.token)));

    debug!(distinct = scored.len(), "Scored keyword candidates");

    scored
}

/// The `top_k` best keywords in `text`. Returns fewer when fewer qualify,
/// and an empty vector when none do.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    score_keywords(text)
        .into_iter()
        .take(top_k)
        .map(|k| k.token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        assert!((score(1, "ab") - 1.4).abs() < 1e-9);
        assert!((score(3, "apple") - 4.0).abs() < 1e-9);
        // Length bonus stops growing at ten characters
        assert!((score(1, "internationalization") - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_beats_length() {
        let kws = extract_keywords("apple apple apple banana", 6);
        assert_eq!(kws, vec!["apple", "banana"]);
    }

    #[test]
    fn test_counts_are_case_and_punctuation_insensitive() {
        let scored = score_keywords("Rust, rust! RUST? crab");
        assert_eq!(scored[0].token, "rust");
        assert_eq!(scored[0].count, 3);
    }

    #[test]
    fn test_numerals_excluded() {
        let kws = extract_keywords("2024 2024 2024 apple apple banana", 6);
        assert!(!kws.contains(&"2024".to_string()));
        assert_eq!(kws, vec!["apple", "banana"]);
    }

    #[test]
    fn test_mixed_alphanumeric_kept() {
        let kws = extract_keywords("covid19 covid19", 6);
        assert_eq!(kws, vec!["covid19"]);
    }

    #[test]
    fn test_single_character_excluded() {
        let kws = extract_keywords("x x x x x y y y 가 가 가 word", 6);
        assert_eq!(kws, vec!["word"]);
    }

    #[test]
    fn test_stopwords_excluded_per_script() {
        // "cat" and "고양이" both score 1.6; Latin sorts before Hangul
        let kws = extract_keywords("the cat and 그리고 고양이", 6);
        assert_eq!(kws, vec!["cat", "고양이"]);
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // All five-letter words seen once: identical scores
        let kws = extract_keywords("delta bravo alpha charl", 6);
        assert_eq!(kws, vec!["alpha", "bravo", "charl", "delta"]);
    }

    #[test]
    fn test_top_k_cap() {
        let text = "alpha bravo charlie delta echoes foxtrot golfer hotels";
        let kws = extract_keywords(text, 6);
        assert_eq!(kws.len(), 6);
        assert!(extract_keywords(text, 3).len() == 3);
        assert!(extract_keywords(text, 0).is_empty());
    }

    #[test]
    fn test_boundary_ties_prefer_smaller_tokens() {
        // Seven six-character words tie at 2.2
        let text = "zulu99 yankee xrayss whisky victor uniform tangos sierra";
        let kws = extract_keywords(text, 6);
        let mut expected: Vec<&str> = vec![
            "zulu99", "yankee", "xrayss", "whisky", "victor", "tangos", "sierra",
        ];
        expected.sort();
        // "uniform" is longer, so it scores higher and leads
        assert_eq!(kws[0], "uniform");
        assert_eq!(&kws[1..], &expected[..5]);
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert!(extract_keywords("", 6).is_empty());
        assert!(extract_keywords("   ", 6).is_empty());
        assert!(extract_keywords("!!! ... 123 45", 6).is_empty());
    }
}
