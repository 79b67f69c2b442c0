// Unit tests for the digest functions.
//
// Tests the observable properties of tokenization, keyword extraction, and
// summary rendering: boundaries, caps, ordering, and script handling.

use hudsum::digest::summary::{EMPTY_MESSAGE, ENGLISH_PREFIX, KOREAN_PREFIX};
use hudsum::digest::{extract_keywords, is_korean, normalize, score_keywords, summarize};

// ============================================================
// Script detection
// ============================================================

#[test]
fn is_korean_empty_is_false() {
    assert!(!is_korean(""));
}

#[test]
fn is_korean_single_syllable_flips_whole_text() {
    let text = "This entire sentence is English except for one syllable: 네";
    assert!(is_korean(text));
}

#[test]
fn is_korean_ignores_other_cjk() {
    assert!(!is_korean("東京 タワー"));
}

// ============================================================
// Normalization
// ============================================================

#[test]
fn normalize_uses_unicode_letters_not_ascii() {
    assert_eq!(normalize("Ünïcödé!").as_deref(), Some("ünïcödé"));
    assert_eq!(normalize("«Привет»").as_deref(), Some("привет"));
    assert_eq!(normalize("서울에서,").as_deref(), Some("서울에서"));
}

#[test]
fn normalize_keeps_unicode_numbers() {
    assert_eq!(normalize("½-price").as_deref(), Some("½price"));
}

// ============================================================
// extract_keywords
// ============================================================

#[test]
fn keyword_cap_is_six() {
    let text = "rust cargo crate trait borrow lifetime closure iterator macro async";
    let kws = extract_keywords(text, 6);
    assert_eq!(kws.len(), 6);
}

#[test]
fn fewer_survivors_no_padding() {
    let kws = extract_keywords("the rust and the cargo", 6);
    assert_eq!(kws, vec!["cargo", "rust"]);
}

#[test]
fn numerals_never_included() {
    let kws = extract_keywords("2024 2024 2024 apple apple banana", 6);
    assert!(!kws.iter().any(|k| k == "2024"));
}

#[test]
fn single_characters_never_included_regardless_of_frequency() {
    let text = std::iter::repeat("z 가 q").take(50).collect::<Vec<_>>().join(" ");
    let kws = extract_keywords(&format!("{text} apple"), 6);
    assert_eq!(kws, vec!["apple"]);
}

#[test]
fn equal_scores_order_lexicographically() {
    let kws = extract_keywords("mango grape lemon", 6);
    assert_eq!(kws, vec!["grape", "lemon", "mango"]);
}

#[test]
fn scores_are_sorted_descending() {
    let scored = score_keywords("alpha alpha beta gamma gamma gamma delta epsilon");
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(scored[0].token, "gamma");
    assert_eq!(scored[0].count, 3);
}

#[test]
fn korean_stopwords_removed() {
    let kws = extract_keywords("그리고 오늘 회의에서 예산 그리고 회의에서", 6);
    assert_eq!(kws, vec!["회의에서", "예산"]);
}

// ============================================================
// summarize
// ============================================================

#[test]
fn empty_and_whitespace_give_fixed_sentence() {
    assert_eq!(summarize(""), EMPTY_MESSAGE);
    assert_eq!(summarize("   "), EMPTY_MESSAGE);
}

#[test]
fn short_stopword_text_unchanged() {
    assert_eq!(summarize("is a the"), "is a the");
}

#[test]
fn fifty_char_stopword_text_truncated_to_forty_plus_ellipsis() {
    // 50 characters, every token a stopword
    let text = "the and the and the and the and the and the and to";
    assert_eq!(text.chars().count(), 50);
    let out = summarize(text);
    let expected: String = text.chars().take(40).chain(std::iter::once('…')).collect();
    assert_eq!(out, expected);
    assert!(!out.ends_with("..."));
}

#[test]
fn digits_and_punctuation_only_fall_back_to_text() {
    assert_eq!(summarize("123 456 !!!"), "123 456 !!!");
}

#[test]
fn korean_text_gets_korean_prefix() {
    let out = summarize("오늘 날씨가 정말 좋네요 완전 최고");
    assert!(out.starts_with(&format!("{KOREAN_PREFIX}: ")));
}

#[test]
fn english_text_gets_english_prefix() {
    let out = summarize("The quick brown fox jumps over the lazy dog repeatedly");
    assert!(out.starts_with(&format!("{ENGLISH_PREFIX}: ")));
}

#[test]
fn mixed_text_prefix_follows_existence_test() {
    let out = summarize("deploy the rust service 배포");
    assert!(out.starts_with("키워드 요약: "), "got {out}");
    assert!(out.contains("rust"));
    assert!(out.contains("배포"));
}

#[test]
fn summary_is_deterministic() {
    let text = "pear plum pear plum kiwi fig date lime sloe yuzu";
    assert_eq!(summarize(text), summarize(text));
}

#[test]
fn summary_never_lists_more_than_six_keywords() {
    let out = summarize("one1 two2 three3 four4 five5 six6 seven7 eight8");
    let listed = out.trim_start_matches("Summary: ").split(", ").count();
    assert_eq!(listed, 6);
}
