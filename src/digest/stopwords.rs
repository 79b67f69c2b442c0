// Built-in stopword tables, one per script category.
//
// Both lists are already in normalized form (lowercase, letters only), so a
// token can be looked up directly after `tokenize::normalize`.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::tokenize::Script;

/// Common Korean conjunctions, pronoun-topic forms, intensifiers, particles,
/// and verb endings that carry little meaning on their own.
pub const KOREAN: &[&str] = &[
    "그리고", "그래서", "하지만", "그러나", "또", "또한", "이건", "이것", "그것", "저것",
    "저는", "나는", "우리는", "너는", "여기는", "거기는", "저기는", "오늘", "내일", "어제",
    "정말", "진짜", "너무", "매우", "아주", "좀", "조금", "그냥", "약간", "및", "등", "등등",
    "에서", "으로", "까지", "부터", "에게", "에게서", "한테", "하면서", "하면서도", "하며",
    "하다", "했다", "하는", "하는데", "됩니다", "합니다", "있다", "있어요", "없는", "없다",
];

/// Common English articles, pronouns, prepositions, and fillers.
pub const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "for", "to", "of", "in", "on",
    "at", "is", "are", "was", "were", "be", "been", "being", "i", "you", "he", "she", "it", "we",
    "they", "this", "that", "these", "those", "with", "as", "by", "about", "from", "into", "over",
    "under", "very", "really", "just", "so", "too", "also",
];

static KOREAN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KOREAN.iter().copied().collect());

static ENGLISH_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

/// The stopword table for a script category.
pub fn for_script(script: Script) -> &'static HashSet<&'static str> {
    match script {
        Script::Korean => &KOREAN_SET,
        Script::Other => &ENGLISH_SET,
    }
}

/// True if a normalized token is a stopword in its own script's table.
pub fn is_stopword(token: &str) -> bool {
    for_script(Script::of(token)).contains(token)
}
