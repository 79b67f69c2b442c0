// Tokenizer — whitespace segmentation, normalization, and script detection.
//
// Normalization reduces a segment to the form used for counting and stopword
// lookup: lowercased, with everything except Unicode letters and numbers
// stripped. Character classes come from full Unicode properties, so Hangul
// syllables, accented Latin, and other scripts survive intact.

use std::sync::LazyLock;

use regex::Regex;

/// Everything that is not a Unicode letter or number.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("NON_WORD pattern is valid"));

/// Any code point from the Hangul script.
static HANGUL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Hangul}").expect("HANGUL pattern is valid"));

/// Script category used to pick a stopword table and a summary prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Korean,
    Other,
}

impl Script {
    /// Classify a token or a whole text. See [`is_korean`] for the rule.
    pub fn of(text: &str) -> Self {
        if is_korean(text) {
            Script::Korean
        } else {
            Script::Other
        }
    }
}

/// True if `text` contains at least one Hangul code point.
///
/// This is an existence test, not a majority vote: one Hangul syllable
/// embedded in an otherwise English sentence classifies the whole string as
/// Korean. Summary prefixes depend on exactly this behavior.
pub fn is_korean(text: &str) -> bool {
    HANGUL.is_match(text)
}

/// Normalize one whitespace-delimited segment into a token.
///
/// Returns `None` when nothing but punctuation or symbols remains.
pub fn normalize(segment: &str) -> Option<String> {
    let lowered = segment.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let token = stripped.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Split `text` on Unicode whitespace and normalize every segment,
/// skipping the ones that normalize to nothing.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize)
}

/// Length of a token in characters (code points), not bytes.
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}
