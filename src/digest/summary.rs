// Summary rendering — keyword line or fallback text.
//
// The display surface is a single short line, so a summary is either a
// script-appropriate prefix followed by the top keywords, or, when nothing
// qualifies as a keyword, the utterance itself cut to a fixed length.

use super::keywords::{extract_keywords, DEFAULT_TOP_K};
use super::tokenize::Script;
use super::traits::Summarizer;

/// Shown when there is no text at all ("nothing to summarize").
pub const EMPTY_MESSAGE: &str = "요약할 내용이 없어요.";

/// Prefix for texts that contain any Hangul ("keyword summary").
pub const KOREAN_PREFIX: &str = "키워드 요약";

pub const ENGLISH_PREFIX: &str = "Summary";

/// Fallback excerpts are cut to this many characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 40;

pub const ELLIPSIS: char = '…';

/// Cut `text` to at most `max_chars` characters, appending a single
/// ellipsis character if anything was removed. Respects UTF-8 boundaries.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + ELLIPSIS.len_utf8());
            out.push_str(&text[..byte_idx]);
            out.push(ELLIPSIS);
            out
        }
    }
}

/// The summary prefix for a whole text.
pub fn prefix_for(text: &str) -> &'static str {
    match Script::of(text) {
        Script::Korean => KOREAN_PREFIX,
        Script::Other => ENGLISH_PREFIX,
    }
}

/// Keyword summarizer with configurable keyword count and excerpt length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSummarizer {
    /// Maximum number of keywords in the summary line
    pub top_k: usize,
    /// Length of the fallback excerpt when no keyword qualifies
    pub excerpt_chars: usize,
}

impl Default for KeywordSummarizer {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl Summarizer for KeywordSummarizer {
    fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return EMPTY_MESSAGE.to_string();
        }

        let keywords = extract_keywords(text, self.top_k);
        if keywords.is_empty() {
            return excerpt(text, self.excerpt_chars);
        }

        format!("{}: {}", prefix_for(text), keywords.join(", "))
    }
}

/// Summarize `text` with the default settings (6 keywords, 40-char excerpt).
pub fn summarize(text: &str) -> String {
    KeywordSummarizer::default().summarize(text)
}
