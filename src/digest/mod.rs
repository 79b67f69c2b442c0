// Digest — keyword extraction and one-line summaries of an utterance.
//
// Everything here is pure and stateless: each call sees only its own input.

pub mod keywords;
pub mod stopwords;
pub mod summary;
pub mod tokenize;
pub mod traits;

pub use keywords::{extract_keywords, score_keywords, ScoredKeyword, DEFAULT_TOP_K};
pub use summary::{summarize, KeywordSummarizer};
pub use tokenize::{is_korean, normalize};
pub use traits::Summarizer;
