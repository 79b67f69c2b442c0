// Summarizer trait — swap-ready abstraction.
//
// The session layer only needs "text in, one display line out", so it depends
// on this trait rather than on the keyword implementation. A different
// strategy can be dropped in without touching event handling.

/// Turns one utterance into a single display line.
///
/// Implementations must be total: every input, including empty text,
/// produces a line.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> String;
}
