// hudsum: keyword digests of live speech for heads-up displays
//
// This is the library root. `digest` holds the summarizer itself; the other
// modules connect it to a glasses host platform and to the terminal.

pub mod config;
pub mod digest;
pub mod output;
pub mod session;

#[cfg(feature = "web")]
pub mod web;
