pub mod events;
pub mod session;
pub mod summarize;
