//! Per-game solving state: solved words, score, and guess evaluation

mod state;

pub use state::{GuessOutcome, Session};
