//! Progressive hint revelation
//!
//! Tracks which placed-word cells the player can already see and doles out
//! further letters on a round-robin-by-word policy.

mod display;
mod scheduler;

pub use display::DisplayGrid;
pub use scheduler::{HINT_INTERVAL_SECS, HintScheduler, INITIAL_REVEAL_RATIO};
