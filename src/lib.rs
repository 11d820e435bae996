//! Wordweave
//!
//! A crossword-style word grid generator with a timed, hint-driven solving
//! game. Words are packed into a bounded grid by a backtracking search that
//! maximizes letter overlap, then a session progressively reveals letters
//! while the player guesses each word's placement.
//!
//! # Quick Start
//!
//! ```rust
//! use wordweave::core::{GRID_SIZE, Word};
//! use wordweave::generator::place_words;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let words = vec![
//!     Word::new("cat").unwrap(),
//!     Word::new("car").unwrap(),
//!     Word::new("arc").unwrap(),
//! ];
//! let mut rng = StdRng::seed_from_u64(1);
//! let puzzle = place_words(&words, GRID_SIZE, &mut rng).unwrap();
//! assert_eq!(puzzle.word_count(), 3);
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Progressive hint revelation
pub mod hints;

// Per-game solving state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
