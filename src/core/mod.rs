//! Core domain types: words, the letter grid, placements, and puzzles

pub mod grid;
pub mod puzzle;
pub mod word;

pub use grid::{Coord, Direction, GRID_SIZE, Grid, MAX_WORD_LENGTH, PUZZLE_WORD_COUNT, Placement};
pub use puzzle::Puzzle;
pub use word::{Word, WordError};
