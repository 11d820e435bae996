//! Generate command
//!
//! Builds one puzzle from the given word set and prints the solved grid.

use crate::core::{GRID_SIZE, Word};
use crate::generator::{PlaceError, place_words};
use crate::output::print_solution;
use colored::Colorize;
use rand::Rng;

/// Generate a puzzle and print its solution and placements
///
/// With `verbose`, also prints the intersection density of the result.
///
/// # Errors
/// Returns [`PlaceError`] when the word set cannot be arranged.
pub fn run_generate<R: Rng>(words: &[Word], verbose: bool, rng: &mut R) -> Result<(), PlaceError> {
    let puzzle = place_words(words, GRID_SIZE, rng)?;

    println!("\n{}", "=== Generated Puzzle ===".bright_cyan().bold());
    print_solution(puzzle.grid());

    println!("\nPlacements:");
    for w in 0..puzzle.word_count() {
        let placement = puzzle.placement(w);
        println!(
            "  {:2}. {:<20} row {:2}, col {:2}, {}",
            w + 1,
            puzzle.word(w).text(),
            placement.row,
            placement.col,
            placement.direction
        );
    }

    if verbose {
        let total_letters: usize = puzzle.words().iter().map(Word::len).sum();
        println!(
            "\n{} letters across {} words, {} shared cells ({} grid cells used)",
            total_letters,
            puzzle.word_count(),
            puzzle.overlap_count(),
            puzzle.coverage().len()
        );
    }

    Ok(())
}
