//! Round-robin hint scheduling
//!
//! Seeds the display grid with a fraction of the puzzle, then reveals one
//! cell at a time, cycling across words so no single word is finished first.

use super::display::DisplayGrid;
use crate::core::{Coord, Puzzle};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;

/// Fraction of the coverage set revealed before play begins
pub const INITIAL_REVEAL_RATIO: f64 = 0.3;

/// Seconds between scheduled hint reveals
///
/// The session loops poll the clock and call [`HintScheduler::reveal_next`]
/// on this cadence; the scheduler itself never reads time.
pub const HINT_INTERVAL_SECS: u64 = 15;

/// Tracks hidden cells and picks which letter the next hint uncovers
///
/// The unrevealed set shrinks monotonically: a cell leaves it exactly once,
/// when a scheduled hint or a correct whole-word guess reveals it.
#[derive(Debug, Clone)]
pub struct HintScheduler {
    display: DisplayGrid,
    unrevealed: Vec<Coord>,
    last_hint_word: Option<usize>,
}

impl HintScheduler {
    /// Initialize from a solved puzzle, revealing a starting subset
    ///
    /// Reveals `ceil(coverage * INITIAL_REVEAL_RATIO)` cells chosen uniformly
    /// at random; the rest of the coverage set starts hidden.
    pub fn new<R: Rng>(puzzle: &Puzzle, rng: &mut R) -> Self {
        let mut coverage = puzzle.coverage();
        coverage.shuffle(rng);

        let reveal_now = (coverage.len() as f64 * INITIAL_REVEAL_RATIO).ceil() as usize;
        let mut display = DisplayGrid::new(puzzle.grid().size());
        for &coord in &coverage[..reveal_now] {
            display.reveal(coord, solution_letter(puzzle, coord));
        }

        Self {
            display,
            unrevealed: coverage[reveal_now..].to_vec(),
            last_hint_word: None,
        }
    }

    /// The grid as the player currently sees it
    #[inline]
    #[must_use]
    pub const fn display(&self) -> &DisplayGrid {
        &self.display
    }

    /// Number of placed-word cells still hidden
    #[inline]
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        self.unrevealed.len()
    }

    /// Reveal one more cell, preferring a word other than the last hinted
    ///
    /// Cycles word indices from `(last + 1) mod N` and reveals a uniformly
    /// random hidden cell of the first other word that still has one. When
    /// only the last-hinted word has hidden cells left, falls back to a
    /// uniformly random cell from the whole unrevealed set. Safe no-op
    /// (returns `None`) once everything is revealed.
    pub fn reveal_next<R: Rng>(&mut self, puzzle: &Puzzle, rng: &mut R) -> Option<Coord> {
        if self.unrevealed.is_empty() {
            return None;
        }

        let n = puzzle.word_count();
        let start = self.last_hint_word.map_or(0, |w| (w + 1) % n);

        for offset in 0..n {
            let w = (start + offset) % n;
            if Some(w) == self.last_hint_word {
                continue;
            }

            let cells: FxHashSet<Coord> = puzzle.word_cells(w).collect();
            let candidates: Vec<usize> = (0..self.unrevealed.len())
                .filter(|&i| cells.contains(&self.unrevealed[i]))
                .collect();

            if let Some(&index) = candidates.choose(rng) {
                let coord = self.reveal_at(puzzle, index);
                self.last_hint_word = Some(w);
                return Some(coord);
            }
        }

        // Only the last-hinted word still has hidden cells
        let index = rng.random_range(0..self.unrevealed.len());
        let coord = self.reveal_at(puzzle, index);
        // Advance the pointer to the owning word so it cannot stall
        self.last_hint_word = puzzle.word_covering(coord);
        Some(coord)
    }

    /// Reveal every cell of word `w`, used on a correct guess
    ///
    /// Idempotent: cells already shown stay shown, and only cells still in
    /// the unrevealed set are removed from it.
    pub fn reveal_word(&mut self, puzzle: &Puzzle, w: usize) {
        for coord in puzzle.word_cells(w) {
            if let Some(index) = self.unrevealed.iter().position(|&c| c == coord) {
                self.unrevealed.swap_remove(index);
            }
            self.display.reveal(coord, solution_letter(puzzle, coord));
        }
    }

    /// Whether every cell of word `w` is currently visible
    #[must_use]
    pub fn is_fully_revealed(&self, puzzle: &Puzzle, w: usize) -> bool {
        puzzle.word_cells(w).all(|coord| self.display.is_revealed(coord))
    }

    /// Remove the unrevealed entry at `index` and show it on the display
    fn reveal_at(&mut self, puzzle: &Puzzle, index: usize) -> Coord {
        let coord = self.unrevealed.swap_remove(index);
        self.display.reveal(coord, solution_letter(puzzle, coord));
        coord
    }
}

/// The solution letter at a coverage cell
fn solution_letter(puzzle: &Puzzle, coord: Coord) -> u8 {
    puzzle
        .grid()
        .letter(coord)
        .expect("coverage cells always hold a letter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Grid, Placement, Word};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Hand-build a puzzle from explicit placements
    fn puzzle_from(texts: &[&str], placements: &[Placement], size: usize) -> Puzzle {
        let words: Vec<Word> = texts.iter().map(|&t| Word::new(t).unwrap()).collect();
        let mut grid = Grid::new(size);
        for (word, placement) in words.iter().zip(placements) {
            for (i, &letter) in word.letters().iter().enumerate() {
                grid.set(placement.cell(i), letter);
            }
        }
        Puzzle::new(grid, words, placements.to_vec())
    }

    /// Two disjoint 5-letter words: coverage set of exactly 10 cells
    fn disjoint_puzzle() -> Puzzle {
        puzzle_from(
            &["abcde", "fghij"],
            &[
                Placement::new(0, 0, Direction::Horizontal),
                Placement::new(2, 0, Direction::Horizontal),
            ],
            8,
        )
    }

    /// Assert hidden and shown cells partition the coverage set exactly
    fn assert_partition(scheduler: &HintScheduler, puzzle: &Puzzle) {
        let coverage: FxHashSet<Coord> = puzzle.coverage().into_iter().collect();
        let hidden: FxHashSet<Coord> = scheduler.unrevealed.iter().copied().collect();
        let shown: FxHashSet<Coord> = scheduler
            .display
            .revealed_letters()
            .map(|(coord, _)| coord)
            .collect();

        assert_eq!(hidden.len(), scheduler.unrevealed.len(), "duplicate hidden cell");
        assert!(hidden.is_disjoint(&shown), "cell both hidden and shown");
        let union: FxHashSet<Coord> = hidden.union(&shown).copied().collect();
        assert_eq!(union, coverage, "hidden and shown cells must cover exactly");
    }

    #[test]
    fn initial_reveal_is_thirty_percent_rounded_up() {
        let puzzle = disjoint_puzzle();
        let mut rng = StdRng::seed_from_u64(9);
        let scheduler = HintScheduler::new(&puzzle, &mut rng);

        // ceil(10 * 0.3) = 3 shown, 7 hidden
        assert_eq!(scheduler.display.revealed_letters().count(), 3);
        assert_eq!(scheduler.unrevealed_count(), 7);
        assert_partition(&scheduler, &puzzle);
    }

    #[test]
    fn reveal_next_preserves_partition() {
        let puzzle = disjoint_puzzle();
        let mut rng = StdRng::seed_from_u64(21);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        while scheduler.unrevealed_count() > 0 {
            let before = scheduler.unrevealed_count();
            let revealed = scheduler.reveal_next(&puzzle, &mut rng);
            assert!(revealed.is_some());
            assert_eq!(scheduler.unrevealed_count(), before - 1);
            assert_partition(&scheduler, &puzzle);
        }

        assert_eq!(scheduler.reveal_next(&puzzle, &mut rng), None);
    }

    #[test]
    fn reveal_next_alternates_words() {
        let puzzle = disjoint_puzzle();
        let mut rng = StdRng::seed_from_u64(33);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        let first = scheduler.reveal_next(&puzzle, &mut rng).unwrap();
        assert_eq!(puzzle.word_covering(first), Some(0));
        assert_eq!(scheduler.last_hint_word, Some(0));

        let second = scheduler.reveal_next(&puzzle, &mut rng).unwrap();
        assert_eq!(puzzle.word_covering(second), Some(1));
        assert_eq!(scheduler.last_hint_word, Some(1));
    }

    #[test]
    fn fallback_keeps_revealing_single_word() {
        let puzzle = puzzle_from(
            &["abcde"],
            &[Placement::new(0, 0, Direction::Horizontal)],
            6,
        );
        let mut rng = StdRng::seed_from_u64(2);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        // ceil(5 * 0.3) = 2 shown, 3 hidden; every reveal after the first
        // takes the fallback path because no other word exists
        let mut revealed = 0;
        while scheduler.reveal_next(&puzzle, &mut rng).is_some() {
            revealed += 1;
            assert_eq!(scheduler.last_hint_word, Some(0));
            assert_partition(&scheduler, &puzzle);
        }
        assert_eq!(revealed, 3);
    }

    #[test]
    fn reveal_word_is_idempotent() {
        let puzzle = disjoint_puzzle();
        let mut rng = StdRng::seed_from_u64(14);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        scheduler.reveal_word(&puzzle, 0);
        let count_after_first = scheduler.unrevealed_count();
        let shown_after_first: Vec<(Coord, u8)> =
            scheduler.display.revealed_letters().collect();

        scheduler.reveal_word(&puzzle, 0);
        assert_eq!(scheduler.unrevealed_count(), count_after_first);
        let shown_after_second: Vec<(Coord, u8)> =
            scheduler.display.revealed_letters().collect();
        assert_eq!(shown_after_first, shown_after_second);
        assert_partition(&scheduler, &puzzle);
    }

    #[test]
    fn reveal_word_completes_word() {
        let puzzle = disjoint_puzzle();
        let mut rng = StdRng::seed_from_u64(14);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        // Only 3 of 10 cells start revealed, so neither word is complete yet
        assert!(!scheduler.is_fully_revealed(&puzzle, 0));
        scheduler.reveal_word(&puzzle, 0);
        assert!(scheduler.is_fully_revealed(&puzzle, 0));
    }

    #[test]
    fn shared_cell_revealed_once_counts_for_both_words() {
        // CAT across and CAR down share the C at (0,0)
        let puzzle = puzzle_from(
            &["cat", "car"],
            &[
                Placement::new(0, 0, Direction::Horizontal),
                Placement::new(0, 0, Direction::Vertical),
            ],
            5,
        );
        let mut rng = StdRng::seed_from_u64(8);
        let mut scheduler = HintScheduler::new(&puzzle, &mut rng);

        scheduler.reveal_word(&puzzle, 0);
        scheduler.reveal_word(&puzzle, 1);
        assert_eq!(scheduler.unrevealed_count(), 0);
        assert_partition(&scheduler, &puzzle);
    }
}
