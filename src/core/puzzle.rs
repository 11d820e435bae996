//! A finished puzzle: the solution grid plus per-word placements
//!
//! Produced once by the placement search and immutable afterwards. The hint
//! scheduler and session state only ever read from it.

use super::grid::{Coord, Grid, Placement};
use super::word::Word;
use rustc_hash::FxHashSet;

/// The authoritative solution: letter grid, word set, and placements
///
/// `words[w]` sits at `placements[w]`; the two vectors are always the same
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<Word>,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Bundle a solved grid with its words and placements
    pub(crate) fn new(grid: Grid, words: Vec<Word>, placements: Vec<Placement>) -> Self {
        debug_assert_eq!(words.len(), placements.len());
        Self {
            grid,
            words,
            placements,
        }
    }

    /// The solution grid
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All words in placement order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word with index `w`
    ///
    /// # Panics
    /// Panics if `w` is not a valid word index.
    #[inline]
    #[must_use]
    pub fn word(&self, w: usize) -> &Word {
        &self.words[w]
    }

    /// The placement of word `w`
    ///
    /// # Panics
    /// Panics if `w` is not a valid word index.
    #[inline]
    #[must_use]
    pub fn placement(&self, w: usize) -> Placement {
        self.placements[w]
    }

    /// All placements in word order
    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of words in the puzzle
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Iterate the grid coordinates covered by word `w`
    pub fn word_cells(&self, w: usize) -> impl Iterator<Item = Coord> {
        self.placements[w].cells(self.words[w].len())
    }

    /// The coverage set: every cell occupied by any word, each exactly once
    ///
    /// Order is deterministic: first occurrence wins, scanning words in index
    /// order and letters in position order.
    #[must_use]
    pub fn coverage(&self) -> Vec<Coord> {
        let mut seen = FxHashSet::default();
        let mut coverage = Vec::new();
        for w in 0..self.word_count() {
            for coord in self.word_cells(w) {
                if seen.insert(coord) {
                    coverage.push(coord);
                }
            }
        }
        coverage
    }

    /// Count of letter positions shared between words
    ///
    /// Equals the total letters across all words minus the coverage set size;
    /// a measure of how densely the puzzle intersects.
    #[must_use]
    pub fn overlap_count(&self) -> usize {
        let total: usize = self.words.iter().map(Word::len).sum();
        total - self.coverage().len()
    }

    /// The word index owning a coordinate, scanning words in index order
    #[must_use]
    pub fn word_covering(&self, coord: Coord) -> Option<usize> {
        (0..self.word_count()).find(|&w| self.word_cells(w).any(|c| c == coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    /// CAT horizontal at (0,0) and CAR vertical at (0,0), sharing the C
    fn cross_puzzle() -> Puzzle {
        let words = vec![Word::new("cat").unwrap(), Word::new("car").unwrap()];
        let placements = vec![
            Placement::new(0, 0, Direction::Horizontal),
            Placement::new(0, 0, Direction::Vertical),
        ];

        let mut grid = Grid::new(5);
        for (word, placement) in words.iter().zip(&placements) {
            for (i, &letter) in word.letters().iter().enumerate() {
                grid.set(placement.cell(i), letter);
            }
        }

        Puzzle::new(grid, words, placements)
    }

    #[test]
    fn coverage_collapses_shared_cells() {
        let puzzle = cross_puzzle();
        // 3 + 3 letters, one shared cell
        assert_eq!(puzzle.coverage().len(), 5);
    }

    #[test]
    fn coverage_has_no_duplicates() {
        let puzzle = cross_puzzle();
        let coverage = puzzle.coverage();
        let unique: FxHashSet<Coord> = coverage.iter().copied().collect();
        assert_eq!(unique.len(), coverage.len());
    }

    #[test]
    fn overlap_count_matches_shared_cells() {
        let puzzle = cross_puzzle();
        assert_eq!(puzzle.overlap_count(), 1);
    }

    #[test]
    fn word_cells_follow_placement() {
        let puzzle = cross_puzzle();
        let cells: Vec<Coord> = puzzle.word_cells(1).collect();
        assert_eq!(
            cells,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn word_covering_prefers_lowest_index() {
        let puzzle = cross_puzzle();
        // The shared C cell belongs to word 0 first
        assert_eq!(puzzle.word_covering(Coord::new(0, 0)), Some(0));
        assert_eq!(puzzle.word_covering(Coord::new(1, 0)), Some(1));
        assert_eq!(puzzle.word_covering(Coord::new(4, 4)), None);
    }
}
