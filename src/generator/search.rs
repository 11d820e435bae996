//! Backtracking placement search
//!
//! Assigns every word a (row, col, direction) on the grid so that all
//! placements are mutually consistent: a cell covered by two words holds the
//! same letter from both. Candidates are tried in overlap-descending order,
//! with ties broken by a random permutation so repeated runs produce
//! different grids.

use crate::core::{Coord, Direction, Grid, Placement, Puzzle, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Upper bound on search tree nodes before the search gives up
///
/// Guards against pathological word sets whose search space explodes; word
/// sets that fit at all are normally placed within a few hundred nodes.
pub const SEARCH_NODE_BUDGET: usize = 200_000;

/// Error type for a failed placement search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The search space holds no consistent arrangement for the word set
    NoArrangement,
    /// The node budget ran out before the search finished
    BudgetExhausted,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArrangement => {
                write!(
                    f,
                    "Could not fit all words in the grid; try fewer or shorter words"
                )
            }
            Self::BudgetExhausted => {
                write!(f, "Placement search exceeded {SEARCH_NODE_BUDGET} nodes")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// A legal position for the current word, scored by letter overlap
#[derive(Debug, Clone, Copy)]
struct Candidate {
    placement: Placement,
    overlap: usize,
}

/// Place every word onto an empty `size` x `size` grid
///
/// Words are placed in input order, depth-first; each level tries its
/// candidates by descending overlap score. The returned [`Puzzle`] owns the
/// solved grid and one placement per word.
///
/// # Errors
/// - [`PlaceError::NoArrangement`] if no consistent arrangement exists.
/// - [`PlaceError::BudgetExhausted`] if the search gave up early.
pub fn place_words<R: Rng>(words: &[Word], size: usize, rng: &mut R) -> Result<Puzzle, PlaceError> {
    let mut grid = Grid::new(size);
    let mut placements = Vec::with_capacity(words.len());
    let mut budget = SEARCH_NODE_BUDGET;

    if place_rest(&mut grid, words, &mut placements, &mut budget, rng)? {
        Ok(Puzzle::new(grid, words.to_vec(), placements))
    } else {
        Err(PlaceError::NoArrangement)
    }
}

/// Place words `placements.len()..` onto the grid, backtracking on dead ends
///
/// `Ok(true)` means every remaining word was placed; `Ok(false)` means this
/// subtree is exhausted and the caller must undo and try its next candidate.
fn place_rest<R: Rng>(
    grid: &mut Grid,
    words: &[Word],
    placements: &mut Vec<Placement>,
    budget: &mut usize,
    rng: &mut R,
) -> Result<bool, PlaceError> {
    let w = placements.len();
    if w == words.len() {
        return Ok(true);
    }

    if *budget == 0 {
        return Err(PlaceError::BudgetExhausted);
    }
    *budget -= 1;

    let word = &words[w];
    for candidate in ranked_candidates(grid, word, rng) {
        let written = write_word(grid, word, candidate.placement);
        placements.push(candidate.placement);

        if place_rest(grid, words, placements, budget, rng)? {
            return Ok(true);
        }

        placements.pop();
        erase(grid, &written);
    }

    Ok(false)
}

/// All compatible placements for `word`, overlap-descending with shuffled ties
fn ranked_candidates<R: Rng>(grid: &Grid, word: &Word, rng: &mut R) -> Vec<Candidate> {
    let mut candidates = enumerate_candidates(grid, word);
    // Stable sort keeps equal-score runs contiguous for the tie shuffle
    candidates.sort_by(|a, b| b.overlap.cmp(&a.overlap));
    shuffle_tie_groups(&mut candidates, rng);
    candidates
}

/// Every in-bounds, letter-compatible placement for `word` on the grid
fn enumerate_candidates(grid: &Grid, word: &Word) -> Vec<Candidate> {
    let size = grid.size();
    let mut candidates = Vec::new();

    for direction in [Direction::Horizontal, Direction::Vertical] {
        for row in 0..size {
            for col in 0..size {
                let placement = Placement::new(row, col, direction);
                if placement.fits(word.len(), size) && compatible(grid, word, placement) {
                    candidates.push(Candidate {
                        placement,
                        overlap: overlap_score(grid, word, placement),
                    });
                }
            }
        }
    }

    candidates
}

/// Whether every covered cell is empty or already holds the word's letter
fn compatible(grid: &Grid, word: &Word, placement: Placement) -> bool {
    word.letters()
        .iter()
        .enumerate()
        .all(|(i, &letter)| match grid.letter(placement.cell(i)) {
            None => true,
            Some(existing) => existing == letter,
        })
}

/// Count of positions whose cell already holds the word's letter
fn overlap_score(grid: &Grid, word: &Word, placement: Placement) -> usize {
    word.letters()
        .iter()
        .enumerate()
        .filter(|&(i, &letter)| grid.letter(placement.cell(i)) == Some(letter))
        .count()
}

/// Shuffle each contiguous run of equal-overlap candidates in place
///
/// Preserves the overlap-descending macro-order while randomizing the order
/// within each tie group.
fn shuffle_tie_groups<R: Rng>(candidates: &mut [Candidate], rng: &mut R) {
    let mut start = 0;
    while start < candidates.len() {
        let score = candidates[start].overlap;
        let mut end = start + 1;
        while end < candidates.len() && candidates[end].overlap == score {
            end += 1;
        }
        candidates[start..end].shuffle(rng);
        start = end;
    }
}

/// Write the word's letters into empty cells, returning the cells written
///
/// Cells that already hold the matching letter are left untouched and are
/// not recorded, so a later undo cannot clear another word's letters.
fn write_word(grid: &mut Grid, word: &Word, placement: Placement) -> Vec<Coord> {
    let mut written = Vec::with_capacity(word.len());
    for (i, &letter) in word.letters().iter().enumerate() {
        let coord = placement.cell(i);
        if grid.letter(coord).is_none() {
            grid.set(coord, letter);
            written.push(coord);
        }
    }
    written
}

/// Undo a tentative placement, clearing only the cells it actually wrote
fn erase(grid: &mut Grid, written: &[Coord]) {
    for &coord in written {
        grid.clear(coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    /// Check the consistency invariant: every word's letters match the grid
    fn assert_consistent(puzzle: &Puzzle) {
        for w in 0..puzzle.word_count() {
            let word = puzzle.word(w);
            let placement = puzzle.placement(w);
            for (i, &letter) in word.letters().iter().enumerate() {
                assert_eq!(
                    puzzle.grid().letter(placement.cell(i)),
                    Some(letter),
                    "word {w} letter {i} mismatches the grid"
                );
            }
        }
    }

    #[test]
    fn cat_car_arc_cross_on_small_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let puzzle = place_words(&words(&["cat", "car", "arc"]), 5, &mut rng).unwrap();

        assert_consistent(&puzzle);
        // Overlap maximization must find at least one shared-letter cell
        assert!(puzzle.overlap_count() >= 1);
    }

    #[test]
    fn full_word_set_places_consistently() {
        let set = words(&[
            "garden", "window", "planet", "bridge", "castle", "silver", "rocket", "candle",
            "forest", "violin",
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = place_words(&set, 15, &mut rng).unwrap();

        assert_consistent(&puzzle);
        assert_eq!(puzzle.word_count(), 10);
        for w in 0..puzzle.word_count() {
            assert!(puzzle.placement(w).fits(puzzle.word(w).len(), 15));
        }
    }

    #[test]
    fn word_longer_than_grid_has_no_arrangement() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = place_words(&words(&["abcdef"]), 5, &mut rng);
        assert_eq!(result, Err(PlaceError::NoArrangement));
    }

    #[test]
    fn conflicting_words_have_no_arrangement() {
        // Two different 5-letter words on a 5x1-per-row grid would still fit;
        // force a conflict with a grid too small to hold both disjointly and
        // no shared letters to overlap through.
        let mut rng = StdRng::seed_from_u64(1);
        let result = place_words(&words(&["aa", "bb", "cc", "dd"]), 2, &mut rng);
        assert_eq!(result, Err(PlaceError::NoArrangement));
    }

    #[test]
    fn duplicate_word_overlays_fully() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = place_words(&words(&["cat", "cat"]), 5, &mut rng).unwrap();

        assert_consistent(&puzzle);
        // The second copy scores 3 by overlaying the first exactly, beating
        // any crossing, so both words share one placement.
        assert_eq!(puzzle.placement(0), puzzle.placement(1));
        assert_eq!(puzzle.coverage().len(), 3);
    }

    #[test]
    fn ranked_candidates_overlap_descending() {
        let mut grid = Grid::new(7);
        // Seed the grid so candidates have varied overlap scores
        let seed = Word::new("ant").unwrap();
        write_word(&mut grid, &seed, Placement::new(3, 2, Direction::Horizontal));

        let word = Word::new("tan").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = ranked_candidates(&grid, &word, &mut rng);

        assert!(!candidates.is_empty());
        for pair in candidates.windows(2) {
            assert!(
                pair[0].overlap >= pair[1].overlap,
                "candidate order violates overlap-descending"
            );
        }
    }

    #[test]
    fn tie_shuffle_keeps_scores_in_place() {
        let mut candidates: Vec<Candidate> = [3, 3, 3, 1, 1, 0, 0, 0, 0]
            .iter()
            .map(|&overlap| Candidate {
                placement: Placement::new(0, 0, Direction::Horizontal),
                overlap,
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(5);
        shuffle_tie_groups(&mut candidates, &mut rng);

        let scores: Vec<usize> = candidates.iter().map(|c| c.overlap).collect();
        assert_eq!(scores, vec![3, 3, 3, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn undo_preserves_previously_matching_cells() {
        let mut grid = Grid::new(5);
        grid.set(Coord::new(0, 1), b'A');

        // CAT across (0,0) reuses the existing A at (0,1)
        let word = Word::new("cat").unwrap();
        let written = write_word(&mut grid, &word, Placement::new(0, 0, Direction::Horizontal));
        assert_eq!(written, vec![Coord::new(0, 0), Coord::new(0, 2)]);

        erase(&mut grid, &written);
        assert_eq!(grid.letter(Coord::new(0, 0)), None);
        assert_eq!(grid.letter(Coord::new(0, 1)), Some(b'A'));
        assert_eq!(grid.letter(Coord::new(0, 2)), None);
    }

    #[test]
    fn exhausted_budget_is_reported() {
        let mut grid = Grid::new(5);
        let set = words(&["cat"]);
        let mut placements = Vec::new();
        let mut budget = 0;
        let mut rng = StdRng::seed_from_u64(1);

        let result = place_rest(&mut grid, &set, &mut placements, &mut budget, &mut rng);
        assert_eq!(result, Err(PlaceError::BudgetExhausted));
    }
}
