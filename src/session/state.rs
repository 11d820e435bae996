//! Solving-session state machine
//!
//! Each word moves one way, `Unsolved -> Solved`, either because hints fully
//! revealed it or because the player guessed its exact placement. The score
//! rises by one per transition, whichever trigger fired.

use crate::core::{Placement, Puzzle};
use crate::hints::HintScheduler;

/// Result of evaluating one player guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the word's placement exactly; the word is now solved
    Correct,
    /// The guess did not match; nothing changed
    Incorrect,
    /// The word was already solved; nothing changed
    AlreadySolved,
}

/// Tracks which words are solved and the player's score
#[derive(Debug, Clone)]
pub struct Session {
    solved: Vec<bool>,
    score: usize,
}

impl Session {
    /// Start a session with every word unsolved
    #[must_use]
    pub fn new(word_count: usize) -> Self {
        Self {
            solved: vec![false; word_count],
            score: 0,
        }
    }

    /// Whether word `w` has been solved
    ///
    /// # Panics
    /// Panics if `w` is not a valid word index.
    #[inline]
    #[must_use]
    pub fn is_solved(&self, w: usize) -> bool {
        self.solved[w]
    }

    /// Whether every word is solved
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solved.iter().all(|&solved| solved)
    }

    /// Words solved so far
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of words in the session
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.solved.len()
    }

    /// Evaluate a player guess for word `w`
    ///
    /// A correct guess (exact start cell and direction) marks the word
    /// solved, bumps the score, and reveals the whole word on the display
    /// grid. Guessing an already-solved word is a no-op so the score can
    /// never double-count. An incorrect guess mutates nothing.
    pub fn guess(
        &mut self,
        puzzle: &Puzzle,
        hints: &mut HintScheduler,
        w: usize,
        guess: Placement,
    ) -> GuessOutcome {
        if self.solved[w] {
            return GuessOutcome::AlreadySolved;
        }

        if puzzle.placement(w) == guess {
            self.mark_solved(w);
            hints.reveal_word(puzzle, w);
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        }
    }

    /// Mark words fully revealed by hints as solved, returning the new ones
    ///
    /// Called by the session loop after hint ticks so hint-driven completions
    /// score exactly like guessed ones.
    pub fn absorb_revealed(&mut self, puzzle: &Puzzle, hints: &HintScheduler) -> Vec<usize> {
        let mut newly_solved = Vec::new();
        for w in 0..self.solved.len() {
            if !self.solved[w] && hints.is_fully_revealed(puzzle, w) {
                self.mark_solved(w);
                newly_solved.push(w);
            }
        }
        newly_solved
    }

    /// The next word to prompt the player for
    ///
    /// The first word that is neither solved nor already fully revealed;
    /// `None` when no such word remains.
    #[must_use]
    pub fn next_target(&self, puzzle: &Puzzle, hints: &HintScheduler) -> Option<usize> {
        (0..self.solved.len())
            .find(|&w| !self.solved[w] && !hints.is_fully_revealed(puzzle, w))
    }

    fn mark_solved(&mut self, w: usize) {
        self.solved[w] = true;
        self.score += 1;
    }
}
