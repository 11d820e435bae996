//! Word pools by difficulty tier
//!
//! Provides embedded per-tier word lists compiled into the binary, plus
//! random selection of a puzzle-sized word set from a pool.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Puzzle difficulty tier, selecting which embedded pool words come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from its name
    ///
    /// Accepts "easy", "medium", "hard" (case insensitive).
    ///
    /// # Errors
    /// Returns [`WordListError::UnknownDifficulty`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, WordListError> {
        match name.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(WordListError::UnknownDifficulty(name.to_string())),
        }
    }

    /// The embedded raw word pool for this tier
    #[must_use]
    pub const fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
        }
    }

    /// Tier name as shown to the player
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for word-source failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The difficulty name matched no tier
    UnknownDifficulty(String),
    /// The pool holds fewer valid words than a puzzle needs
    InsufficientPool { available: usize, required: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDifficulty(name) => {
                write!(f, "Unknown difficulty '{name}' (expected easy, medium, or hard)")
            }
            Self::InsufficientPool {
                available,
                required,
            } => {
                write!(
                    f,
                    "Word pool has {available} usable words but the puzzle needs {required}"
                )
            }
        }
    }
}

impl std::error::Error for WordListError {}

/// Pick `count` words from a pool, uniformly at random and without repeats
///
/// The pool is shuffled and the first `count` words taken, so selection
/// order is also random (the words are placed in this order).
///
/// # Errors
/// Returns [`WordListError::InsufficientPool`] if the pool is too small.
pub fn select_words<R: Rng>(
    pool: &[Word],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Word>, WordListError> {
    if pool.len() < count {
        return Err(WordListError::InsufficientPool {
            available: pool.len(),
            required: count,
        });
    }

    let mut shuffled: Vec<Word> = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    Ok(shuffled)
}

/// Load a tier's embedded pool as validated [`Word`]s
#[must_use]
pub fn tier_words(difficulty: Difficulty) -> Vec<Word> {
    loader::words_from_slice(difficulty.pool())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn easy_count_matches_const() {
        assert_eq!(EASY.len(), EASY_COUNT);
    }

    #[test]
    fn medium_count_matches_const() {
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
    }

    #[test]
    fn hard_count_matches_const() {
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn embedded_pools_are_valid_words() {
        for pool in [EASY, MEDIUM, HARD] {
            for &raw in pool {
                assert!(
                    Word::new(raw).is_ok(),
                    "embedded word '{raw}' fails validation"
                );
            }
        }
    }

    #[test]
    fn pools_hold_a_full_puzzle() {
        use crate::core::PUZZLE_WORD_COUNT;
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(tier_words(difficulty).len() >= PUZZLE_WORD_COUNT);
        }
    }

    #[test]
    fn from_name_parses_tiers() {
        assert_eq!(Difficulty::from_name("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_name("MEDIUM"), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::from_name("Hard"), Ok(Difficulty::Hard));
    }

    #[test]
    fn from_name_rejects_unknown_tier() {
        assert_eq!(
            Difficulty::from_name("nightmare"),
            Err(WordListError::UnknownDifficulty("nightmare".to_string()))
        );
    }

    #[test]
    fn select_words_takes_requested_count() {
        let pool = tier_words(Difficulty::Easy);
        let mut rng = StdRng::seed_from_u64(4);
        let selected = select_words(&pool, 10, &mut rng).unwrap();

        assert_eq!(selected.len(), 10);
        // No repeats
        for (i, word) in selected.iter().enumerate() {
            assert!(!selected[i + 1..].contains(word));
        }
    }

    #[test]
    fn select_words_rejects_short_pool() {
        let pool = vec![Word::new("cat").unwrap()];
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            select_words(&pool, 10, &mut rng),
            Err(WordListError::InsufficientPool {
                available: 1,
                required: 10,
            })
        );
    }

    #[test]
    fn selection_is_seed_deterministic() {
        let pool = tier_words(Difficulty::Medium);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            select_words(&pool, 10, &mut rng_a).unwrap(),
            select_words(&pool, 10, &mut rng_b).unwrap()
        );
    }
}
