//! Benchmark command
//!
//! Generates many puzzles from a word pool and measures how often the
//! placement search succeeds and how densely the results intersect. Each
//! iteration is seeded independently, so runs are reproducible and can be
//! generated in parallel.

use crate::core::{GRID_SIZE, PUZZLE_WORD_COUNT, Word};
use crate::generator::place_words;
use crate::wordlists::select_words;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub generated: usize,
    pub failed: usize,
    pub average_overlap: f64,
    pub min_overlap: usize,
    pub max_overlap: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles from the pool, collecting placement statistics
///
/// Iteration `i` uses seed `base_seed + i`, so the same arguments always
/// produce the same statistics regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(pool: &[Word], count: usize, base_seed: u64) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let overlaps: Vec<Option<usize>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let overlap = select_words(pool, PUZZLE_WORD_COUNT, &mut rng)
                .ok()
                .and_then(|words| place_words(&words, GRID_SIZE, &mut rng).ok())
                .map(|puzzle| puzzle.overlap_count());
            pb.inc(1);
            overlap
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    let generated: Vec<usize> = overlaps.into_iter().flatten().collect();
    let success_count = generated.len();
    let overlap_sum: usize = generated.iter().sum();

    BenchmarkResult {
        total_puzzles: count,
        generated: success_count,
        failed: count - success_count,
        average_overlap: if success_count == 0 {
            0.0
        } else {
            overlap_sum as f64 / success_count as f64
        },
        min_overlap: generated.iter().copied().min().unwrap_or(0),
        max_overlap: generated.iter().copied().max().unwrap_or(0),
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Difficulty, tier_words};

    #[test]
    fn benchmark_runs() {
        let pool = tier_words(Difficulty::Easy);
        let result = run_benchmark(&pool, 5, 1234);

        assert_eq!(result.total_puzzles, 5);
        assert_eq!(result.generated + result.failed, 5);
    }

    #[test]
    fn benchmark_succeeds_on_easy_pool() {
        // Ten short words on a 15x15 grid always have an arrangement
        let pool = tier_words(Difficulty::Easy);
        let result = run_benchmark(&pool, 3, 42);

        assert_eq!(result.generated, 3);
        assert_eq!(result.failed, 0);
        assert!(result.min_overlap <= result.max_overlap);
        assert!(result.average_overlap >= result.min_overlap as f64);
        assert!(result.average_overlap <= result.max_overlap as f64);
    }

    #[test]
    fn benchmark_is_seed_deterministic() {
        let pool = tier_words(Difficulty::Easy);

        let first = run_benchmark(&pool, 4, 7);
        let second = run_benchmark(&pool, 4, 7);

        assert_eq!(first.generated, second.generated);
        assert!((first.average_overlap - second.average_overlap).abs() < f64::EPSILON);
        assert_eq!(first.min_overlap, second.min_overlap);
        assert_eq!(first.max_overlap, second.max_overlap);
    }

    #[test]
    fn benchmark_empty_run() {
        let pool = tier_words(Difficulty::Easy);
        let result = run_benchmark(&pool, 0, 0);

        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.generated, 0);
        assert!((result.average_overlap - 0.0).abs() < f64::EPSILON);
    }
}
