//! Wordweave - CLI
//!
//! Crossword puzzle game with TUI and plain CLI modes: words are woven into
//! a shared letter grid, hints reveal letters over time, and the player
//! races the countdown to place every word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use wordweave::{
    commands::{run_benchmark, run_generate, run_simple},
    core::{PUZZLE_WORD_COUNT, Word},
    generator::place_words,
    output::print_benchmark_result,
    wordlists::{Difficulty, loader::load_from_file, select_words, tier_words},
};

#[derive(Parser)]
#[command(
    name = "wordweave",
    about = "Crossword-style word grid puzzle with timed hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier: easy, medium, or hard
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Load the word pool from a file instead of the embedded tier lists
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed the random number generator for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Session countdown in seconds
    #[arg(short = 't', long, global = true, default_value_t = 300)]
    time_limit: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (interactive game without TUI)
    Simple,

    /// Generate one puzzle and print the solved grid
    Generate {
        /// Also print intersection statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate many puzzles and report placement statistics
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the word pool from the -w file or the selected difficulty tier
fn load_pool(cli: &Cli) -> Result<Vec<Word>> {
    match &cli.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Could not read word list '{path}'"))?;
            Ok(words)
        }
        None => {
            let difficulty = Difficulty::from_name(&cli.difficulty)?;
            Ok(tier_words(difficulty))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_pool(&cli)?;
    let mut rng = make_rng(cli.seed);
    let time_limit = Duration::from_secs(cli.time_limit);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = select_words(&pool, PUZZLE_WORD_COUNT, &mut rng)?;
            let puzzle = place_words(&words, wordweave::core::GRID_SIZE, &mut rng)
                .context("Puzzle generation failed")?;
            let app = wordweave::interactive::App::new(puzzle, time_limit, rng);
            wordweave::interactive::run_tui(app)
        }
        Commands::Simple => {
            let words = select_words(&pool, PUZZLE_WORD_COUNT, &mut rng)?;
            let puzzle = place_words(&words, wordweave::core::GRID_SIZE, &mut rng)
                .context("Puzzle generation failed")?;
            run_simple(&puzzle, time_limit, &mut rng)?;
            Ok(())
        }
        Commands::Generate { verbose } => {
            let words = select_words(&pool, PUZZLE_WORD_COUNT, &mut rng)?;
            run_generate(&words, verbose, &mut rng)?;
            Ok(())
        }
        Commands::Benchmark { count } => {
            let base_seed = cli.seed.unwrap_or(0);
            println!("Generating {count} puzzles...");
            let result = run_benchmark(&pool, count, base_seed);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
