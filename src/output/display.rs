//! Display functions for game state and results

use super::formatters::{clock, format_grid, timer_bar};
use crate::commands::BenchmarkResult;
use crate::core::{Grid, Puzzle};
use crate::hints::DisplayGrid;
use crate::session::Session;
use colored::Colorize;

/// Print the full solution grid
pub fn print_solution(grid: &Grid) {
    print!("{}", format_grid(grid.size(), |coord| grid.letter(coord)));
}

/// Print the grid as the player currently sees it
pub fn print_display_grid(display: &DisplayGrid) {
    print!(
        "{}",
        format_grid(display.size(), |coord| display.letter(coord))
    );
}

/// Print every letter revealed so far, in row-major order
pub fn print_revealed_letters(display: &DisplayGrid) {
    let letters: Vec<String> = display
        .revealed_letters()
        .map(|(_, letter)| char::from(letter).to_string())
        .collect();

    if letters.is_empty() {
        println!("Revealed letters: None");
    } else {
        println!("Revealed letters: {}", letters.join(" ").bright_yellow());
    }
}

/// Print the words not yet solved
pub fn print_remaining_words(puzzle: &Puzzle, session: &Session) {
    let remaining: Vec<&str> = (0..puzzle.word_count())
        .filter(|&w| !session.is_solved(w))
        .map(|w| puzzle.word(w).text())
        .collect();

    if remaining.is_empty() {
        println!("Words remaining: None!");
    } else {
        println!("Words remaining: {}", remaining.join(" "));
    }
}

/// Print the countdown with a progress bar
pub fn print_timer(seconds_left: u64, total_seconds: u64) {
    println!(
        "Time left: {} {}",
        clock(seconds_left),
        timer_bar(seconds_left, total_seconds, 30)
    );
}

/// Print the current score
pub fn print_score(session: &Session) {
    println!(
        "{}",
        format!("Score: {}/{}", session.score(), session.word_count()).bright_blue()
    );
}

/// Print the end-of-game banner, solution, and final score
pub fn print_final_result(puzzle: &Puzzle, session: &Session, timed_out: bool) {
    if timed_out {
        println!("\n{}", "Time's up!".bright_red().bold());
    }

    println!("\n{}", "=== Final Solution ===".bright_cyan().bold());
    print_solution(puzzle.grid());

    let summary = format!(
        "\nYou solved {} out of {} words.",
        session.score(),
        session.word_count()
    );
    if session.is_complete() {
        println!("{}", summary.bright_green().bold());
    } else {
        println!("{summary}");
    }
}

/// Print the result of a benchmark run
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Generation:".bright_cyan().bold());
    println!("   Puzzles requested: {}", result.total_puzzles);
    println!(
        "   Generated:         {}",
        result.generated.to_string().green()
    );
    println!(
        "   Failed:            {}",
        if result.failed == 0 {
            result.failed.to_string().green()
        } else {
            result.failed.to_string().red()
        }
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    println!("\n{}", "Intersection density:".bright_cyan().bold());
    println!(
        "   Average overlap:   {}",
        format!("{:.2}", result.average_overlap)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:         {}", result.max_overlap);
    println!("   Worst case:        {}", result.min_overlap);
}
