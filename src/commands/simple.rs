//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: prints the display grid between turns,
//! reveals a scheduled hint when enough time has passed, and reads guesses
//! from stdin. The countdown is checked between prompts, so a hint can only
//! land while the player is not mid-entry.

use crate::core::{Direction, Placement, Puzzle};
use crate::hints::{HINT_INTERVAL_SECS, HintScheduler};
use crate::output::{
    print_display_grid, print_final_result, print_remaining_words, print_revealed_letters,
    print_score, print_timer,
};
use crate::session::{GuessOutcome, Session};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading player input or flushing stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng>(
    puzzle: &Puzzle,
    time_limit: Duration,
    rng: &mut R,
) -> io::Result<()> {
    let mut hints = HintScheduler::new(puzzle, rng);
    let mut session = Session::new(puzzle.word_count());

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordweave - Crossword Puzzle                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Selected words (in random order):");
    let word_line: Vec<&str> = puzzle.words().iter().map(crate::core::Word::text).collect();
    println!("  {}\n", word_line.join(" "));

    println!("Place each word by entering its start row, start column, and");
    println!("direction. A hint letter appears every {HINT_INTERVAL_SECS} seconds.\n");

    print_display_grid(hints.display());
    println!(
        "\nYou have {} minutes to solve the crossword!",
        time_limit.as_secs() / 60
    );

    let start = Instant::now();
    let mut last_hint = Instant::now();

    let timed_out = loop {
        if session.is_complete() {
            break false;
        }

        let elapsed = start.elapsed();
        if elapsed >= time_limit {
            break true;
        }
        let seconds_left = (time_limit - elapsed).as_secs();

        if last_hint.elapsed() >= Duration::from_secs(HINT_INTERVAL_SECS)
            && hints.unrevealed_count() > 0
        {
            hints.reveal_next(puzzle, rng);
            last_hint = Instant::now();
            println!("\n{}", "[Hint revealed!]".bright_cyan());
        }

        println!();
        print_timer(seconds_left, time_limit.as_secs());
        print_score(&session);
        print_display_grid(hints.display());
        print_revealed_letters(hints.display());
        print_remaining_words(puzzle, &session);

        for w in session.absorb_revealed(puzzle, &hints) {
            println!(
                "{}",
                format!(
                    "Word \"{}\" was fully revealed by hints! Marked as solved.",
                    puzzle.word(w)
                )
                .bright_green()
            );
        }

        let Some(target) = session.next_target(puzzle, &hints) else {
            continue;
        };

        println!(
            "\nWord to place: {}",
            puzzle.word(target).text().bright_yellow().bold()
        );

        let size = puzzle.grid().size();
        let Some(guess) = prompt_guess(size)? else {
            println!("{}", "Enter numbers in range and h/v for direction.".red());
            continue;
        };

        match session.guess(puzzle, &mut hints, target, guess) {
            GuessOutcome::Correct => {
                println!("{}", "Correct!".bright_green().bold());
                ring_bell(1)?;
            }
            GuessOutcome::Incorrect => {
                println!("{}", "Incorrect. Try again.".bright_red());
                ring_bell(2)?;
            }
            GuessOutcome::AlreadySolved => {}
        }
    };

    print_final_result(puzzle, &session, timed_out);
    Ok(())
}

/// Read a (row, col, direction) triple, one prompt per field
///
/// Returns `None` if any field fails to parse or is out of range.
fn prompt_guess(size: usize) -> io::Result<Option<Placement>> {
    let max = size - 1;

    let row = get_user_input(&format!("Row (0-{max})"))?;
    let Ok(row) = row.parse::<usize>() else {
        return Ok(None);
    };

    let col = get_user_input(&format!("Column (0-{max})"))?;
    let Ok(col) = col.parse::<usize>() else {
        return Ok(None);
    };

    let direction = get_user_input("Direction (h-Horizontal, v-Vertical)")?;
    let Some(direction) = Direction::parse(&direction) else {
        return Ok(None);
    };

    if row >= size || col >= size {
        return Ok(None);
    }

    Ok(Some(Placement::new(row, col, direction)))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Ring the terminal bell, twice for an incorrect guess
fn ring_bell(times: usize) -> io::Result<()> {
    for _ in 0..times {
        print!("\u{7}");
    }
    io::stdout().flush()
}
