//! Pure formatting helpers shared by the CLI printers

use crate::core::Coord;

/// Character shown for a cell with no visible letter
pub const EMPTY_CELL: char = '.';

/// Render a grid as numbered rows and columns
///
/// `letter_at` yields the visible letter for a coordinate, or `None` for an
/// empty (or hidden) cell, which renders as [`EMPTY_CELL`].
pub fn format_grid(size: usize, letter_at: impl Fn(Coord) -> Option<u8>) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..size {
        out.push_str(&format!("{col:2} "));
    }
    out.push('\n');

    out.push_str("    ");
    out.push_str(&"-".repeat(size * 3));
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{row:2} |"));
        for col in 0..size {
            let shown = letter_at(Coord::new(row, col)).map_or(EMPTY_CELL, char::from);
            out.push_str(&format!("{shown:>2} "));
        }
        out.push('\n');
    }

    out
}

/// Render the countdown as a `[###---]` bar
///
/// The filled portion is proportional to the seconds remaining.
#[must_use]
pub fn timer_bar(seconds_left: u64, total_seconds: u64, width: usize) -> String {
    let filled = if total_seconds == 0 {
        0
    } else {
        (width as u64 * seconds_left / total_seconds) as usize
    };

    format!(
        "[{}{}]",
        "#".repeat(filled.min(width)),
        "-".repeat(width.saturating_sub(filled))
    )
}

/// Format seconds as `MM:SS`
#[must_use]
pub fn clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
