//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_display_grid, print_final_result, print_remaining_words,
    print_revealed_letters, print_score, print_solution, print_timer,
};
