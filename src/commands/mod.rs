//! Command implementations

mod benchmark;
mod generate;
mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::run_generate;
pub use simple::run_simple;
