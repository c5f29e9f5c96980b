//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::run_perft;
