//! Command implementations

pub mod precompute;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use precompute::{PrecomputeConfig, PrecomputeError, PrecomputeSummary, run_precompute};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveError, pick_secret, solve_word};
pub use test_all::{TestAllConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
