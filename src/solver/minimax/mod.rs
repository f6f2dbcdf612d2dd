//! Minimax-based Wordle solver
//!
//! Implements worst-case minimization strategy for Wordle solving.

mod calculator;
mod selector;
mod strategy;

pub use calculator::{bounded_max_remaining, calculate_max_remaining, group_by_feedback};
pub use selector::select_best_guess;
pub use strategy::MinimaxStrategy;
