//! Wordle solving algorithms
//!
//! This module contains the guessing strategies, the candidate filter they
//! share and the driver that plays a game with them.

mod engine;
pub mod filter;
pub mod greedy;
pub mod minimax;
mod precomputed;
pub mod strategy;

pub use engine::{GuessStep, Outcome, Session, SolveResult};
pub use greedy::GreedyStrategy;
pub use minimax::MinimaxStrategy;
pub use precomputed::PrecomputedStrategy;
pub use strategy::{Strategy, StrategyError, StrategyType};
