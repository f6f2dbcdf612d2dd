//! Core domain types for Wordle
//!
//! Words, feedback codes and the feedback evaluator. Everything here is pure
//! and total over validated words.

mod cache;
mod feedback;
mod word;

pub use cache::FeedbackCache;
pub use feedback::{Feedback, FeedbackParseError, Mark, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets in one game
pub const MAX_ATTEMPTS: usize = 6;
