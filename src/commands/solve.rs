//! Word solving command
//!
//! Plays one game against a chosen or random target word.

use crate::core::{MAX_ATTEMPTS, Word, WordError};
use crate::solver::{Session, SolveResult, Strategy};
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Errors raised before a game can start
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("invalid input: the dictionary is empty")]
    EmptyDictionary,
}

/// Configuration for solving a word
pub struct SolveConfig {
    /// Target word; a random dictionary word when `None`
    pub target: Option<String>,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Option<String>) -> Self {
        Self {
            target,
            max_guesses: MAX_ATTEMPTS,
        }
    }
}

/// Pick a random secret from the dictionary
///
/// # Errors
///
/// Returns `SolveError::EmptyDictionary` if there is nothing to pick from.
pub fn pick_secret(dictionary: &[Word]) -> Result<Word, SolveError> {
    dictionary
        .choose(&mut rand::rng())
        .copied()
        .ok_or(SolveError::EmptyDictionary)
}

/// Solve the configured word with the given strategy
///
/// A target outside the dictionary is allowed; the game then normally ends
/// with a failed outcome.
///
/// # Errors
///
/// Returns an error if the target is not a valid word, or if no target was
/// given and the dictionary is empty.
pub fn solve_word<S: Strategy>(config: SolveConfig, strategy: &mut S) -> Result<SolveResult, SolveError> {
    let target = match config.target {
        Some(text) => Word::new(text)?,
        None => pick_secret(strategy.dictionary())?,
    };

    log::info!("solving {target} with {}", strategy.name());
    Ok(Session::new(config.max_guesses).play(strategy, target))
}
