//! Guessing strategies
//!
//! Defines the Strategy trait, its error type and the enum wrapper used for
//! runtime selection.

use super::{GreedyStrategy, MinimaxStrategy, PrecomputedStrategy};
use crate::core::{Feedback, Word};
use thiserror::Error;

/// Errors a strategy reports to the driver
///
/// A session ending in one of these is a normal "word not found" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Every candidate was ruled out by the observed feedback
    #[error("no candidates left")]
    NoCandidates,
    /// A replayed guess differs from the one the decision tree prescribes
    #[error("guess {given} does not match precomputed guess {expected}")]
    Diverged { given: Word, expected: Word },
    /// The decision tree has no branch for the observed feedback
    #[error("unexpected feedback {feedback} for guess {guess}")]
    UnexpectedFeedback { guess: Word, feedback: Feedback },
    /// A precomputed strategy was requested without a tree to replay
    #[error("no options available: provide a strategy to precompute or a saved decision tree")]
    NoTreeSource,
}

/// A stateful guessing strategy
///
/// The driver calls [`Strategy::guess`], evaluates the guess against the
/// secret, and feeds the result back through [`Strategy::update`].
pub trait Strategy {
    /// Short name used in logs and output
    fn name(&self) -> &'static str;

    /// Produce the next guess for the current state
    ///
    /// # Errors
    /// Returns `StrategyError` when no guess is possible.
    fn guess(&mut self) -> Result<Word, StrategyError>;

    /// Record an observed (guess, feedback) pair
    ///
    /// # Errors
    /// Precomputed strategies fail when the pair leaves the decision tree.
    fn update(&mut self, guess: Word, feedback: Feedback) -> Result<(), StrategyError>;

    /// Forget the history and start over from the full dictionary
    fn reset(&mut self);

    /// Replay a whole history from a fresh state
    ///
    /// The resulting state is the one sequential [`Strategy::update`] calls
    /// after a [`Strategy::reset`] would produce.
    ///
    /// # Errors
    /// Fails with the first error an individual update would report.
    fn set_history(&mut self, history: &[(Word, Feedback)]) -> Result<(), StrategyError> {
        self.reset();
        for &(guess, feedback) in history {
            self.update(guess, feedback)?;
        }
        Ok(())
    }

    /// Observed (guess, feedback) pairs, oldest first
    fn history(&self) -> &[(Word, Feedback)];

    /// Words still considered possible secrets
    fn candidates(&self) -> &[Word];

    /// Every legal word, in load order
    fn dictionary(&self) -> &[Word];
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
/// Cloning yields an independent copy with its own history and candidates.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Highest letter-frequency score first
    Greedy(GreedyStrategy),
    /// Smallest worst-case partition first
    Minimax(MinimaxStrategy),
    /// Replay of a decision tree
    Precomputed(PrecomputedStrategy),
}

impl StrategyType {
    /// Create a live strategy from its name
    ///
    /// Supported names: "greedy" (alias "heuristic"), "minimax" (alias "minmax").
    /// Returns `None` for anything else, including "precomputed", which needs
    /// a tree source.
    #[must_use]
    pub fn from_name(name: &str, dictionary: Vec<Word>) -> Option<Self> {
        match name {
            "greedy" | "heuristic" => Some(Self::Greedy(GreedyStrategy::new(dictionary))),
            "minimax" | "minmax" => Some(Self::Minimax(MinimaxStrategy::new(dictionary))),
            _ => None,
        }
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Greedy(s) => s.name(),
            Self::Minimax(s) => s.name(),
            Self::Precomputed(s) => s.name(),
        }
    }

    fn guess(&mut self) -> Result<Word, StrategyError> {
        match self {
            Self::Greedy(s) => s.guess(),
            Self::Minimax(s) => s.guess(),
            Self::Precomputed(s) => s.guess(),
        }
    }

    fn update(&mut self, guess: Word, feedback: Feedback) -> Result<(), StrategyError> {
        match self {
            Self::Greedy(s) => s.update(guess, feedback),
            Self::Minimax(s) => s.update(guess, feedback),
            Self::Precomputed(s) => s.update(guess, feedback),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Greedy(s) => s.reset(),
            Self::Minimax(s) => s.reset(),
            Self::Precomputed(s) => s.reset(),
        }
    }

    fn set_history(&mut self, history: &[(Word, Feedback)]) -> Result<(), StrategyError> {
        match self {
            Self::Greedy(s) => s.set_history(history),
            Self::Minimax(s) => s.set_history(history),
            Self::Precomputed(s) => s.set_history(history),
        }
    }

    fn history(&self) -> &[(Word, Feedback)] {
        match self {
            Self::Greedy(s) => s.history(),
            Self::Minimax(s) => s.history(),
            Self::Precomputed(s) => s.history(),
        }
    }

    fn candidates(&self) -> &[Word] {
        match self {
            Self::Greedy(s) => s.candidates(),
            Self::Minimax(s) => s.candidates(),
            Self::Precomputed(s) => s.candidates(),
        }
    }

    fn dictionary(&self) -> &[Word] {
        match self {
            Self::Greedy(s) => s.dictionary(),
            Self::Minimax(s) => s.dictionary(),
            Self::Precomputed(s) => s.dictionary(),
        }
    }
}

impl From<GreedyStrategy> for StrategyType {
    fn from(strategy: GreedyStrategy) -> Self {
        Self::Greedy(strategy)
    }
}

impl From<MinimaxStrategy> for StrategyType {
    fn from(strategy: MinimaxStrategy) -> Self {
        Self::Minimax(strategy)
    }
}

impl From<PrecomputedStrategy> for StrategyType {
    fn from(strategy: PrecomputedStrategy) -> Self {
        Self::Precomputed(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["aaaaa", "bbbbb", "ccccc"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn from_name_selects_variant() {
        assert!(matches!(
            StrategyType::from_name("greedy", dictionary()),
            Some(StrategyType::Greedy(_))
        ));
        assert!(matches!(
            StrategyType::from_name("heuristic", dictionary()),
            Some(StrategyType::Greedy(_))
        ));
        assert!(matches!(
            StrategyType::from_name("minimax", dictionary()),
            Some(StrategyType::Minimax(_))
        ));
        assert!(StrategyType::from_name("precomputed", dictionary()).is_none());
        assert!(StrategyType::from_name("entropy", dictionary()).is_none());
    }

    #[test]
    fn every_variant_wins_in_one_guess() {
        let secret = Word::new("aaaaa").unwrap();
        let greedy = StrategyType::from_name("greedy", dictionary()).unwrap();
        let minimax = StrategyType::from_name("minimax", dictionary()).unwrap();
        let precomputed: StrategyType = PrecomputedStrategy::build(&greedy).unwrap().into();

        for mut strategy in [greedy, minimax, precomputed] {
            let guess = strategy.guess().unwrap();
            assert!(strategy.dictionary().contains(&guess));
            assert_eq!(guess, secret, "{}", strategy.name());

            strategy.update(guess, Feedback::WIN).unwrap();
            assert_eq!(strategy.history(), &[(secret, Feedback::WIN)]);
        }
    }

    #[test]
    fn clones_do_not_share_state() {
        let mut original = StrategyType::from_name("minimax", dictionary()).unwrap();
        let copy = original.clone();

        let guess = original.guess().unwrap();
        original.update(guess, Feedback::NONE).unwrap();

        assert_eq!(original.history().len(), 1);
        assert!(copy.history().is_empty());
        assert_eq!(copy.candidates().len(), 3);
    }

    #[test]
    fn diverged_error_names_both_guesses() {
        let err = StrategyError::Diverged {
            given: Word::new("zzzzz").unwrap(),
            expected: Word::new("aaaaa").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "guess zzzzz does not match precomputed guess aaaaa"
        );
    }
}
