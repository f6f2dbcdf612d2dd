//! Game driver
//!
//! Plays one game against a known secret: ask the strategy for a guess,
//! score it, feed the result back, and stop on a win or when the attempt
//! budget runs out.

use super::strategy::{Strategy, StrategyError};
use crate::core::{Feedback, MAX_ATTEMPTS, Word, evaluate};

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Secret found after this many guesses
    Solved(usize),
    /// The attempt budget ran out
    Exhausted,
    /// The strategy gave up; the word was not found
    Failed(StrategyError),
}

/// A single guess step in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of playing one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
}

impl SolveResult {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    /// Number of guesses played, winning or not
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Game driver with a fixed attempt budget
#[derive(Debug, Clone, Copy)]
pub struct Session {
    max_attempts: usize,
}

impl Session {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Play one game of `strategy` against `secret`
    ///
    /// The strategy is reset first, so an instance can be reused across
    /// games. A `StrategyError` ends the game with [`Outcome::Failed`].
    ///
    /// # Examples
    /// ```
    /// use wordle_strategist::core::Word;
    /// use wordle_strategist::solver::{GreedyStrategy, Outcome, Session};
    ///
    /// let dictionary: Vec<Word> = ["aaaaa", "bbbbb", "ccccc"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut strategy = GreedyStrategy::new(dictionary);
    ///
    /// let result = Session::default().play(&mut strategy, Word::new("aaaaa").unwrap());
    /// assert_eq!(result.outcome, Outcome::Solved(1));
    /// ```
    pub fn play<S: Strategy>(&self, strategy: &mut S, secret: Word) -> SolveResult {
        strategy.reset();
        let mut steps = Vec::new();

        let outcome = match self.run(strategy, secret, &mut steps) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("{} could not find {secret}: {e}", strategy.name());
                Outcome::Failed(e)
            }
        };

        SolveResult {
            target: secret,
            steps,
            outcome,
        }
    }

    fn run<S: Strategy>(
        &self,
        strategy: &mut S,
        secret: Word,
        steps: &mut Vec<GuessStep>,
    ) -> Result<Outcome, StrategyError> {
        for attempt in 1..=self.max_attempts {
            let candidates_before = strategy.candidates().len();
            let guess = strategy.guess()?;
            let feedback = evaluate(&secret, &guess);
            log::debug!("guess {attempt}: {guess} -> {feedback}");

            strategy.update(guess, feedback)?;
            steps.push(GuessStep {
                word: guess,
                feedback,
                candidates_before,
                candidates_after: strategy.candidates().len(),
            });

            if feedback.is_win() {
                return Ok(Outcome::Solved(attempt));
            }
        }
        Ok(Outcome::Exhausted)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GreedyStrategy, MinimaxStrategy, PrecomputedStrategy, StrategyType};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn first_guess_win() {
        let mut strategy = MinimaxStrategy::new(words(&["aaaaa", "bbbbb", "ccccc"]));
        let result = Session::default().play(&mut strategy, word("aaaaa"));

        assert_eq!(result.outcome, Outcome::Solved(1));
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].feedback, Feedback::WIN);
        assert_eq!(result.steps[0].candidates_before, 3);
        assert_eq!(result.steps[0].candidates_after, 1);
    }

    #[test]
    fn candidates_shrink_every_step() {
        let dictionary = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "react", "caret",
        ]);
        let mut strategy = GreedyStrategy::new(dictionary);
        let result = Session::default().play(&mut strategy, word("caret"));

        assert!(result.is_solved());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.steps.last().unwrap().word, word("caret"));
    }

    #[test]
    fn budget_is_respected() {
        // Greedy eliminates one of these per guess
        let mut strategy = GreedyStrategy::new(words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]));
        let last = *strategy.dictionary().last().unwrap();

        let result = Session::new(2).play(&mut strategy, last);
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert_eq!(result.guess_count(), 2);
    }

    #[test]
    fn unknown_secret_fails_cleanly() {
        let mut strategy = GreedyStrategy::new(words(&["aaaaa", "bbbbb"]));
        let result = Session::default().play(&mut strategy, word("zzzzz"));

        assert_eq!(result.outcome, Outcome::Failed(StrategyError::NoCandidates));
        assert!(!result.is_solved());
    }

    #[test]
    fn precomputed_fails_outside_its_tree() {
        let greedy = GreedyStrategy::new(words(&["aaaaa", "abbbb", "abccc"]));
        let mut strategy: StrategyType = PrecomputedStrategy::build(&greedy).unwrap().into();
        let result = Session::default().play(&mut strategy, word("zzzzz"));

        assert!(matches!(
            result.outcome,
            Outcome::Failed(StrategyError::UnexpectedFeedback { .. })
        ));
    }

    #[test]
    fn strategy_is_reset_between_games() {
        let mut strategy = MinimaxStrategy::new(words(&["crane", "slate", "irate"]));
        let session = Session::default();

        let first = session.play(&mut strategy, word("irate"));
        let second = session.play(&mut strategy, word("irate"));
        assert_eq!(first, second);
    }
}
