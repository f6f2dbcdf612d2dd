//! Exhaustive minimax strategy

use super::selector::select_best_guess;
use crate::core::{Feedback, FeedbackCache, Word};
use crate::solver::filter::narrow;
use crate::solver::strategy::{Strategy, StrategyError};

/// Pure minimax strategy
///
/// Always guesses the remaining candidate that minimizes the worst-case
/// number of remaining candidates. Owns a feedback cache that survives
/// turns and resets.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    history: Vec<(Word, Feedback)>,
    cache: FeedbackCache,
}

impl MinimaxStrategy {
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self::with_cache(dictionary, FeedbackCache::default())
    }

    /// Create the strategy with a caller-provided feedback cache
    #[must_use]
    pub fn with_cache(dictionary: Vec<Word>, cache: FeedbackCache) -> Self {
        Self {
            candidates: dictionary.clone(),
            dictionary,
            history: Vec::new(),
            cache,
        }
    }

    /// Feedback cache shared by every search of this instance
    #[must_use]
    pub const fn cache(&self) -> &FeedbackCache {
        &self.cache
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn guess(&mut self) -> Result<Word, StrategyError> {
        let (guess, worst_case) =
            select_best_guess(&self.candidates, &mut self.cache).ok_or(StrategyError::NoCandidates)?;

        log::debug!(
            "{}: {guess} leaves at most {worst_case} of {} candidates",
            self.name(),
            self.candidates.len()
        );
        Ok(guess)
    }

    fn update(&mut self, guess: Word, feedback: Feedback) -> Result<(), StrategyError> {
        self.history.push((guess, feedback));
        narrow(&mut self.candidates, &guess, feedback);
        Ok(())
    }

    fn reset(&mut self) {
        self.history.clear();
        self.candidates.clone_from(&self.dictionary);
    }

    fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn first_guess_minimizes_worst_case() {
        let dictionary = words(&["abccc", "abbbb", "aaaaa"]);
        let mut s = MinimaxStrategy::new(dictionary.clone());
        assert_eq!(s.candidates(), dictionary.as_slice());

        let guess = s.guess().unwrap();
        assert_eq!(guess.text(), "abccc");

        s.update(guess, "X____".parse().unwrap()).unwrap();
        assert_eq!(s.candidates(), words(&["aaaaa"]).as_slice());

        s.update(Word::new("aaaaa").unwrap(), Feedback::WIN).unwrap();
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn contradictory_feedback_fails_guess() {
        let mut s = MinimaxStrategy::new(words(&["abccc", "abbbb", "aaaaa"]));
        s.update(Word::new("aaaaa").unwrap(), Feedback::NONE).unwrap();

        assert!(s.candidates().is_empty());
        assert_eq!(s.guess(), Err(StrategyError::NoCandidates));
    }

    #[test]
    fn candidate_order_is_preserved() {
        let dictionary = words(&["trace", "grate", "crate", "irate", "slate", "crane"]);
        let secret = Word::new("grate").unwrap();
        let mut s = MinimaxStrategy::new(dictionary.clone());

        let guess = s.guess().unwrap();
        s.update(guess, evaluate(&secret, &guess)).unwrap();

        let positions: Vec<usize> = s
            .candidates()
            .iter()
            .map(|c| dictionary.iter().position(|d| d == c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reset_and_set_history() {
        let dictionary = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let secret = Word::new("trace").unwrap();
        let mut s = MinimaxStrategy::new(dictionary.clone());

        let first = s.guess().unwrap();
        let feedback = evaluate(&secret, &first);
        s.update(first, feedback).unwrap();
        let after_one = s.candidates().to_vec();
        let second = s.guess().unwrap();

        s.reset();
        assert!(s.history().is_empty());
        assert_eq!(s.candidates(), dictionary.as_slice());
        assert_eq!(s.guess().unwrap(), first);

        s.set_history(&[(first, feedback)]).unwrap();
        assert_eq!(s.candidates(), after_one.as_slice());
        assert_eq!(s.guess().unwrap(), second);
    }

    #[test]
    fn cache_is_reused_across_turns() {
        let dictionary = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let mut s = MinimaxStrategy::new(dictionary);

        s.guess().unwrap();
        let misses = s.cache().misses();
        s.guess().unwrap();

        assert_eq!(s.cache().misses(), misses);
        assert!(s.cache().hits() > 0);
    }
}
