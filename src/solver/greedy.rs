//! Greedy letter-frequency strategy
//!
//! Scores each word by how common its letters are across the dictionary and
//! always guesses the best-scoring remaining candidate.

use super::filter::{filter_candidates, narrow};
use super::strategy::{Strategy, StrategyError};
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Letter → number of words containing that letter at least once
pub type OccurrenceTable = FxHashMap<u8, usize>;

/// Build the occurrence table for a word list
///
/// A letter repeated inside one word is counted once for that word.
#[must_use]
pub fn build_occurrences(words: &[Word]) -> OccurrenceTable {
    let mut occurrences = OccurrenceTable::default();
    for word in words {
        for letter in word.distinct_letters() {
            *occurrences.entry(letter).or_insert(0) += 1;
        }
    }
    occurrences
}

/// Score a word as the sum of the occurrence counts of its distinct letters
#[must_use]
pub fn score(occurrences: &OccurrenceTable, word: &Word) -> usize {
    word.distinct_letters()
        .map(|letter| occurrences.get(&letter).copied().unwrap_or(0))
        .sum()
}

/// Greedy letter-frequency strategy
///
/// Candidates are kept sorted by descending score (ties in dictionary order);
/// filtering preserves that order, so the best guess is always the first
/// remaining candidate.
#[derive(Debug, Clone)]
pub struct GreedyStrategy {
    dictionary: Vec<Word>,
    occurrences: OccurrenceTable,
    ranked: Vec<Word>,
    candidates: Vec<Word>,
    history: Vec<(Word, Feedback)>,
}

impl GreedyStrategy {
    /// Create the strategy and rank the dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_strategist::core::Word;
    /// use wordle_strategist::solver::{GreedyStrategy, Strategy};
    ///
    /// let dictionary: Vec<Word> = ["abccc", "abbbb", "aaaaa"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let mut strategy = GreedyStrategy::new(dictionary);
    /// assert_eq!(strategy.guess().unwrap().text(), "abccc");
    /// ```
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        let occurrences = build_occurrences(&dictionary);

        let mut ranked = dictionary.clone();
        // Stable sort: equal scores keep dictionary order
        ranked.sort_by_key(|word| Reverse(score(&occurrences, word)));

        Self {
            candidates: ranked.clone(),
            dictionary,
            occurrences,
            ranked,
            history: Vec::new(),
        }
    }

    /// Occurrence table built from the dictionary
    #[must_use]
    pub const fn occurrences(&self) -> &OccurrenceTable {
        &self.occurrences
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn guess(&mut self) -> Result<Word, StrategyError> {
        self.candidates
            .first()
            .copied()
            .ok_or(StrategyError::NoCandidates)
    }

    fn update(&mut self, guess: Word, feedback: Feedback) -> Result<(), StrategyError> {
        self.history.push((guess, feedback));
        narrow(&mut self.candidates, &guess, feedback);
        log::debug!(
            "{}: {guess} -> {feedback}, {} candidates left",
            self.name(),
            self.candidates.len()
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.history.clear();
        self.candidates.clone_from(&self.ranked);
    }

    fn set_history(&mut self, history: &[(Word, Feedback)]) -> Result<(), StrategyError> {
        self.history = history.to_vec();
        self.candidates = filter_candidates(&self.ranked, history);
        Ok(())
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
