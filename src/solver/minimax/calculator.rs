//! Minimax worst-case calculation for Wordle feedback
//!
//! Given a guess and set of candidates, computes the size of the largest
//! group of candidates that would produce the same feedback.

use crate::core::{Feedback, FeedbackCache, Word};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use wordle_strategist::core::{FeedbackCache, Word};
/// use wordle_strategist::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("abccc").unwrap();
/// let candidates: Vec<Word> = ["abccc", "abbbb", "aaaaa"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut cache = FeedbackCache::default();
/// assert_eq!(calculate_max_remaining(&guess, &candidates, &mut cache), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[Word], cache: &mut FeedbackCache) -> usize {
    group_by_feedback(guess, candidates, cache)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Like [`calculate_max_remaining`], but gives up once a group grows past `bound`
///
/// Returns `None` as soon as any group holds more than `bound` candidates,
/// since such a guess cannot beat one whose worst case is `bound`.
#[must_use]
pub fn bounded_max_remaining(
    guess: &Word,
    candidates: &[Word],
    bound: usize,
    cache: &mut FeedbackCache,
) -> Option<usize> {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut worst = 0;

    for candidate in candidates {
        let count = counts.entry(cache.evaluate(candidate, guess)).or_insert(0);
        *count += 1;
        if *count > bound {
            return None;
        }
        worst = worst.max(*count);
    }

    Some(worst)
}

/// Group candidates by the feedback they produce with the guess
///
/// Every candidate plays the secret in turn.
pub fn group_by_feedback(
    guess: &Word,
    candidates: &[Word],
    cache: &mut FeedbackCache,
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(cache.evaluate(candidate, guess)).or_insert(0) += 1;
    }

    counts
}
