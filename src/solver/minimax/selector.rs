//! Minimax-based guess selection
//!
//! Selects the candidate that minimizes the worst-case remaining candidates.

use super::calculator::bounded_max_remaining;
use crate::core::{FeedbackCache, Word};

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every candidate is tried as the guess. Returns the winner and its worst
/// case, or `None` if there are no candidates. Ties go to the earliest
/// candidate. A guess is abandoned as soon as one of its groups exceeds the
/// best worst case found so far, which cannot change the result.
///
/// # Examples
/// ```
/// use wordle_strategist::core::{FeedbackCache, Word};
/// use wordle_strategist::solver::minimax::select_best_guess;
///
/// let candidates: Vec<Word> = ["abccc", "abbbb", "aaaaa"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut cache = FeedbackCache::default();
/// let (best, max_remaining) = select_best_guess(&candidates, &mut cache).unwrap();
/// assert_eq!(best.text(), "abccc");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Word], cache: &mut FeedbackCache) -> Option<(Word, usize)> {
    let mut best: Option<(Word, usize)> = None;

    for guess in candidates {
        let bound = best.map_or(usize::MAX, |(_, score)| score);
        if let Some(score) = bounded_max_remaining(guess, candidates, bound, cache)
            && score < bound
        {
            best = Some((*guess, score));
            if score == 1 {
                // Nothing can do better than singleton groups
                break;
            }
        }
    }

    best
}
