//! Candidate filtering
//!
//! A word stays a candidate when it would have produced every observed
//! feedback had it been the secret. The evaluator is re-applied with the
//! candidate in the secret's seat.

use crate::core::{Feedback, Word, evaluate};

/// Check whether `word` is consistent with every (guess, feedback) pair
#[must_use]
pub fn is_consistent(word: &Word, history: &[(Word, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, feedback)| evaluate(word, guess) == *feedback)
}

/// Keep the candidates consistent with the history
///
/// Surviving candidates keep their relative order, so a pre-sorted candidate
/// list stays sorted.
///
/// # Examples
/// ```
/// use wordle_strategist::core::{Feedback, Word};
/// use wordle_strategist::solver::filter::filter_candidates;
///
/// let candidates: Vec<Word> = ["aaaaa", "abbbb", "abccc"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = [(Word::new("aaaaa").unwrap(), "X____".parse::<Feedback>().unwrap())];
///
/// let remaining = filter_candidates(&candidates, &history);
/// assert_eq!(remaining, vec![candidates[1], candidates[2]]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], history: &[(Word, Feedback)]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| is_consistent(candidate, history))
        .copied()
        .collect()
}

/// Narrow an already-consistent candidate list by one new observation
///
/// Equivalent to re-filtering with the extended history, because every
/// remaining candidate already satisfies the earlier pairs.
pub fn narrow(candidates: &mut Vec<Word>, guess: &Word, feedback: Feedback) {
    candidates.retain(|candidate| evaluate(candidate, guess) == feedback);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn observe(secret: &str, guess: &str) -> (Word, Feedback) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        (guess, evaluate(&secret, &guess))
    }

    #[test]
    fn secret_is_always_consistent() {
        let history = [observe("crane", "slate"), observe("crane", "irate")];
        assert!(is_consistent(&Word::new("crane").unwrap(), &history));
    }

    #[test]
    fn empty_history_accepts_everything() {
        let candidates = words(&["crane", "slate", "zzzzz"]);
        assert_eq!(filter_candidates(&candidates, &[]), candidates);
    }

    #[test]
    fn exact_match_leaves_only_the_guess() {
        let candidates = words(&["irate", "crate", "grate"]);
        let history = [(Word::new("irate").unwrap(), Feedback::WIN)];

        assert_eq!(filter_candidates(&candidates, &history), words(&["irate"]));
    }

    #[test]
    fn contradictory_history_empties_candidates() {
        let candidates = words(&["abccc", "abbbb", "aaaaa"]);
        let history = [(Word::new("aaaaa").unwrap(), Feedback::NONE)];

        assert!(filter_candidates(&candidates, &history).is_empty());
    }

    #[test]
    fn duplicate_letter_feedback_is_respected() {
        // "speed" against "erase" credits two e's; "abide" holds only one
        let candidates = words(&["erase", "abide", "crepe"]);
        let history = [observe("erase", "speed")];

        assert_eq!(filter_candidates(&candidates, &history), words(&["erase"]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let candidates = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let history = [observe("grate", "crane")];

        let once = filter_candidates(&candidates, &history);
        let twice = filter_candidates(&once, &history);
        assert_eq!(once, twice);
    }

    #[test]
    fn filtering_preserves_order() {
        let mut candidates = words(&["trace", "grate", "crate", "irate", "slate", "crane"]);
        candidates.sort();
        let history = [observe("grate", "crane")];

        let remaining = filter_candidates(&candidates, &history);
        assert!(remaining.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(remaining.contains(&Word::new("grate").unwrap()));
    }

    #[test]
    fn narrow_matches_full_filter() {
        let candidates = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let first = observe("crate", "slate");
        let second = observe("crate", "irate");

        let mut narrowed = filter_candidates(&candidates, &[first]);
        narrow(&mut narrowed, &second.0, second.1);

        assert_eq!(narrowed, filter_candidates(&candidates, &[first, second]));
    }
}
