//! Memoized feedback evaluation
//!
//! The minimax search evaluates the same (secret, guess) pairs over and over,
//! both across turns and across sibling branches of a decision tree build.
//! `FeedbackCache` is an explicit memo owned by whoever runs those searches;
//! there is no process-wide cache.

use super::{Feedback, Word, evaluate};
use rustc_hash::FxHashMap;

/// Default entry limit for [`FeedbackCache::default`]
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 20;

/// Cache of evaluated feedback keyed by (secret, guess)
///
/// A bounded cache is cleared when it is full and a new pair must be stored.
#[derive(Debug, Clone)]
pub struct FeedbackCache {
    entries: FxHashMap<(Word, Word), Feedback>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl FeedbackCache {
    /// Create a cache with no entry limit
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache holding at most `capacity` entries
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::unbounded()
        }
    }

    /// Evaluate `guess` against `secret`, reusing a stored result when present
    ///
    /// # Examples
    /// ```
    /// use wordle_strategist::core::{FeedbackCache, Word};
    ///
    /// let mut cache = FeedbackCache::unbounded();
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    ///
    /// let first = cache.evaluate(&secret, &guess);
    /// let second = cache.evaluate(&secret, &guess);
    /// assert_eq!(first, second);
    /// assert_eq!(cache.hits(), 1);
    /// ```
    pub fn evaluate(&mut self, secret: &Word, guess: &Word) -> Feedback {
        if let Some(&feedback) = self.entries.get(&(*secret, *guess)) {
            self.hits += 1;
            return feedback;
        }

        self.misses += 1;
        let feedback = evaluate(secret, guess);

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return feedback;
            }
            if self.entries.len() >= capacity {
                self.entries.clear();
            }
        }
        self.entries.insert((*secret, *guess), feedback);
        feedback
    }

    /// Number of stored pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to run the evaluator
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop all stored pairs and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for FeedbackCache {
    fn default() -> Self {
        Self::bounded(DEFAULT_CACHE_CAPACITY)
    }
}
