//! Decision tree nodes
//!
//! A node holds the guess to play and one child per feedback that can still
//! occur after it. A missing child means the branch is terminal: either the
//! guess won, or the branch was cut off by the depth limit.
//!
//! The serialized form is the nested structure
//! `{ "guess": "aaaaa", "choice": { "X____": { ... } } }`.

use crate::core::{Feedback, Word, evaluate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A precomputed decision tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    guess: Word,
    #[serde(default, deserialize_with = "deserialize_choice")]
    choice: BTreeMap<Feedback, DecisionTree>,
}

/// Explicit `null` children are accepted and dropped
fn deserialize_choice<'de, D>(deserializer: D) -> Result<BTreeMap<Feedback, DecisionTree>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<Feedback, Option<DecisionTree>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(feedback, child)| child.map(|c| (feedback, c)))
        .collect())
}

impl DecisionTree {
    /// Create a node with no children
    #[must_use]
    pub const fn leaf(guess: Word) -> Self {
        Self {
            guess,
            choice: BTreeMap::new(),
        }
    }

    /// Create a node from its guess and children
    #[must_use]
    pub const fn new(guess: Word, choice: BTreeMap<Feedback, Self>) -> Self {
        Self { guess, choice }
    }

    /// Guess to play at this node
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Word {
        self.guess
    }

    /// Children keyed by feedback, in feedback order
    #[must_use]
    pub const fn choice(&self) -> &BTreeMap<Feedback, Self> {
        &self.choice
    }

    /// Child reached after observing `feedback`
    #[must_use]
    pub fn child(&self, feedback: Feedback) -> Option<&Self> {
        self.choice.get(&feedback)
    }

    /// Follow a sequence of feedbacks from this node
    #[must_use]
    pub fn descend(&self, path: &[Feedback]) -> Option<&Self> {
        path.iter().try_fold(self, |node, &feedback| node.child(feedback))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.choice.is_empty()
    }

    /// Total number of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.choice.values().map(Self::node_count).sum::<usize>()
    }

    /// Number of guesses on the longest path
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.choice.values().map(Self::depth).max().unwrap_or(0)
    }

    /// Number of guesses the tree needs to find `secret`
    ///
    /// Returns `None` when the tree runs out before reaching it.
    #[must_use]
    pub fn guess_count(&self, secret: &Word) -> Option<usize> {
        let mut node = self;
        let mut guesses = 1;
        loop {
            let feedback = evaluate(secret, &node.guess);
            if feedback.is_win() {
                return Some(guesses);
            }
            node = node.child(feedback)?;
            guesses += 1;
        }
    }
}
