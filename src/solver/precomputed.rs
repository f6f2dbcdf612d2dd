//! Decision-tree replay strategy
//!
//! Plays back a tree precomputed from another strategy. The tree is shared
//! and never modified; each instance only tracks the feedback path from the
//! root to its current node.

use super::strategy::{Strategy, StrategyError};
use crate::core::{Feedback, Word};
use crate::tree::{ArtifactError, DecisionTree, PrecomputedArtifact, TreeBuilder};
use std::path::Path;
use std::sync::Arc;

/// Strategy replaying a precomputed decision tree
#[derive(Debug, Clone)]
pub struct PrecomputedStrategy {
    dictionary: Arc<[Word]>,
    tree: Arc<DecisionTree>,
    path: Vec<Feedback>,
    history: Vec<(Word, Feedback)>,
}

impl PrecomputedStrategy {
    /// Wrap an existing tree
    #[must_use]
    pub fn from_tree(dictionary: Vec<Word>, tree: DecisionTree) -> Self {
        Self {
            dictionary: dictionary.into(),
            tree: Arc::new(tree),
            path: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Precompute every choice of `strategy` with the default builder
    ///
    /// # Errors
    /// Propagates the builder's `StrategyError`.
    pub fn build<S>(strategy: &S) -> Result<Self, StrategyError>
    where
        S: Strategy + Clone + Send + Sync,
    {
        Self::build_with(strategy, &TreeBuilder::default())
    }

    /// Precompute every choice of `strategy` with a configured builder
    ///
    /// # Errors
    /// Propagates the builder's `StrategyError`.
    pub fn build_with<S>(strategy: &S, builder: &TreeBuilder) -> Result<Self, StrategyError>
    where
        S: Strategy + Clone + Send + Sync,
    {
        let tree = builder.build(strategy)?;
        Ok(Self::from_tree(strategy.dictionary().to_vec(), tree))
    }

    /// Restore from a persisted artifact
    #[must_use]
    pub fn from_artifact(artifact: PrecomputedArtifact) -> Self {
        Self::from_tree(artifact.dictionary, artifact.decision_tree)
    }

    /// Restore from an artifact file
    ///
    /// # Errors
    /// Returns `ArtifactError::NotFound` when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        PrecomputedArtifact::load(path).map(Self::from_artifact)
    }

    /// Restore from an artifact if one is given, otherwise build from `inner`
    ///
    /// # Errors
    /// Returns `StrategyError::NoTreeSource` when neither source is given.
    pub fn from_sources<S>(
        artifact: Option<PrecomputedArtifact>,
        inner: Option<&S>,
    ) -> Result<Self, StrategyError>
    where
        S: Strategy + Clone + Send + Sync,
    {
        match (artifact, inner) {
            (Some(artifact), _) => Ok(Self::from_artifact(artifact)),
            (None, Some(strategy)) => Self::build(strategy),
            (None, None) => Err(StrategyError::NoTreeSource),
        }
    }

    /// Snapshot the dictionary and tree for persistence
    #[must_use]
    pub fn to_artifact(&self) -> PrecomputedArtifact {
        PrecomputedArtifact::new(self.dictionary.to_vec(), self.tree.as_ref().clone())
    }

    /// Root of the decision tree
    #[must_use]
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    fn current(&self) -> Result<&DecisionTree, StrategyError> {
        self.tree
            .descend(&self.path)
            .ok_or(StrategyError::NoCandidates)
    }
}

impl Strategy for PrecomputedStrategy {
    fn name(&self) -> &'static str {
        "precomputed"
    }

    fn guess(&mut self) -> Result<Word, StrategyError> {
        self.current().map(DecisionTree::guess)
    }

    fn update(&mut self, guess: Word, feedback: Feedback) -> Result<(), StrategyError> {
        let node = self.current()?;

        if guess != node.guess() {
            return Err(StrategyError::Diverged {
                given: guess,
                expected: node.guess(),
            });
        }

        // A win is terminal: the cursor stays on the winning node
        if !feedback.is_win() {
            if node.child(feedback).is_none() {
                return Err(StrategyError::UnexpectedFeedback { guess, feedback });
            }
            self.path.push(feedback);
        }

        self.history.push((guess, feedback));
        Ok(())
    }

    fn reset(&mut self) {
        self.path.clear();
        self.history.clear();
    }

    fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The tree replaces filtering, so this is the whole dictionary
    fn candidates(&self) -> &[Word] {
        &self.dictionary
    }

    fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GreedyStrategy, MinimaxStrategy, StrategyType};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        text.parse().unwrap()
    }

    fn greedy_tree() -> PrecomputedStrategy {
        let dictionary = words(&["aaaaa", "abbbb", "abccc"]);
        PrecomputedStrategy::build(&GreedyStrategy::new(dictionary)).unwrap()
    }

    #[test]
    fn replays_the_built_choices() {
        let mut s = greedy_tree();
        assert_eq!(s.dictionary(), words(&["aaaaa", "abbbb", "abccc"]).as_slice());
        assert_eq!(s.candidates(), s.dictionary());

        assert_eq!(s.guess().unwrap(), word("abccc"));

        s.update(word("abccc"), feedback("XX___")).unwrap();
        assert_eq!(s.guess().unwrap(), word("abbbb"));

        s.reset();
        assert_eq!(s.guess().unwrap(), word("abccc"));
        assert!(s.history().is_empty());
    }

    #[test]
    fn update_rejects_divergent_guess() {
        let mut s = greedy_tree();

        assert_eq!(
            s.update(word("ccccc"), feedback("X____")),
            Err(StrategyError::Diverged {
                given: word("ccccc"),
                expected: word("abccc"),
            })
        );
        assert!(s.history().is_empty());
    }

    #[test]
    fn update_rejects_unknown_feedback() {
        let mut s = greedy_tree();

        assert_eq!(
            s.update(word("abccc"), feedback("X.___")),
            Err(StrategyError::UnexpectedFeedback {
                guess: word("abccc"),
                feedback: feedback("X.___"),
            })
        );
        assert_eq!(s.guess().unwrap(), word("abccc"));
    }

    #[test]
    fn win_keeps_cursor_in_place() {
        let mut s = greedy_tree();
        s.update(word("abccc"), Feedback::WIN).unwrap();

        assert_eq!(s.guess().unwrap(), word("abccc"));
        assert_eq!(s.history(), &[(word("abccc"), Feedback::WIN)]);
    }

    #[test]
    fn set_history_replays_from_root() {
        let mut s = greedy_tree();
        s.update(word("abccc"), feedback("X____")).unwrap();

        s.set_history(&[(word("abccc"), feedback("XX___"))]).unwrap();
        assert_eq!(s.guess().unwrap(), word("abbbb"));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn set_history_reports_first_divergence() {
        let mut s = greedy_tree();
        let err = s
            .set_history(&[(word("zzzzz"), Feedback::NONE)])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "guess zzzzz does not match precomputed guess abccc"
        );
    }

    #[test]
    fn artifact_round_trip() {
        let s = greedy_tree();
        let restored = PrecomputedStrategy::from_artifact(s.to_artifact());

        assert_eq!(restored.tree(), s.tree());
        assert_eq!(restored.dictionary(), s.dictionary());
    }

    #[test]
    fn from_sources_prefers_artifact() {
        let artifact = greedy_tree().to_artifact();
        let inner = StrategyType::from_name("minimax", words(&["ccccc", "ddddd"])).unwrap();

        let s = PrecomputedStrategy::from_sources(Some(artifact), Some(&inner)).unwrap();
        assert_eq!(s.tree().guess(), word("abccc"));

        let built = PrecomputedStrategy::from_sources(None, Some(&inner)).unwrap();
        assert_eq!(built.tree().guess(), word("ccccc"));
    }

    #[test]
    fn from_sources_without_any_source_fails() {
        let result = PrecomputedStrategy::from_sources::<MinimaxStrategy>(None, None);
        assert_eq!(result.unwrap_err(), StrategyError::NoTreeSource);
    }

    #[test]
    fn clones_have_independent_cursors() {
        let mut a = greedy_tree();
        let mut b = a.clone();

        a.update(word("abccc"), feedback("X____")).unwrap();
        assert_eq!(a.guess().unwrap(), word("aaaaa"));
        assert_eq!(b.guess().unwrap(), word("abccc"));
    }
}
