//! Decision tree precomputation
//!
//! Replays a strategy over every feedback history it can reach and records
//! its choices. Each node works on its own copy of the strategy, reset to the
//! node's history, so sibling branches share nothing mutable and can be built
//! in parallel.

use super::DecisionTree;
use crate::core::{Feedback, MAX_ATTEMPTS, Word, evaluate};
use crate::solver::{Strategy, StrategyError};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// Builds decision trees from live strategies
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    /// Nodes whose history is longer than this are not expanded
    pub max_depth: usize,
    /// Build sibling branches on the rayon thread pool
    pub parallel: bool,
}

impl TreeBuilder {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Precompute the strategy's choice for every reachable feedback history
    ///
    /// The strategy passed in is only read; every node clones it and replays
    /// its own history.
    ///
    /// # Errors
    /// Returns `StrategyError::NoCandidates` when the strategy cannot make a
    /// first guess (e.g. an empty dictionary), and propagates any other
    /// error the strategy reports while replaying a branch.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategist::core::Word;
    /// use wordle_strategist::solver::GreedyStrategy;
    /// use wordle_strategist::tree::TreeBuilder;
    ///
    /// let dictionary: Vec<Word> = ["abccc", "abbbb", "aaaaa"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let tree = TreeBuilder::default().build(&GreedyStrategy::new(dictionary)).unwrap();
    /// assert_eq!(tree.guess().text(), "abccc");
    /// assert_eq!(tree.node_count(), 3);
    /// ```
    pub fn build<S>(&self, strategy: &S) -> Result<DecisionTree, StrategyError>
    where
        S: Strategy + Clone + Send + Sync,
    {
        log::info!(
            "start build_tree ({}, {} words, max depth {})",
            strategy.name(),
            strategy.dictionary().len(),
            self.max_depth
        );
        let start = Instant::now();

        let tree = self
            .build_node(strategy, &[])?
            .ok_or(StrategyError::NoCandidates)?;

        log::info!(
            "end build_tree: {} nodes, depth {} in {:.2}s",
            tree.node_count(),
            tree.depth(),
            start.elapsed().as_secs_f64()
        );
        Ok(tree)
    }

    fn build_node<S>(
        &self,
        strategy: &S,
        history: &[(Word, Feedback)],
    ) -> Result<Option<DecisionTree>, StrategyError>
    where
        S: Strategy + Clone + Send + Sync,
    {
        if history.len() > self.max_depth {
            return Ok(None);
        }

        let mut local = strategy.clone();
        local.set_history(history)?;
        let guess = match local.guess() {
            Ok(guess) => guess,
            Err(StrategyError::NoCandidates) => {
                log::debug!("dead end after {} guesses", history.len());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let outcomes: BTreeSet<Feedback> = local
            .candidates()
            .iter()
            .map(|candidate| evaluate(candidate, &guess))
            .filter(|feedback| !feedback.is_win())
            .collect();

        let expand = |feedback: Feedback| {
            let mut branch = history.to_vec();
            branch.push((guess, feedback));
            self.build_node(strategy, &branch)
                .map(|child| child.map(|c| (feedback, c)))
        };

        let children: Vec<Option<(Feedback, DecisionTree)>> = if self.parallel {
            outcomes
                .into_par_iter()
                .map(expand)
                .collect::<Result<_, _>>()?
        } else {
            outcomes
                .into_iter()
                .map(expand)
                .collect::<Result<_, _>>()?
        };

        let choice: BTreeMap<Feedback, DecisionTree> = children.into_iter().flatten().collect();
        Ok(Some(DecisionTree::new(guess, choice)))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}
