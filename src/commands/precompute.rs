//! Decision tree precomputation command

use crate::core::MAX_ATTEMPTS;
use crate::solver::{PrecomputedStrategy, Strategy, StrategyError};
use crate::tree::{ArtifactError, TreeBuilder};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecomputeError {
    #[error("failed to build decision tree: {0}")]
    Build(#[from] StrategyError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Configuration for a precompute run
pub struct PrecomputeConfig {
    pub output: PathBuf,
    pub max_depth: usize,
}

impl PrecomputeConfig {
    #[must_use]
    pub const fn new(output: PathBuf) -> Self {
        Self {
            output,
            max_depth: MAX_ATTEMPTS,
        }
    }
}

/// Summary of a saved tree
#[derive(Debug)]
pub struct PrecomputeSummary {
    pub output: PathBuf,
    pub nodes: usize,
    pub depth: usize,
    pub duration: Duration,
}

/// Build the decision tree of `strategy` and save it as an artifact
///
/// # Errors
///
/// Returns an error if the tree cannot be built or written.
pub fn run_precompute<S>(config: PrecomputeConfig, strategy: &S) -> Result<PrecomputeSummary, PrecomputeError>
where
    S: Strategy + Clone + Send + Sync,
{
    let start = Instant::now();
    let precomputed = PrecomputedStrategy::build_with(strategy, &TreeBuilder::new(config.max_depth))?;
    precomputed.to_artifact().save(&config.output)?;

    Ok(PrecomputeSummary {
        nodes: precomputed.tree().node_count(),
        depth: precomputed.tree().depth(),
        output: config.output,
        duration: start.elapsed(),
    })
}
