//! Precomputed decision trees
//!
//! Building, walking and persisting the tree of choices a strategy makes.

mod artifact;
mod builder;
mod node;

pub use artifact::{ArtifactError, PrecomputedArtifact};
pub use builder::TreeBuilder;
pub use node::DecisionTree;
