//! Persisted decision trees
//!
//! An artifact stores the dictionary next to the tree so a precomputed
//! strategy can be restored without the strategy that built it.

use super::DecisionTree;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing an artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to access artifact: {0}")]
    Io(#[from] io::Error),
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dictionary plus the decision tree built over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedArtifact {
    pub dictionary: Vec<Word>,
    pub decision_tree: DecisionTree,
}

impl PrecomputedArtifact {
    #[must_use]
    pub const fn new(dictionary: Vec<Word>, decision_tree: DecisionTree) -> Self {
        Self {
            dictionary,
            decision_tree,
        }
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    /// Returns `ArtifactError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON text
    ///
    /// # Errors
    /// Returns `ArtifactError::Json` when the text is not a valid artifact.
    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the artifact to `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!(
            "saved decision tree ({} nodes) to {}",
            self.decision_tree.node_count(),
            path.display()
        );
        Ok(())
    }

    /// Read an artifact from `path`
    ///
    /// # Errors
    /// Returns `ArtifactError::NotFound` if the path does not exist, and
    /// `Io` or `Json` errors for unreadable or malformed files.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ArtifactError::NotFound(path.to_path_buf()),
            _ => ArtifactError::Io(e),
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample() -> PrecomputedArtifact {
        let tree = DecisionTree::new(
            word("aaaaa"),
            BTreeMap::from([
                (
                    "X____".parse::<Feedback>().unwrap(),
                    DecisionTree::leaf(word("abbbb")),
                ),
                (
                    "XX___".parse::<Feedback>().unwrap(),
                    DecisionTree::leaf(word("aabbb")),
                ),
            ]),
        );
        PrecomputedArtifact::new(vec![word("aabbb"), word("abbbb"), word("aaaaa")], tree)
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_strategist_{}_{name}", std::process::id()))
    }

    #[test]
    fn json_layout() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "dictionary": ["aabbb", "abbbb", "aaaaa"],
                "decision_tree": {
                    "guess": "aaaaa",
                    "choice": {
                        "X____": { "guess": "abbbb", "choice": {} },
                        "XX___": { "guess": "aabbb", "choice": {} },
                    },
                },
            })
        );
    }

    #[test]
    fn save_and_load() {
        let path = temp_path("save_and_load.json");
        let artifact = sample();

        artifact.save(&path).unwrap();
        let loaded = PrecomputedArtifact::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, artifact);
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = temp_path("doesnt_exist.json");
        assert!(matches!(
            PrecomputedArtifact::load(&path),
            Err(ArtifactError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            PrecomputedArtifact::from_json("{\"dictionary\": []}"),
            Err(ArtifactError::Json(_))
        ));
        assert!(matches!(
            PrecomputedArtifact::from_json("not json"),
            Err(ArtifactError::Json(_))
        ));
    }
}
