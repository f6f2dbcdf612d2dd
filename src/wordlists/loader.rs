//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from the embedded list.
//! Entries that are not valid words are skipped, and repeated words keep
//! their first position.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Load words from a whitespace-delimited file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_strategist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a whitespace-delimited word list
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    dedup(text.split_whitespace().filter_map(|s| Word::new(s).ok()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_strategist::wordlists::loader::words_from_slice;
/// use wordle_strategist::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.filter(|word| seen.insert(*word)).collect()
}
