//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary and file loading.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
