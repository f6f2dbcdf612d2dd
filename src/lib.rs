//! Wordle Strategist
//!
//! Wordle guessing strategies (greedy letter frequency and exhaustive minimax)
//! together with precomputed decision trees that replay them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_strategist::core::{Word, evaluate};
//!
//! let secret = Word::new("crepe").unwrap();
//! let guess = Word::new("speed").unwrap();
//!
//! // X = right place, . = wrong place, _ = absent
//! assert_eq!(evaluate(&secret, &guess).to_string(), "_.X._");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Decision tree precomputation
pub mod tree;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
