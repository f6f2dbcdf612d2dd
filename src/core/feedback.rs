//! Wordle feedback codes and the feedback evaluator
//!
//! A feedback code holds one [`Mark`] per letter position, packed base-3 into a
//! single byte:
//! - 0 = Miss (letter not available in the secret)
//! - 1 = Misplaced (letter in the secret, wrong position)
//! - 2 = Match (letter in the correct position)
//!
//! Each position contributes digit × 3^position to the packed value, so the
//! value range is 0-242.
//!
//! The textual form uses `X` for a match, `.` for a misplaced letter and `_`
//! for a miss, e.g. `X.__X`.

use super::{WORD_LENGTH, Word};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Miss,
    Misplaced,
    Match,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Misplaced => 1,
            Self::Match => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Match,
            1 => Self::Misplaced,
            _ => Self::Miss,
        }
    }

    /// Symbol used in the textual feedback form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'X',
            Self::Misplaced => '.',
            Self::Miss => '_',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' | 'G' | 'g' | '🟩' => Some(Self::Match),
            '.' | '?' | 'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '_' | '-' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback code produced by evaluating a guess against a secret
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Feedback(u8);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}'")]
    InvalidSymbol(char),
}

impl Feedback {
    /// All matches (the guess is the secret)
    pub const WIN: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All misses
    pub const NONE: Self = Self(0);

    /// Pack per-position marks into a feedback code
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Unpack into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Get the packed value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is a match
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.0 == Self::WIN.0
    }

    /// Count the number of matching positions
    #[must_use]
    pub fn count_matches(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Match).count()
    }

    /// Count the number of misplaced letters
    #[must_use]
    pub fn count_misplaced(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Misplaced).count()
    }

    /// Convert the feedback to an emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Match => '🟩',
                Mark::Misplaced => '🟨',
                Mark::Miss => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse a feedback string like "X.__X", "GY--G" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = Mark::from_symbol(ch).ok_or(FeedbackParseError::InvalidSymbol(ch))?;
        }
        Ok(Self::from_marks(marks))
    }
}

/// Evaluate `guess` against `secret`
///
/// Duplicate letters are resolved by consumption:
/// 1. Every position where the guess equals the secret is a match, and that
///    secret position is consumed.
/// 2. Remaining guess positions, left to right, take the first unconsumed
///    secret position holding the same letter (skipping positions where the
///    guess itself matches that letter). Found → misplaced and consumed,
///    otherwise → miss.
///
/// A guess letter repeated more often than the secret holds it is therefore
/// downgraded to a miss instead of being counted twice.
///
/// # Examples
/// ```
/// use wordle_strategist::core::{Word, evaluate};
///
/// let secret = Word::new("sassy").unwrap();
/// let guess = Word::new("assay").unwrap();
///
/// assert_eq!(evaluate(&secret, &guess).to_string(), "..X_X");
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    let secret = secret.letters();
    let guess = guess.letters();

    let mut marks = [Mark::Miss; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // Allow: the same index addresses guess, secret, marks and consumed
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            marks[i] = Mark::Match;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Match {
            continue;
        }

        let letter = guess[i];
        let found = (0..WORD_LENGTH)
            .find(|&j| !consumed[j] && secret[j] == letter && guess[j] != letter);

        if let Some(j) = found {
            consumed[j] = true;
            marks[i] = Mark::Misplaced;
        }
    }

    Feedback::from_marks(marks)
}
