//! Validated words.

use serde::{Deserialize, Serialize};

/// A word of ASCII letters, stored uppercase.
///
/// Length is not fixed by this type; equal lengths are enforced where they
/// matter ([`score`](crate::score) and [`Lexicon`](crate::Lexicon)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    /// Parses a word, uppercasing it.
    ///
    /// # Errors
    ///
    /// [`WordError::Empty`] for an empty string, [`WordError::NotAlphabetic`]
    /// if any character is outside `A-Z`/`a-z`.
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NotAlphabetic(text.to_string()));
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty words do not construct.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The uppercase letters as bytes.
    pub fn letters(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a string failed to parse as a word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// The input was empty.
    #[display("word is empty")]
    Empty,
    /// The input held a character outside the ASCII alphabet.
    #[display("'{}' contains a non-alphabetic character", _0)]
    NotAlphabetic(String),
}

impl std::error::Error for WordError {}
