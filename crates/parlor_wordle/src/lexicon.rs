//! Target word supply.

use crate::word::{Word, WordError};
use rand::Rng;
use tracing::{debug, instrument};

/// The built-in five-letter target list.
pub const BUILT_IN_WORDS: &[&str] = &[
    "REACT", "WORLD", "ABOUT", "HEART", "WATER", "HOUSE", "PLACE", "LIGHT",
    "GREAT", "SMALL", "FOUND", "STILL", "NEVER", "BEING", "AGAIN", "THINK",
    "THREE", "YEARS", "COMES", "THESE", "COULD", "WHERE", "THEIR", "AFTER",
    "FIRST", "WOULD", "OTHER", "WRITE", "THOSE", "ALONG", "SEEMS", "GHOST",
    "PLANT", "STORM", "BREAD", "FROST", "OCEAN", "TRAIL", "BEACH",
];

/// A non-empty list of uniform-length target words.
///
/// The lexicon only supplies targets; guesses are not checked for
/// membership. Any full-length alphabetic guess is playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
    word_len: usize,
}

impl Lexicon {
    /// Builds a lexicon from raw strings, validating each entry.
    ///
    /// # Errors
    ///
    /// [`LexiconError::Empty`] for an empty list,
    /// [`LexiconError::Word`] for an entry that is not a word, and
    /// [`LexiconError::MixedLength`] for an entry whose length differs from
    /// the first entry's.
    #[instrument(skip(entries))]
    pub fn new<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = Vec::new();
        let mut word_len = 0;

        for entry in entries {
            let word = Word::new(entry.as_ref())?;
            if words.is_empty() {
                word_len = word.len();
            } else if word.len() != word_len {
                return Err(LexiconError::MixedLength {
                    word: word.as_str().to_string(),
                    expected: word_len,
                });
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }

        debug!(count = words.len(), word_len, "lexicon built");
        Ok(Self { words, word_len })
    }

    /// The built-in list.
    pub fn built_in() -> Self {
        Self::new(BUILT_IN_WORDS).expect("built-in word list is valid")
    }

    /// Length of every word in the lexicon.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty lexicons do not construct.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws a target uniformly at random.
    ///
    /// The random source is injected so callers can fix the target; a fresh
    /// draw is independent of previous ones and may repeat a target.
    #[instrument(skip(self, rng))]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let pick = rng.random_range(0..self.words.len());
        self.words[pick].clone()
    }
}

/// Why a word list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum LexiconError {
    /// The list held no words.
    #[display("lexicon is empty")]
    Empty,
    /// An entry failed word validation.
    #[display("invalid lexicon entry: {}", _0)]
    #[from]
    Word(WordError),
    /// An entry's length differed from the rest of the list.
    #[display("'{}' has a different length than the first entry ({})", word, expected)]
    MixedLength {
        /// The offending entry.
        word: String,
        /// Length established by the first entry.
        expected: usize,
    },
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexiconError::Word(err) => Some(err),
            _ => None,
        }
    }
}
