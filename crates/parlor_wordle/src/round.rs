//! Round state machine.

use crate::keyboard::KeyboardHints;
use crate::score::{score, LetterStatus, ScoreError};
use crate::word::Word;
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument};

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct RowScore {
    /// The submitted guess.
    guess: Word,
    /// One status per guess position.
    statuses: Vec<LetterStatus>,
}

impl RowScore {
    /// True if every position scored correct.
    pub fn is_winning(&self) -> bool {
        self.statuses.iter().all(|s| *s == LetterStatus::Correct)
    }
}

/// Where a round stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting guesses; `row` is the next row to fill (0-based).
    Playing {
        /// Index of the next guess.
        row: usize,
    },
    /// The target was guessed on row `row`.
    Won {
        /// Index of the winning guess.
        row: usize,
    },
    /// The guess limit was reached; the target is revealed.
    Lost {
        /// The word that was never guessed.
        target: Word,
    },
}

impl Phase {
    /// True in either terminal state.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::Playing { .. })
    }
}

/// A word-guessing session: one target, a bounded number of guesses, and
/// the accumulated keyboard hints.
///
/// The round owns all mutable state so several rounds can run side by side
/// and tests can drive one deterministically. It never touches a screen.
#[derive(Debug, Clone, Getters)]
pub struct Round {
    /// The word being guessed. Immutable until [`Round::reset`].
    target: Word,
    /// Maximum number of guesses.
    limit: usize,
    /// Scored guesses, oldest first.
    rows: Vec<RowScore>,
    /// Best status seen per letter.
    hints: KeyboardHints,
    /// Current state.
    phase: Phase,
}

impl Round {
    /// Opens a round on the given target with a guess limit.
    #[instrument(skip(target), fields(word_len = target.len(), limit))]
    pub fn new(target: Word, limit: usize) -> Self {
        Self {
            target,
            limit,
            rows: Vec::new(),
            hints: KeyboardHints::new(),
            phase: Phase::Playing { row: 0 },
        }
    }

    /// Submits a complete guess.
    ///
    /// Scores the guess, folds it into the keyboard hints, and advances the
    /// state machine: to `Won` if the guess matches the target, to `Lost`
    /// when the final row is spent, otherwise to the next row. The returned
    /// [`RowScore`] carries the statuses the presentation layer reveals.
    ///
    /// # Errors
    ///
    /// [`GuessError::RoundOver`] once the round is won or lost;
    /// [`GuessError::Score`] if the guess length does not match the target.
    /// Neither mutates the round.
    #[instrument(skip(self, guess), fields(guess_len = guess.len()))]
    pub fn submit(&mut self, guess: Word) -> Result<RowScore, GuessError> {
        let row = match self.phase {
            Phase::Playing { row } => row,
            _ => return Err(GuessError::RoundOver),
        };

        let statuses = score(&self.target, &guess)?;
        self.hints.absorb(&guess, &statuses);

        let scored = RowScore::new(guess, statuses);
        self.rows.push(scored.clone());

        self.phase = if scored.is_winning() {
            info!(row, "round won");
            Phase::Won { row }
        } else if row + 1 >= self.limit {
            info!(word = %self.target, "round lost");
            Phase::Lost {
                target: self.target.clone(),
            }
        } else {
            Phase::Playing { row: row + 1 }
        };

        Ok(scored)
    }

    /// Starts over on a freshly drawn target: row 0, no scored rows, no
    /// hints. The new target need not differ from the old one.
    #[instrument(skip(self, target))]
    pub fn reset(&mut self, target: Word) {
        debug!("round reset");
        self.target = target;
        self.rows.clear();
        self.hints.clear();
        self.phase = Phase::Playing { row: 0 };
    }

    /// True once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GuessError {
    /// The round is already won or lost.
    #[display("the round is over")]
    RoundOver,
    /// The guess failed the evaluator's length contract.
    #[display("{}", _0)]
    #[from]
    Score(ScoreError),
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuessError::Score(err) => Some(err),
            GuessError::RoundOver => None,
        }
    }
}
