//! Two-pass guess scoring.

use crate::word::Word;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of one guessed letter against the target.
///
/// The variant order gives the upgrade ordering used by
/// [`KeyboardHints`](crate::KeyboardHints): `Absent < Present < Correct`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LetterStatus {
    /// The letter has no unconsumed occurrence in the target.
    Absent,
    /// The letter occurs in the target at a different position.
    Present,
    /// The letter matches the target at this position.
    Correct,
}

/// Contract violation reported by [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// The guess and target differ in length. Never silently truncated or
    /// padded; callers reject incomplete guesses before scoring.
    #[display("guess has {} letters, target has {}", guess, target)]
    LengthMismatch {
        /// Letters in the guess.
        guess: usize,
        /// Letters in the target.
        target: usize,
    },
}

impl std::error::Error for ScoreError {}

/// Scores a guess against a target word, one status per position.
///
/// Pass 1 marks exact-position matches `Correct` and consumes those target
/// letters. Pass 2 walks the remaining positions left to right, marking a
/// letter `Present` while unconsumed occurrences remain in the target pool
/// and `Absent` otherwise. The left-to-right order decides which duplicate
/// gets credited when the guess repeats a letter more often than the target
/// holds it.
///
/// # Errors
///
/// [`ScoreError::LengthMismatch`] when the lengths differ.
#[instrument(skip(target, guess), fields(len = guess.len()))]
pub fn score(target: &Word, guess: &Word) -> Result<Vec<LetterStatus>, ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let target_letters = target.letters();
    let guess_letters = guess.letters();
    let mut statuses = vec![LetterStatus::Absent; guess.len()];

    // Pass 1: exact matches. Target letters not consumed here form the
    // pool available to pass 2.
    let mut pool = [0u16; 26];
    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            statuses[i] = LetterStatus::Correct;
        } else {
            pool[usize::from(t - b'A')] += 1;
        }
    }

    // Pass 2: frequency matches, consuming the pool in guess order.
    for (i, &g) in guess_letters.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let remaining = &mut pool[usize::from(g - b'A')];
        if *remaining > 0 {
            statuses[i] = LetterStatus::Present;
            *remaining -= 1;
        }
    }

    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn guessing_the_target_is_all_correct() {
        for text in ["WATER", "APPLE", "AAAAA", "GHOST"] {
            let target = word(text);
            let statuses = score(&target, &target).unwrap();
            assert!(statuses.iter().all(|s| *s == Correct), "target {text}");
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let statuses = score(&word("WATER"), &word("SYNCJ")).unwrap();
        assert!(statuses.iter().all(|s| *s == Absent));
    }

    #[test]
    fn apple_paper_regression() {
        // Worked example: P0 present, A1 present, P2 correct, E3 present
        // (the target's E is unconsumed after pass 1), R4 absent.
        let statuses = score(&word("APPLE"), &word("PAPER")).unwrap();
        assert_eq!(statuses, vec![Present, Present, Correct, Present, Absent]);
    }

    #[test]
    fn duplicate_guess_letters_beyond_target_count_go_absent() {
        // Target has one E; the guess's second E finds the pool empty.
        let statuses = score(&word("WATER"), &word("EERIE")).unwrap();
        assert_eq!(statuses, vec![Present, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn correct_consumes_before_present() {
        // Both target Ls are consumed by exact matches, so the leading L
        // scores absent.
        let statuses = score(&word("HELLO"), &word("LULLS")).unwrap();
        assert_eq!(statuses, vec![Absent, Absent, Correct, Correct, Absent]);
    }

    #[test]
    fn credited_letters_never_exceed_target_occurrences() {
        let cases = [
            ("APPLE", "PAPER"),
            ("WATER", "EERIE"),
            ("HELLO", "LULLS"),
            ("SPEED", "ERASE"),
            ("FLOOR", "ROBOT"),
        ];
        for (t, g) in cases {
            let target = word(t);
            let guess = word(g);
            let statuses = score(&target, &guess).unwrap();
            for letter in b'A'..=b'Z' {
                let in_target =
                    target.letters().iter().filter(|&&l| l == letter).count();
                let credited = guess
                    .letters()
                    .iter()
                    .zip(&statuses)
                    .filter(|&(&l, &s)| l == letter && s != Absent)
                    .count();
                assert!(
                    credited <= in_target,
                    "{g} vs {t}: letter {} credited {credited}x, target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn length_mismatch_is_a_contract_error() {
        let err = score(&word("WATER"), &word("WET")).unwrap_err();
        assert_eq!(
            err,
            ScoreError::LengthMismatch {
                guess: 3,
                target: 5
            }
        );
    }
}
