//! Keyboard hint accounting.

use crate::score::LetterStatus;
use crate::word::Word;
use std::collections::HashMap;
use tracing::instrument;

/// Best status ever observed for each letter across a round's guesses.
///
/// Statuses only improve: `Absent < Present < Correct`. A letter scored
/// `Correct` once stays `Correct` even if a later guess places it badly.
/// The presentation layer reads this map to color its input affordances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: HashMap<u8, LetterStatus>,
}

impl KeyboardHints {
    /// Creates an empty hint map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The best status seen for a letter, if it has been guessed at all.
    pub fn hint(&self, letter: char) -> Option<LetterStatus> {
        let key = letter.to_ascii_uppercase();
        if !key.is_ascii_uppercase() {
            return None;
        }
        self.hints.get(&(key as u8)).copied()
    }

    /// Folds one scored guess into the map with the monotonic upgrade rule.
    ///
    /// Positions are visited left to right; each letter keeps the maximum of
    /// its stored status and the new one, so no entry ever downgrades.
    #[instrument(skip(self, guess, statuses))]
    pub fn absorb(&mut self, guess: &Word, statuses: &[LetterStatus]) {
        for (&letter, &status) in guess.letters().iter().zip(statuses) {
            self.hints
                .entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    /// Drops every hint, for a round reset.
    pub fn clear(&mut self) {
        self.hints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::score;
    use LetterStatus::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn absorb_scored(hints: &mut KeyboardHints, target: &Word, guess: &str) {
        let guess = word(guess);
        let statuses = score(target, &guess).unwrap();
        hints.absorb(&guess, &statuses);
    }

    #[test]
    fn unguessed_letters_have_no_hint() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.hint('A'), None);
    }

    #[test]
    fn hints_record_the_scored_status() {
        let target = word("WATER");
        let mut hints = KeyboardHints::new();
        absorb_scored(&mut hints, &target, "WASTE");

        assert_eq!(hints.hint('W'), Some(Correct));
        assert_eq!(hints.hint('A'), Some(Correct));
        assert_eq!(hints.hint('S'), Some(Absent));
        assert_eq!(hints.hint('t'), Some(Present));
    }

    #[test]
    fn correct_never_downgrades() {
        let target = word("WATER");
        let mut hints = KeyboardHints::new();

        // T correct in position...
        absorb_scored(&mut hints, &target, "OTTER");
        assert_eq!(hints.hint('T'), Some(Correct));

        // ...then misplaced, then missing entirely: hint stays Correct.
        absorb_scored(&mut hints, &target, "TOAST");
        assert_eq!(hints.hint('T'), Some(Correct));
    }

    #[test]
    fn present_upgrades_to_correct_but_not_back() {
        let target = word("WATER");
        let mut hints = KeyboardHints::new();

        absorb_scored(&mut hints, &target, "TRAIN");
        assert_eq!(hints.hint('T'), Some(Present));

        absorb_scored(&mut hints, &target, "WATER");
        assert_eq!(hints.hint('T'), Some(Correct));

        absorb_scored(&mut hints, &target, "TRAIN");
        assert_eq!(hints.hint('T'), Some(Correct));
    }

    #[test]
    fn clear_forgets_everything() {
        let target = word("WATER");
        let mut hints = KeyboardHints::new();
        absorb_scored(&mut hints, &target, "WASTE");

        hints.clear();
        assert_eq!(hints.hint('W'), None);
    }
}
