//! Run-time invariants of a live game.
//!
//! These properties must hold after every transition. [`verify`] checks them
//! all; [`LiveGame::place`](crate::LiveGame::place) asserts it in debug
//! builds.

use crate::game::LiveGame;
use crate::types::{Board, Cell};
use tracing::warn;

/// A logical property of a live game.
pub trait Invariant {
    /// Whether the invariant holds for the given game.
    fn holds(game: &LiveGame) -> bool;

    /// Human-readable description, used in violation reports.
    fn description() -> &'static str;
}

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which property failed.
    pub description: &'static str,
}

/// Occupied cells never change: replaying the history onto an empty board
/// reproduces the current board, and no placement ever lands on a taken cell.
pub struct MonotonicBoard;

impl Invariant for MonotonicBoard {
    fn holds(game: &LiveGame) -> bool {
        let mut rebuilt = Board::new();
        for placement in game.history() {
            if !rebuilt.is_vacant(placement.coord) {
                return false;
            }
            rebuilt.set(placement.coord, Cell::Taken(placement.mark));
        }
        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "occupied cells never change"
    }
}

/// Consecutive placements carry opposing marks, and the side to move opposes
/// the last placement.
pub struct AlternatingMarks;

impl Invariant for AlternatingMarks {
    fn holds(game: &LiveGame) -> bool {
        let history = game.history();
        let alternates = history
            .windows(2)
            .all(|pair| pair[0].mark == pair[1].mark.opponent());
        let turn_follows = history
            .last()
            .is_none_or(|last| game.to_move() == last.mark.opponent());
        alternates && turn_follows
    }

    fn description() -> &'static str {
        "marks alternate between placements"
    }
}

/// The number of taken cells equals the history length.
pub struct HistoryMatchesBoard;

impl Invariant for HistoryMatchesBoard {
    fn holds(game: &LiveGame) -> bool {
        let taken = game
            .board()
            .cells()
            .iter()
            .filter(|c| !matches!(c, Cell::Empty))
            .count();
        taken == game.history().len()
    }

    fn description() -> &'static str {
        "history accounts for every taken cell"
    }
}

/// Checks every invariant, collecting violations.
pub fn verify(game: &LiveGame) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if !MonotonicBoard::holds(game) {
        violations.push(Violation {
            description: MonotonicBoard::description(),
        });
    }
    if !AlternatingMarks::holds(game) {
        violations.push(Violation {
            description: AlternatingMarks::description(),
        });
    }
    if !HistoryMatchesBoard::holds(game) {
        violations.push(Violation {
            description: HistoryMatchesBoard::description(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        warn!(?violations, "game invariants violated");
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Placement;
    use crate::coord::Coord;
    use crate::game::{FreshGame, LiveGame, Turn};
    use crate::types::Mark;

    fn after(placements: &[Placement]) -> LiveGame {
        match LiveGame::replay(placements).unwrap() {
            Turn::Live(game) => game,
            Turn::Done(_) => panic!("expected a live game"),
        }
    }

    #[test]
    fn fresh_game_satisfies_all_invariants() {
        let game = FreshGame::new().start(Mark::X);
        assert!(verify(&game).is_ok());
    }

    #[test]
    fn invariants_hold_through_normal_play() {
        let game = after(&[
            Placement::new(Mark::X, Coord::NorthWest),
            Placement::new(Mark::O, Coord::Center),
            Placement::new(Mark::X, Coord::SouthEast),
        ]);
        assert!(verify(&game).is_ok());
    }

    #[test]
    fn corrupted_board_is_detected() {
        let mut game = after(&[Placement::new(Mark::X, Coord::Center)]);
        game.board.set(Coord::Center, Cell::Taken(Mark::O));

        assert!(!MonotonicBoard::holds(&game));
        assert!(verify(&game).is_err());
    }

    #[test]
    fn extra_mark_outside_history_is_detected() {
        let mut game = after(&[Placement::new(Mark::X, Coord::Center)]);
        game.board.set(Coord::North, Cell::Taken(Mark::O));

        assert!(!HistoryMatchesBoard::holds(&game));
    }

    #[test]
    fn skipped_turn_is_detected() {
        let mut game = after(&[Placement::new(Mark::X, Coord::Center)]);
        game.history.push(Placement::new(Mark::X, Coord::North));
        game.board.set(Coord::North, Cell::Taken(Mark::X));

        assert!(!AlternatingMarks::holds(&game));
    }
}
