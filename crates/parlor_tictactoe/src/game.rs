//! Typestate game session.
//!
//! Each phase is its own type, so phase-specific operations exist only where
//! they are meaningful: only a [`LiveGame`] accepts placements, and only a
//! [`DoneGame`] has an outcome. Transitions consume the old phase.

use crate::action::{Placement, PlacementError};
use crate::coord::Coord;
use crate::rules::{self, Verdict};
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Outcome
// ─────────────────────────────────────────────────────────────

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark that completed a line.
    Winner(Mark),
    /// Full board, no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// True if the game was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Fresh phase
// ─────────────────────────────────────────────────────────────

/// A game that has not started. The board is always empty.
#[derive(Debug, Clone)]
pub struct FreshGame {
    board: Board,
}

impl FreshGame {
    /// Creates a game ready to start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts play, consuming the fresh game.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> LiveGame {
        LiveGame {
            board: self.board,
            to_move: first,
            history: Vec::new(),
        }
    }
}

impl Default for FreshGame {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Live phase
// ─────────────────────────────────────────────────────────────

/// A game accepting placements.
#[derive(Debug, Clone)]
pub struct LiveGame {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Placement>,
}

impl LiveGame {
    /// Applies a placement, consuming the game and returning the next phase.
    ///
    /// The evaluator runs after the single placement, never batched, so a
    /// completed line always belongs to the placement's mark.
    ///
    /// # Errors
    ///
    /// [`PlacementError::OutOfTurn`] if the placement's mark is not the side
    /// to move; [`PlacementError::CellTaken`] if the cell is occupied. Both
    /// are precondition failures checked before any mutation.
    #[instrument(skip(self), fields(coord = %placement.coord, mark = %placement.mark))]
    pub fn place(mut self, placement: Placement) -> Result<Turn, PlacementError> {
        if placement.mark != self.to_move {
            return Err(PlacementError::OutOfTurn(placement.mark));
        }
        if !self.board.is_vacant(placement.coord) {
            return Err(PlacementError::CellTaken(placement.coord));
        }

        self.board.set(placement.coord, Cell::Taken(placement.mark));
        self.history.push(placement);

        match rules::evaluate(&self.board, placement.mark) {
            Verdict::Win(mark) => Ok(Turn::Done(DoneGame {
                board: self.board,
                history: self.history,
                outcome: Outcome::Winner(mark),
            })),
            Verdict::Draw => Ok(Turn::Done(DoneGame {
                board: self.board,
                history: self.history,
                outcome: Outcome::Draw,
            })),
            Verdict::Ongoing => {
                self.to_move = self.to_move.opponent();
                debug_assert!(crate::invariants::verify(&self).is_ok());
                Ok(Turn::Live(self))
            }
        }
    }

    /// The side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Placements applied so far, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Coordinates still open for placement.
    pub fn open_cells(&self) -> Vec<Coord> {
        Coord::vacancies(&self.board)
    }

    /// Reconstructs a game by replaying placements from an empty board.
    ///
    /// Stops early with `Turn::Done` if a placement finishes the game.
    #[instrument]
    pub fn replay(placements: &[Placement]) -> Result<Turn, PlacementError> {
        let first = placements.first().map_or(Mark::X, |p| p.mark);
        let mut game = FreshGame::new().start(first);

        for placement in placements {
            match game.place(*placement)? {
                Turn::Live(g) => game = g,
                Turn::Done(g) => return Ok(Turn::Done(g)),
            }
        }

        Ok(Turn::Live(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Done phase
// ─────────────────────────────────────────────────────────────

/// A finished game. The outcome is always present.
#[derive(Debug, Clone)]
pub struct DoneGame {
    board: Board,
    history: Vec<Placement>,
    outcome: Outcome,
}

impl DoneGame {
    /// The outcome. Never an `Option`; a done game always has one.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The full placement history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Discards the finished game and returns a fresh one with an empty
    /// board.
    #[instrument(skip(self))]
    pub fn restart(self) -> FreshGame {
        FreshGame::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition result
// ─────────────────────────────────────────────────────────────

/// The phase a game is in after a placement.
#[derive(Debug, Clone)]
pub enum Turn {
    /// Play continues.
    Live(LiveGame),
    /// The placement ended the game.
    Done(DoneGame),
}

impl Turn {
    /// The board in either phase.
    pub fn board(&self) -> &Board {
        match self {
            Turn::Live(game) => game.board(),
            Turn::Done(game) => game.board(),
        }
    }

    /// True once the game has finished.
    pub fn is_done(&self) -> bool {
        matches!(self, Turn::Done(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(turn: Turn) -> LiveGame {
        match turn {
            Turn::Live(game) => game,
            Turn::Done(_) => panic!("expected the game to continue"),
        }
    }

    #[test]
    fn start_sets_first_mover() {
        let game = FreshGame::new().start(Mark::O);
        assert_eq!(game.to_move(), Mark::O);
        assert!(game.history().is_empty());
    }

    #[test]
    fn placement_alternates_turns() {
        let game = FreshGame::new().start(Mark::X);
        let game = live(game.place(Placement::new(Mark::X, Coord::Center)).unwrap());
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn taken_cell_is_rejected_without_mutation() {
        let game = FreshGame::new().start(Mark::X);
        let game = live(game.place(Placement::new(Mark::X, Coord::Center)).unwrap());

        let err = game
            .clone()
            .place(Placement::new(Mark::O, Coord::Center))
            .unwrap_err();
        assert_eq!(err, PlacementError::CellTaken(Coord::Center));
    }

    #[test]
    fn out_of_turn_is_rejected() {
        let game = FreshGame::new().start(Mark::X);
        let err = game
            .place(Placement::new(Mark::O, Coord::Center))
            .unwrap_err();
        assert_eq!(err, PlacementError::OutOfTurn(Mark::O));
    }

    #[test]
    fn winning_placement_finishes_the_game() {
        let placements = [
            Placement::new(Mark::X, Coord::NorthWest),
            Placement::new(Mark::O, Coord::Center),
            Placement::new(Mark::X, Coord::North),
            Placement::new(Mark::O, Coord::SouthWest),
            Placement::new(Mark::X, Coord::NorthEast),
        ];

        match LiveGame::replay(&placements).unwrap() {
            Turn::Done(game) => {
                assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
                assert_eq!(game.history().len(), 5);
            }
            Turn::Live(_) => panic!("expected a finished game"),
        }
    }

    #[test]
    fn full_board_without_line_finishes_as_draw() {
        // X O X / O X X / O X O, played to completion
        let placements = [
            Placement::new(Mark::X, Coord::NorthWest),
            Placement::new(Mark::O, Coord::North),
            Placement::new(Mark::X, Coord::NorthEast),
            Placement::new(Mark::O, Coord::West),
            Placement::new(Mark::X, Coord::Center),
            Placement::new(Mark::O, Coord::SouthWest),
            Placement::new(Mark::X, Coord::East),
            Placement::new(Mark::O, Coord::SouthEast),
            Placement::new(Mark::X, Coord::South),
        ];

        match LiveGame::replay(&placements).unwrap() {
            Turn::Done(game) => assert_eq!(game.outcome(), Outcome::Draw),
            Turn::Live(_) => panic!("expected a finished game"),
        }
    }

    #[test]
    fn restart_returns_an_empty_board() {
        let placements = [
            Placement::new(Mark::X, Coord::NorthWest),
            Placement::new(Mark::O, Coord::Center),
            Placement::new(Mark::X, Coord::North),
            Placement::new(Mark::O, Coord::South),
            Placement::new(Mark::X, Coord::NorthEast),
        ];

        let done = match LiveGame::replay(&placements).unwrap() {
            Turn::Done(game) => game,
            Turn::Live(_) => panic!("expected a finished game"),
        };

        let fresh = done.restart();
        assert!(fresh.board().cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn open_cells_track_the_board() {
        let game = FreshGame::new().start(Mark::X);
        assert_eq!(game.open_cells().len(), 9);
        let game = live(game.place(Placement::new(Mark::X, Coord::East)).unwrap());
        assert!(!game.open_cells().contains(&Coord::East));
    }
}
