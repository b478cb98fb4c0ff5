//! Win and draw evaluation.

use crate::coord::Coord;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines, in fixed enumeration order: rows, columns,
/// diagonals. The first matching line decides a win.
pub const WINNING_LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::NorthWest, Coord::North, Coord::NorthEast],
    [Coord::West, Coord::Center, Coord::East],
    [Coord::SouthWest, Coord::South, Coord::SouthEast],
    // Columns
    [Coord::NorthWest, Coord::West, Coord::SouthWest],
    [Coord::North, Coord::Center, Coord::South],
    [Coord::NorthEast, Coord::East, Coord::SouthEast],
    // Diagonals
    [Coord::NorthWest, Coord::Center, Coord::SouthEast],
    [Coord::NorthEast, Coord::Center, Coord::SouthWest],
];

/// Result of evaluating a board after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    /// The game continues.
    Ongoing,
    /// A line is complete; the mark that owns it wins.
    Win(Mark),
    /// Every cell is taken and no line is complete.
    Draw,
}

/// Scans the winning lines for a completed one.
///
/// A line counts only if all three of its cells are taken by the same mark.
#[instrument]
pub fn line_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Taken(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }
    None
}

/// Evaluates the board after a single placement by `last_mover`.
///
/// Pure function of its inputs. Call it after every placement, never in a
/// batch: with one placement per evaluation, at most one mark can own a
/// completed line, and that mark is the last mover's.
#[instrument]
pub fn evaluate(board: &Board, last_mover: Mark) -> Verdict {
    if let Some(mark) = line_winner(board) {
        debug_assert_eq!(mark, last_mover);
        return Verdict::Win(mark);
    }
    if board.is_full() {
        return Verdict::Draw;
    }
    Verdict::Ongoing
}
