//! Placements as first-class domain events.

use crate::coord::Coord;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a coordinate.
///
/// Placements can be validated before application, serialized, and replayed,
/// independently of any session that executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it lands.
    pub coord: Coord,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Why a placement was rejected.
///
/// These are caller-side precondition failures. The evaluator itself has no
/// error states; any board is valid input to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// The cell already holds a mark.
    #[display("the {} cell is already taken", _0)]
    CellTaken(Coord),
    /// The placement's mark does not match the side to move.
    #[display("it is not {}'s turn", _0)]
    OutOfTurn(Mark),
}

impl std::error::Error for PlacementError {}
