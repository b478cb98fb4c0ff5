//! Board coordinates.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the nine board positions, named by compass direction.
///
/// The enumeration order matches the row-major board indices 0-8, so
/// [`Coord::index`] and [`Coord::from_index`] are cheap conversions for
/// callers that address cells by number (key `1` maps to index 0).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Coord {
    /// Top-left corner (index 0).
    NorthWest,
    /// Top edge (index 1).
    North,
    /// Top-right corner (index 2).
    NorthEast,
    /// Left edge (index 3).
    West,
    /// Center (index 4).
    Center,
    /// Right edge (index 5).
    East,
    /// Bottom-left corner (index 6).
    SouthWest,
    /// Bottom edge (index 7).
    South,
    /// Bottom-right corner (index 8).
    SouthEast,
}

impl Coord {
    /// Row-major board index, 0-8.
    pub fn index(self) -> usize {
        match self {
            Coord::NorthWest => 0,
            Coord::North => 1,
            Coord::NorthEast => 2,
            Coord::West => 3,
            Coord::Center => 4,
            Coord::East => 5,
            Coord::SouthWest => 6,
            Coord::South => 7,
            Coord::SouthEast => 8,
        }
    }

    /// Converts a row-major index back to a coordinate.
    pub fn from_index(index: usize) -> Option<Self> {
        Coord::iter().nth(index)
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Coord::NorthWest => "top-left",
            Coord::North => "top",
            Coord::NorthEast => "top-right",
            Coord::West => "left",
            Coord::Center => "center",
            Coord::East => "right",
            Coord::SouthWest => "bottom-left",
            Coord::South => "bottom",
            Coord::SouthEast => "bottom-right",
        }
    }

    /// Coordinates of all vacant cells, in board order.
    pub fn vacancies(board: &Board) -> Vec<Coord> {
        Coord::iter().filter(|c| board.is_vacant(*c)).collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
