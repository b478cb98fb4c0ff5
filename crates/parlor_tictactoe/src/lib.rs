//! Pure tic-tac-toe game logic.
//!
//! The crate splits into a stateless evaluator and a stateful session:
//!
//! - [`evaluate`] inspects a board after a placement and reports
//!   [`Verdict::Ongoing`], [`Verdict::Win`], or [`Verdict::Draw`]. It is a
//!   pure function of its inputs and never mutates anything.
//! - [`FreshGame`] → [`LiveGame`] → [`DoneGame`] is a typestate session that
//!   owns the board, the side to move, and the placement history. Invalid
//!   operations (placing on a finished game, reading a winner from a live
//!   game) do not exist on the corresponding type.
//!
//! Rendering is someone else's job: every operation here returns data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coord;
mod game;
pub mod invariants;
mod rules;
mod types;

pub use action::{Placement, PlacementError};
pub use coord::Coord;
pub use game::{DoneGame, FreshGame, LiveGame, Outcome, Turn};
pub use rules::{evaluate, line_winner, Verdict, WINNING_LINES};
pub use types::{Board, Cell, Mark};
