//! Parlor games: terminal tic-tac-toe and word guessing.
//!
//! This crate is the presentation layer over two logic crates:
//!
//! - [`parlor_tictactoe`]: board evaluation and the typestate game session.
//! - [`parlor_wordle`]: guess scoring, keyboard hints, and the round state
//!   machine.
//!
//! Everything here is wiring: a clap CLI, a toml settings file, and a
//! ratatui interface that turns key presses into session operations and
//! session data into styled cells.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod settings;
pub mod tui;

pub use cli::{Cli, Command};
pub use settings::{ConfigError, Settings};
