//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor Games: tic-tac-toe and word guessing in the terminal.
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Terminal tic-tac-toe and word-guess games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a toml settings file. Defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Game to open directly. Omit to pick from the menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available games.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe.
    Tictactoe,

    /// Play the word-guess game.
    Wordle {
        /// Fix the target-word draw for a reproducible round.
        #[arg(long)]
        seed: Option<u64>,
    },
}
