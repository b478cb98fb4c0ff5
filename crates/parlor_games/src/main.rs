//! Parlor Games binary.

use anyhow::Result;
use clap::Parser;
use parlor_games::cli::{Cli, Command};
use parlor_games::settings::Settings;
use parlor_games::tui::{self, Launch};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let launch = match cli.command {
        None => Launch::Menu,
        Some(Command::Tictactoe) => Launch::TicTacToe,
        Some(Command::Wordle { seed }) => Launch::Wordle { seed },
    };

    info!(?launch, "starting parlor games");
    tui::run(&settings, launch)
}
