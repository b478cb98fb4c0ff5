//! Tic-tac-toe screen.

use super::{Screen, ScreenTransition};
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent};
use parlor_tictactoe::{Coord, FreshGame, Mark, Outcome, Placement, Turn};
use ratatui::Frame;
use tracing::debug;

/// The tic-tac-toe screen: one session plus a status line.
pub struct TicTacToeScreen {
    /// The session. `None` only transiently while a placement is applied.
    turn: Option<Turn>,
    status: String,
    first: Mark,
}

impl TicTacToeScreen {
    /// Opens a fresh game using the configured first mark.
    pub fn new(settings: &Settings) -> Self {
        let first = *settings.first_mark();
        Self {
            turn: Some(Turn::Live(FreshGame::new().start(first))),
            status: Self::turn_prompt(first),
            first,
        }
    }

    pub(crate) fn turn(&self) -> &Turn {
        self.turn.as_ref().expect("screen always holds a game")
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }

    fn turn_prompt(mark: Mark) -> String {
        format!("Player {}'s turn. Press 1-9 to place your mark.", mark)
    }

    /// Applies a placement at the cell for key `digit` (1-9).
    fn place_at(&mut self, digit: usize) {
        let Some(coord) = Coord::from_index(digit - 1) else {
            return;
        };

        match self.turn.take() {
            Some(Turn::Live(game)) => {
                debug!(%coord, mark = %game.to_move(), "placing");
                let placement = Placement::new(game.to_move(), coord);
                match game.clone().place(placement) {
                    Ok(next) => {
                        self.status = match &next {
                            Turn::Live(live) => Self::turn_prompt(live.to_move()),
                            Turn::Done(done) => match done.outcome() {
                                Outcome::Winner(mark) => format!(
                                    "Player {} has won! Press 'r' to restart or 'q' for the menu.",
                                    mark
                                ),
                                Outcome::Draw => "Game ended in a draw! Press 'r' to restart \
                                                  or 'q' for the menu."
                                    .to_string(),
                            },
                        };
                        self.turn = Some(next);
                    }
                    Err(err) => {
                        self.status = format!("{}. Try again.", err);
                        self.turn = Some(Turn::Live(game));
                    }
                }
            }
            other => {
                // Finished games ignore placement keys.
                self.turn = other;
            }
        }
    }

    fn restart(&mut self) {
        debug!("restarting game");
        self.turn = Some(Turn::Live(FreshGame::new().start(self.first)));
        self.status = Self::turn_prompt(self.first);
    }
}

impl Screen for TicTacToeScreen {
    fn render(&self, frame: &mut Frame) {
        super::ui::draw_tictactoe(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                self.place_at(c as usize - '0' as usize);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') => {
                self.restart();
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::ToMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
