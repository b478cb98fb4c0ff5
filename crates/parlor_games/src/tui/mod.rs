//! Terminal interface.
//!
//! A synchronous event loop drives a screen state machine: the menu plus one
//! screen per game. Each key press triggers one synchronous session
//! operation and one redraw; nothing blocks inside the loop. Screens return
//! a [`ScreenTransition`] from their key handler and the loop swaps screens
//! accordingly.

mod menu;
mod tictactoe;
mod ui;
mod wordle;

pub use menu::MenuScreen;
pub use tictactoe::TicTacToeScreen;
pub use wordle::WordleScreen;

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

/// How often the loop wakes without input, for reveal animation and notice
/// expiry.
const TICK: Duration = Duration::from_millis(50);

/// Which screen to open first.
#[derive(Debug, Clone, Copy)]
pub enum Launch {
    /// The game-selection menu.
    Menu,
    /// Straight into tic-tac-toe.
    TicTacToe,
    /// Straight into the word game, optionally with a fixed draw.
    Wordle {
        /// Seed for the target-word draw.
        seed: Option<u64>,
    },
}

/// The result of handling a key event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to the menu.
    ToMenu,
    /// Open the tic-tac-toe screen.
    ToTicTacToe,
    /// Open the word-game screen.
    ToWordle,
    /// Leave the application.
    Quit,
}

/// One screen of the interface.
pub trait Screen {
    /// Renders the screen.
    fn render(&self, frame: &mut Frame);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Advances time-driven state. Called once per loop iteration.
    fn tick(&mut self) {}
}

/// Runs the interface until the user quits.
pub fn run(settings: &Settings, launch: Launch) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, settings, launch);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn make_screen(settings: &Settings, launch: Launch) -> Box<dyn Screen> {
    match launch {
        Launch::Menu => Box::new(MenuScreen::new()),
        Launch::TicTacToe => Box::new(TicTacToeScreen::new(settings)),
        Launch::Wordle { seed } => Box::new(WordleScreen::new(settings, seed)),
    }
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    settings: &Settings,
    launch: Launch,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut screen = make_screen(settings, launch);

    loop {
        terminal.draw(|frame| screen.render(frame))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(key) {
                    ScreenTransition::Stay => {}
                    ScreenTransition::ToMenu => {
                        screen = make_screen(settings, Launch::Menu);
                    }
                    ScreenTransition::ToTicTacToe => {
                        screen = make_screen(settings, Launch::TicTacToe);
                    }
                    ScreenTransition::ToWordle => {
                        screen = make_screen(settings, Launch::Wordle { seed: None });
                    }
                    ScreenTransition::Quit => {
                        info!("quit requested");
                        return Ok(());
                    }
                }
            }
        }

        screen.tick();
    }
}
