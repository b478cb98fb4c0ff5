//! Game-selection menu.

use super::{Screen, ScreenTransition};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

/// Menu entries, in display order.
const ENTRIES: [(&str, ScreenTransition); 3] = [
    ("Tic-Tac-Toe", ScreenTransition::ToTicTacToe),
    ("Wordle", ScreenTransition::ToWordle),
    ("Quit", ScreenTransition::Quit),
];

/// The game-selection screen.
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    /// Creates the menu with the first entry highlighted.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|(label, _)| *label)
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn render(&self, frame: &mut Frame) {
        super::ui::draw_menu(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(ENTRIES.len() - 1);
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % ENTRIES.len();
                ScreenTransition::Stay
            }
            KeyCode::Enter => ENTRIES[self.selected].1,
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
