//! Rendering. Screens hand their state to these functions; nothing here
//! mutates anything.

mod board;
mod grid;

use super::menu::MenuScreen;
use super::tictactoe::TicTacToeScreen;
use super::wordle::WordleScreen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the game-selection menu.
pub(crate) fn draw_menu(frame: &mut Frame, screen: &MenuScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(title("Parlor Games"), chunks[0]);

    let mut lines = Vec::new();
    for (idx, label) in screen.entries().enumerate() {
        let (marker, style) = if idx == screen.selected() {
            (
                "> ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        lines.push(ratatui::text::Line::styled(format!("{marker}{label}"), style));
    }
    let list = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(list, center_rect(chunks[1], 20, 5));

    frame.render_widget(
        help("Up/Down: Select | Enter: Play | Q: Quit"),
        chunks[2],
    );
}

/// Draws the tic-tac-toe screen.
pub(crate) fn draw_tictactoe(frame: &mut Frame, screen: &TicTacToeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(title("Tic-Tac-Toe"), chunks[0]);
    board::draw_board(frame, chunks[1], screen.turn().board());
    frame.render_widget(status(screen.status()), chunks[2]);
    frame.render_widget(
        help("1-9: Place mark | R: Restart | Q/Esc: Menu"),
        chunks[3],
    );
}

/// Draws the word-game screen.
pub(crate) fn draw_wordle(frame: &mut Frame, screen: &WordleScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(title("Wordle"), chunks[0]);
    grid::draw_grid(frame, chunks[1], screen);
    grid::draw_keyboard(frame, chunks[2], screen.shown_hints());

    // A transient notice outranks the status line.
    let line = match screen.notice() {
        Some(text) => status(text).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => status(screen.status()),
    };
    frame.render_widget(line, chunks[3]);

    frame.render_widget(
        help("Type letters | Enter: Submit | Backspace: Delete | Esc: Menu"),
        chunks[4],
    );
}

fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn status(text: impl Into<String>) -> Paragraph<'static> {
    Paragraph::new(text.into())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"))
}

fn help(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Centers a fixed-size rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
