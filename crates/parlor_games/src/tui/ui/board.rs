//! Tic-tac-toe board rendering.

use parlor_tictactoe::{Board, Cell, Coord, Mark};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: usize = 5;

/// Draws the 3x3 board centered in `area`. Vacant cells show their key
/// number; X renders red and O blue.
pub(crate) fn draw_board(frame: &mut Frame, area: Rect, board: &Board) {
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..3 {
        lines.push(spacer_line());
        lines.push(content_line(board, row));
        lines.push(spacer_line());
        if row < 2 {
            lines.push(separator_line());
        }
    }

    let widget = Paragraph::new(lines);
    let width = (CELL_WIDTH * 3 + 2) as u16;
    frame.render_widget(widget, super::center_rect(area, width, 11));
}

fn cell_span(board: &Board, index: usize) -> Span<'static> {
    let coord = Coord::from_index(index).expect("board indices are 0-8");
    let (symbol, style) = match board.get(coord) {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Taken(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::Taken(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };
    Span::styled(format!("  {}  ", symbol), style)
}

fn content_line(board: &Board, row: usize) -> Line<'static> {
    let sep = || Span::styled("│", Style::default().fg(Color::DarkGray));
    Line::from(vec![
        cell_span(board, row * 3),
        sep(),
        cell_span(board, row * 3 + 1),
        sep(),
        cell_span(board, row * 3 + 2),
    ])
}

fn spacer_line() -> Line<'static> {
    let blank = || Span::raw(" ".repeat(CELL_WIDTH));
    let sep = || Span::styled("│", Style::default().fg(Color::DarkGray));
    Line::from(vec![blank(), sep(), blank(), sep(), blank()])
}

fn separator_line() -> Line<'static> {
    let bar = "─".repeat(CELL_WIDTH);
    Line::styled(
        format!("{bar}┼{bar}┼{bar}"),
        Style::default().fg(Color::DarkGray),
    )
}
