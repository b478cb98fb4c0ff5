//! Word-game grid and keyboard rendering.

use super::super::wordle::WordleScreen;
use parlor_wordle::{KeyboardHints, LetterStatus, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

/// Draws the guess grid, one line per row, centered in `area`.
///
/// Scored rows flip tile by tile: positions past
/// [`WordleScreen::revealed_tiles`] render filled but uncolored, so the
/// stagger is purely cosmetic over the eagerly computed statuses.
pub(crate) fn draw_grid(frame: &mut Frame, area: Rect, screen: &WordleScreen) {
    let word_len = screen.word_len();
    let round = screen.round();
    let active_row = match round.phase() {
        Phase::Playing { row } => Some(*row),
        _ => None,
    };

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..*round.limit() {
        let mut spans: Vec<Span> = Vec::with_capacity(word_len * 2);
        for col in 0..word_len {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile(screen, active_row, row, col));
        }
        lines.push(Line::from(spans));
    }

    let width = (word_len * 4 - 1) as u16;
    let widget = Paragraph::new(lines);
    frame.render_widget(
        widget,
        super::center_rect(area, width, *round.limit() as u16),
    );
}

fn tile(
    screen: &WordleScreen,
    active_row: Option<usize>,
    row: usize,
    col: usize,
) -> Span<'static> {
    let round = screen.round();

    // A scored row.
    if let Some(scored) = round.rows().get(row) {
        let letter = scored.guess().letters()[col] as char;
        let style = if col < screen.revealed_tiles(row) {
            status_style(scored.statuses()[col])
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        return Span::styled(format!(" {} ", letter), style);
    }

    // The row being typed.
    if active_row == Some(row) {
        if let Some(letter) = screen.entry().as_bytes().get(col) {
            return Span::styled(
                format!(" {} ", *letter as char),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        }
    }

    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

/// Draws the QWERTY hint bar, each key colored by its best observed status.
pub(crate) fn draw_keyboard(frame: &mut Frame, area: Rect, hints: &KeyboardHints) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::with_capacity(row.len() * 2);
            for (i, key) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = match hints.hint(key) {
                    Some(status) => status_style(status),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(format!("{}", key), style));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(widget, area);
}
