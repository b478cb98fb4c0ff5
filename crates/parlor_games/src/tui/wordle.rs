//! Word-game screen.

use super::{Screen, ScreenTransition};
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent};
use parlor_wordle::{KeyboardHints, Lexicon, Phase, Round, Word};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Delay between tile flips when a scored row is revealed.
const REVEAL_STEP: Duration = Duration::from_millis(300);

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(2);

/// A transient message shown in place of the status line.
struct Notice {
    text: String,
    expires: Instant,
}

/// A row being revealed tile by tile.
struct Reveal {
    row: usize,
    started: Instant,
}

/// The word-game screen: one round, the typing buffer, and reveal timing.
///
/// The round's classification is computed eagerly at submit; the stagger
/// here is purely display. While a reveal runs, the keyboard shows the hints
/// as of the previous guess.
pub struct WordleScreen {
    lexicon: Lexicon,
    round: Round,
    /// Letters typed into the current row. The cursor column is its length.
    entry: String,
    /// Hints as currently displayed; catches up when a reveal finishes.
    shown_hints: KeyboardHints,
    notice: Option<Notice>,
    reveal: Option<Reveal>,
    rng: StdRng,
}

impl WordleScreen {
    /// Opens a round on a freshly drawn target.
    pub fn new(settings: &Settings, seed: Option<u64>) -> Self {
        let lexicon = Lexicon::built_in();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let target = lexicon.draw(&mut rng);
        debug!(word = %target, "round opened");

        Self {
            round: Round::new(target, *settings.guess_limit()),
            lexicon,
            entry: String::new(),
            shown_hints: KeyboardHints::new(),
            notice: None,
            reveal: None,
            rng,
        }
    }

    pub(crate) fn round(&self) -> &Round {
        &self.round
    }

    pub(crate) fn entry(&self) -> &str {
        &self.entry
    }

    pub(crate) fn shown_hints(&self) -> &KeyboardHints {
        &self.shown_hints
    }

    pub(crate) fn word_len(&self) -> usize {
        self.lexicon.word_len()
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Number of tiles of `row` to draw with their scored colors.
    pub(crate) fn revealed_tiles(&self, row: usize) -> usize {
        match &self.reveal {
            Some(reveal) if reveal.row == row => {
                let steps = reveal.started.elapsed().as_millis() / REVEAL_STEP.as_millis();
                (steps as usize).min(self.word_len())
            }
            _ => self.word_len(),
        }
    }

    fn reveal_running(&self) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|r| self.revealed_tiles(r.row) < self.word_len())
    }

    /// Status line under the grid.
    pub(crate) fn status(&self) -> String {
        if self.reveal_running() {
            return format!("Guess {}/{}", self.round.rows().len(), self.round.limit());
        }
        match self.round.phase() {
            Phase::Playing { row } => format!("Guess {}/{}", row + 1, self.round.limit()),
            Phase::Won { .. } => {
                "Congratulations! Press 'r' for a new round or 'q' for the menu.".to_string()
            }
            Phase::Lost { target } => format!(
                "Game over! The word was {}. Press 'r' for a new round or 'q' for the menu.",
                target
            ),
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires: Instant::now() + NOTICE_TTL,
        });
    }

    fn submit_entry(&mut self) {
        if self.entry.len() < self.word_len() {
            self.notify("Not enough letters");
            return;
        }

        let guess = match Word::new(&self.entry) {
            Ok(word) => word,
            Err(err) => {
                self.notify(err.to_string());
                return;
            }
        };

        match self.round.submit(guess) {
            Ok(_scored) => {
                self.reveal = Some(Reveal {
                    row: self.round.rows().len() - 1,
                    started: Instant::now(),
                });
                self.entry.clear();
            }
            Err(err) => self.notify(err.to_string()),
        }
    }

    fn new_round(&mut self) {
        let target = self.lexicon.draw(&mut self.rng);
        info!("starting a new round");
        self.round.reset(target);
        self.entry.clear();
        self.shown_hints.clear();
        self.notice = None;
        self.reveal = None;
    }
}

impl Screen for WordleScreen {
    fn render(&self, frame: &mut Frame) {
        super::ui::draw_wordle(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        // Esc always leaves; 'q' only once the round is over, since both
        // letters are typeable during play.
        if key.code == KeyCode::Esc {
            return ScreenTransition::ToMenu;
        }

        // Input waits for the current row to finish flipping.
        if self.reveal_running() {
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Char('q') if self.round.is_over() => return ScreenTransition::ToMenu,
            KeyCode::Char('r') if self.round.is_over() => self.new_round(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !self.round.is_over() => {
                if self.entry.len() < self.word_len() {
                    self.entry.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.entry.pop();
            }
            KeyCode::Enter if !self.round.is_over() => self.submit_entry(),
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| Instant::now() >= n.expires)
        {
            self.notice = None;
        }

        // When a reveal completes, let the keyboard catch up to the round.
        if self.reveal.is_some() && !self.reveal_running() {
            self.shown_hints = self.round.hints().clone();
            self.reveal = None;
        }
    }
}
