//! Application state: the game session plus cursor and feedback

use crate::game::{GameSession, Rejection, WordList, GRID_SIZE, SHOP_SIZE};
use rand::rngs::StdRng;
use tracing::debug;

/// The session type the terminal front end plays.
pub type Session = GameSession<WordList, StdRng>;

/// How the feedback line should read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    /// A move went through
    Success,
    /// The shop or board changed without scoring
    Notice,
    /// The action was refused
    Error,
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Board cursor as (row, col)
    pub cursor: (usize, usize),
    /// Shop slot picked up by the player
    pub selected: Option<usize>,
    /// Feedback message from the last action
    pub feedback: String,
    pub tone: Tone,
    /// Seed the shop was drawn from
    pub seed: String,
    session: Session,
}

impl App {
    /// Create a new application around a session
    pub fn new(session: Session, seed: String) -> Self {
        Self {
            should_quit: false,
            cursor: (GRID_SIZE / 2, GRID_SIZE / 2),
            selected: None,
            feedback: String::new(),
            tone: Tone::Neutral,
            seed,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move the board cursor, clamped to the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(GRID_SIZE - 1);
        self.cursor = (clamp(self.cursor.0, d_row), clamp(self.cursor.1, d_col));
    }

    /// Pick up a shop slot (pressing the same slot again puts it down)
    pub fn select_slot(&mut self, slot: usize) {
        if slot >= SHOP_SIZE {
            return;
        }
        if self.session.is_bankrupt() {
            self.say(Tone::Error, "BROKE");
            return;
        }
        if self.session.shop().get(slot).is_none() {
            self.say(Tone::Error, "NO LETTER");
            return;
        }

        self.selected = if self.selected == Some(slot) {
            None
        } else {
            Some(slot)
        };
        self.say(Tone::Neutral, "");
    }

    /// Drop the selected letter at the cursor
    pub fn on_drop(&mut self) {
        let Some(slot) = self.selected else {
            self.say(Tone::Neutral, "PICK A LETTER (1-7)");
            return;
        };
        let (row, col) = self.cursor;
        let before = self.session.score();

        match self.session.drop_letter_at(slot, row, col) {
            Ok(report) => {
                let gained = report.score as i64 - before as i64;
                let action = if report.delta.level > 0 {
                    format!("x{}", report.delta.level + 1)
                } else {
                    "PLACED".to_string()
                };
                let mut text = format!("{} {:+}", action, gained);
                if report.refilled {
                    text.push_str("  SHOP RESTOCKED");
                }
                self.say(Tone::Success, text);
                self.selected = None;
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    /// Refresh the shop
    pub fn on_refresh(&mut self) {
        match self.session.refresh_shop() {
            Ok(report) => {
                let text = if report.charged > 0 {
                    format!("NEW LETTERS -{}", report.charged)
                } else {
                    "NEW LETTERS".to_string()
                };
                self.say(Tone::Notice, text);
                self.selected = None;
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    /// Shuffle the shop
    pub fn on_shuffle(&mut self) {
        if !self.session.can_shuffle() {
            self.say(Tone::Error, "CAN'T SHUFFLE");
            return;
        }
        self.session.shuffle_shop();
        // The picked letter may have moved.
        self.selected = None;
        self.say(Tone::Notice, "SHUFFLED");
    }

    /// Undo the last move
    pub fn on_undo(&mut self) {
        match self.session.undo_last() {
            Ok(report) => {
                self.cursor = (report.delta.row, report.delta.col);
                self.selected = None;
                self.say(Tone::Notice, "UNDONE");
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn reject(&mut self, rejection: Rejection) {
        debug!(%rejection, "action rejected");
        self.say(Tone::Error, rejection.message());
    }

    fn say(&mut self, tone: Tone, text: impl Into<String>) {
        self.tone = tone;
        self.feedback = text.into();
    }
}
