//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetravel_tictactoe::{Cosmetics, GameSession};
use tracing::{debug, info, instrument};

use crate::input::{digit_cell, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select an entry in the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Holds the game session plus view-only state (cursor, focus, last
/// message). Rendering reads it; only [`App::handle_key`] changes it.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: usize,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(cosmetics: Cosmetics) -> Self {
        Self {
            session: GameSession::new(cosmetics),
            cursor: 4,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor (cell 0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Digits play a cell whichever panel has focus.
        if let Some(cell) = digit_cell(key.code) {
            self.cursor = cell;
            self.play(cell);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.session.history().current_move();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.after_jump();
                self.message = Some("Game restarted".to_string());
            }
            KeyCode::Char('t') => {
                let theme = self.session.cosmetics().theme.next();
                self.session.set_theme(theme);
                self.message = Some(format!("Theme: {}", theme.label()));
            }
            KeyCode::Char('p') => {
                let pieces = self.session.cosmetics().piece_set.next();
                self.session.set_piece_set(pieces);
                self.after_jump();
                self.message = Some(format!("Pieces: {} (new game)", pieces.label()));
            }
            KeyCode::Char('s') => {
                self.session.toggle_board_size();
                self.message = Some(self.session.cosmetics().board_size.label().to_string());
            }
            KeyCode::Char('[') => {
                let current = self.session.history().current_move();
                self.jump(current.saturating_sub(1));
            }
            KeyCode::Char(']') => {
                let current = self.session.history().current_move();
                self.jump(current + 1);
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => {
                let last = self.session.history().len() - 1;
                self.jump(last);
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.session.history().len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.session.play(cell) {
            Ok(()) => {
                self.message = None;
                self.after_jump();
            }
            Err(e) => {
                debug!(cell, error = %e, "Move ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    fn jump(&mut self, move_index: usize) {
        let landed = self.session.jump_to(move_index);
        self.after_jump();
        self.message = Some(if landed == 0 {
            "Viewing game start".to_string()
        } else {
            format!("Viewing move #{}", landed)
        });
    }

    fn after_jump(&mut self) {
        self.selected = self.session.history().current_move();
    }
}
