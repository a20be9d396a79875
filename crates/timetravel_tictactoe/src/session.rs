//! Game session: history engine plus cosmetic configuration.

use crate::action::MoveError;
use crate::cosmetics::{BoardSize, Cosmetics, PieceSet, Theme};
use crate::history::GameHistory;
use crate::GameStatus;
use tracing::{info, instrument};

/// A game together with how it is drawn.
///
/// Changing the piece set starts a fresh game; theme and board size
/// changes leave the game alone.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    history: GameHistory,
    cosmetics: Cosmetics,
}

impl GameSession {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(cosmetics: Cosmetics) -> Self {
        Self {
            history: GameHistory::new(),
            cosmetics,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current cosmetic settings.
    pub fn cosmetics(&self) -> Cosmetics {
        self.cosmetics
    }

    /// Plays the current mark on `cell`. See [`GameHistory::play`].
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        self.history.play(cell)
    }

    /// Moves to a snapshot. See [`GameHistory::jump_to`].
    pub fn jump_to(&mut self, move_index: usize) -> usize {
        self.history.jump_to(move_index)
    }

    /// Starts a fresh game.
    pub fn reset(&mut self) {
        self.history.reset();
    }

    /// Changes the theme.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.cosmetics.theme = theme;
        info!(theme = %theme, "Theme changed");
    }

    /// Changes the piece set and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_piece_set(&mut self, piece_set: PieceSet) {
        self.cosmetics.piece_set = piece_set;
        self.history.reset();
        info!(piece_set = %piece_set, "Piece set changed, game reset");
    }

    /// Changes the board size.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, board_size: BoardSize) {
        self.cosmetics.board_size = board_size;
        info!(board_size = %board_size, "Board size changed");
    }

    /// Cycles Small -> Medium -> Large -> Small.
    pub fn toggle_board_size(&mut self) {
        self.set_board_size(self.cosmetics.board_size.next());
    }

    /// Status at the current position.
    pub fn status(&self) -> GameStatus {
        self.history.current_status()
    }

    /// Status text with marks drawn in the current piece set.
    #[instrument(skip(self))]
    pub fn status_line(&self) -> String {
        let pieces = self.cosmetics.piece_set;
        match self.status() {
            GameStatus::Won { mark, .. } => format!("Winner: {}", pieces.glyph(mark)),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress { next } => format!("Next player: {}", pieces.glyph(next)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_piece_set_change_resets() {
        let mut session = GameSession::default();
        session.play(4).unwrap();
        session.set_piece_set(PieceSet::Batman);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.cosmetics().piece_set, PieceSet::Batman);
    }

    #[test]
    fn test_theme_and_size_keep_game() {
        let mut session = GameSession::default();
        session.play(4).unwrap();
        session.set_theme(Theme::Light);
        session.toggle_board_size();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.cosmetics().board_size, BoardSize::Large);
    }

    #[test]
    fn test_status_line_uses_glyphs() {
        let mut session = GameSession::new(Cosmetics {
            piece_set: PieceSet::Batman,
            ..Cosmetics::default()
        });
        assert_eq!(session.status_line(), "Next player: 🦇");
        session.play(0).unwrap();
        assert_eq!(session.status_line(), "Next player: 🤡");
        assert_eq!(session.history().next_mark(), Mark::B);
    }

    #[test]
    fn test_status_line_winner() {
        let mut session = GameSession::default();
        for cell in [0, 1, 4, 3, 8] {
            session.play(cell).unwrap();
        }
        assert_eq!(session.status_line(), "Winner: X");
    }
}
