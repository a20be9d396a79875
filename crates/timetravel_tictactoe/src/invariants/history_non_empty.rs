//! The history always holds at least the initial board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: the history is never empty and starts from an empty board.
pub struct HistoryNonEmptyInvariant;

impl Invariant<GameHistory> for HistoryNonEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
