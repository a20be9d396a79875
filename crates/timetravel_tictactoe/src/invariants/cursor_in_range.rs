//! Cursor invariant: the current move always names a snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `current_move < len`.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_holds_after_clamped_jump() {
        let mut history = GameHistory::new();
        history.play(0).unwrap();
        history.jump_to(100);
        assert!(CursorInRangeInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let history = GameHistory::from_parts(vec![Board::new()], 1);
        assert!(!CursorInRangeInvariant::holds(&history));
    }
}
