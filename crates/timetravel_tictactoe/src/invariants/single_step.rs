//! Single step invariant: consecutive snapshots differ by one placement.

use super::Invariant;
use crate::GameHistory;
use crate::action::Move;

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// Squares never change once occupied, and no snapshot repeats or skips
/// a placement.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty square"
    }
}
