//! Alternating marks invariant: A, B, A, B, ...

use super::Invariant;
use crate::action::Move;
use crate::{GameHistory, Mark};

/// Invariant: the mark placed into snapshot `n` is the mark for move `n - 1`.
///
/// The first placement is always A, and marks alternate from there.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mov) => mov.mark == Mark::for_move(i),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Marks alternate A, B, A, B, ..."
    }
}
