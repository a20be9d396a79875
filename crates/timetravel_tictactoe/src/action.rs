//! First-class action types for tic-tac-toe.
//!
//! A move is recovered from two consecutive snapshots, so the history list
//! can say what happened at each step without storing moves separately.

use crate::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Cell index (0-8).
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: usize) -> Self {
        Self { mark, cell }
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one square went from empty to occupied
    /// and nothing else changed.
    #[instrument(skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut found = None;
        for (cell, (old, new)) in before.squares().iter().zip(after.squares()).enumerate() {
            if old == new {
                continue;
            }
            match (old, new, found) {
                (Square::Empty, Square::Occupied(mark), None) => {
                    found = Some(Move::new(*mark, cell));
                }
                _ => return None,
            }
        }
        found
    }
}

/// Reason a play was refused.
///
/// A refused play leaves the game untouched; callers that only need the
/// "nothing happens" behavior may discard it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// The active snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}
