//! Snapshot history with time travel.
//!
//! The game is a list of board snapshots plus a cursor. Playing appends a
//! snapshot after discarding everything past the cursor; jumping only
//! moves the cursor.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, TimeTravelInvariants};
use crate::rules::{evaluate, is_full};
use crate::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Entry in the navigable move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescription {
    /// Index of the snapshot this entry jumps to.
    pub move_index: usize,
    /// True only for the initial empty board.
    pub is_initial: bool,
    /// The move that produced this snapshot (`None` for the initial board).
    pub played: Option<Move>,
}

impl MoveDescription {
    /// Human-readable label for the entry.
    pub fn label(&self) -> String {
        if self.is_initial {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.move_index)
        }
    }
}

/// Game history engine: board snapshots plus the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Places the mark for the current turn on `cell`.
    ///
    /// Any snapshots after the current position are discarded before the
    /// new one is appended.
    ///
    /// # Errors
    ///
    /// Refuses the move, leaving the history untouched, when the current
    /// board already has a winner, the cell is off the board, or the cell
    /// is occupied.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        let board = *self.current_board();

        if evaluate(&board).is_some() {
            debug!("Play refused: game already won");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(cell) {
            let err = if board.get(cell).is_none() {
                MoveError::OutOfBounds(cell)
            } else {
                MoveError::SquareOccupied(cell)
            };
            debug!(%err, "Play refused");
            return Err(err);
        }

        let mark = self.next_mark();
        let next = board.with_mark(cell, mark).ok_or(MoveError::OutOfBounds(cell))?;

        let discarded = self.snapshots.len() - 1 - self.current_move;
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        debug!(%mark, cell, current_move = self.current_move, "Move applied");
        self.assert_invariants();
        Ok(())
    }

    /// Moves the cursor to `move_index`.
    ///
    /// Indices past the last snapshot are clamped to the last snapshot.
    /// Returns the index actually selected. The snapshots are not changed.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> usize {
        let last = self.snapshots.len() - 1;
        if move_index > last {
            debug!(move_index, last, "Jump index clamped");
        }
        self.current_move = move_index.min(last);
        self.current_move
    }

    /// Restores a single empty board and moves the cursor to it.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Board::new());
        self.current_move = 0;
        debug!("History reset");
    }

    /// Status of the board at the current position.
    ///
    /// Evaluated afresh on every call.
    #[instrument(skip(self))]
    pub fn current_status(&self) -> GameStatus {
        let board = self.current_board();
        match evaluate(board) {
            Some(win) => GameStatus::Won {
                mark: win.mark,
                line: win.line,
            },
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.next_mark(),
            },
        }
    }

    /// One entry per snapshot, in order, for building a move list.
    #[instrument(skip(self))]
    pub fn history_descriptions(&self) -> Vec<MoveDescription> {
        let first = MoveDescription {
            move_index: 0,
            is_initial: true,
            played: None,
        };
        std::iter::once(first)
            .chain(self.snapshots.windows(2).enumerate().map(|(i, pair)| {
                MoveDescription {
                    move_index: i + 1,
                    is_initial: false,
                    played: Move::between(&pair[0], &pair[1]),
                }
            }))
            .collect()
    }

    /// Board at `move_index`, or at the current position when `None`.
    ///
    /// Returns `None` for an index past the last snapshot.
    pub fn board(&self, move_index: Option<usize>) -> Option<&Board> {
        self.snapshots.get(move_index.unwrap_or(self.current_move))
    }

    /// Board at the current position.
    pub fn current_board(&self) -> &Board {
        debug_assert!(
            self.current_move < self.snapshots.len(),
            "cursor must point into the history"
        );
        &self.snapshots[self.current_move]
    }

    /// Index of the current position.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Mark whose turn it is at the current position.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Number of snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the cursor is on the latest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.snapshots.len()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    fn assert_invariants(&self) {
        if let Err(violations) = TimeTravelInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "history invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current_move: usize) -> Self {
        Self {
            snapshots,
            current_move,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
