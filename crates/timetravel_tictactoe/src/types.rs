//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_CELLS: usize = 9;

/// Abstract per-player symbol stored on the board.
///
/// Marks never carry rendering information; the glyph shown for a mark
/// is chosen by [`PieceSet`](crate::PieceSet).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// First player (moves on even move indices).
    A,
    /// Second player (moves on odd move indices).
    B,
}

impl Mark {
    /// Returns the mark that plays from the given move index.
    ///
    /// Even indices belong to [`Mark::A`], odd indices to [`Mark::B`].
    #[instrument]
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 { Mark::A } else { Mark::B }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every history snapshot is its own copy and
/// cannot be changed through a later snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; BOARD_CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell (0-8).
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns a copy of this board with `cell` occupied by `mark`.
    ///
    /// Returns `None` if the cell is out of bounds.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Option<Self> {
        let mut next = *self;
        let square = next.squares.get_mut(cell)?;
        *square = Square::Occupied(mark);
        Some(next)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }
}

/// Current status of the game at the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Mark that plays next.
        next: Mark,
    },
    /// Game ended in a win.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Cell indices of the winning line.
        line: [usize; 3],
    },
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_move_parity() {
        assert_eq!(Mark::for_move(0), Mark::A);
        assert_eq!(Mark::for_move(1), Mark::B);
        assert_eq!(Mark::for_move(6), Mark::A);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::A).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::A)));
    }

    #[test]
    fn test_with_mark_out_of_bounds() {
        assert_eq!(Board::new().with_mark(9, Mark::B), None);
    }
}
