//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning lines, declared in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Cell indices of this line.
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }
}

/// A completed line: the mark that owns it and its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// Mark occupying all three cells.
    pub mark: Mark,
    /// Cell indices of the line, in line order.
    pub line: [usize; 3],
}

/// Evaluates a board for a completed line.
///
/// Lines are checked rows first (top to bottom), then columns (left to
/// right), then the two diagonals. The first line whose three squares hold
/// the same mark wins. Returns `None` when no line qualifies, regardless of
/// how full the board is.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(mark) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(WinResult {
                    mark,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}
