//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A board is drawn when it is full and no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn board_from(marks: [Mark; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(4, Mark::A).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{A, B};
        // A B A / A B B / B A A
        let board = board_from([A, B, A, A, B, B, B, A, A]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{A, B};
        // A A A / B B A / A B B
        let board = board_from([A, A, A, B, B, A, A, B, B]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
