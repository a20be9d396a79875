//! Property tests for win evaluation and history navigation.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use timetravel_tictactoe::invariants::{InvariantSet, TimeTravelInvariants};
use timetravel_tictactoe::{Board, GameHistory, Line, Mark, Square, evaluate};

#[derive(Debug, Clone)]
enum Op {
    Play(usize),
    Jump(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..12).prop_map(Op::Play),
        3 => (0usize..12).prop_map(Op::Jump),
        1 => Just(Op::Reset),
    ]
}

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::A)),
        Just(Square::Occupied(Mark::B)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn apply(game: &mut GameHistory, op: &Op) {
    match op {
        Op::Play(cell) => {
            let _ = game.play(*cell);
        }
        Op::Jump(index) => {
            game.jump_to(*index);
        }
        Op::Reset => game.reset(),
    }
}

fn game_from(ops: &[Op]) -> GameHistory {
    let mut game = GameHistory::new();
    for op in ops {
        apply(&mut game, op);
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Evaluation does not depend on what was evaluated before.
    #[test]
    fn evaluate_is_pure(first in board(), second in board()) {
        let a = evaluate(&first);
        let _ = evaluate(&second);
        prop_assert_eq!(evaluate(&first), a);
    }

    /// Any line filled with one mark is reported unless an earlier line also is.
    #[test]
    fn filled_line_is_detected(base in board(), line_idx in 0usize..8, mark_a in any::<bool>()) {
        let mark = if mark_a { Mark::A } else { Mark::B };
        let line = Line::iter().nth(line_idx).unwrap();
        let board = line
            .cells()
            .iter()
            .fold(base, |b, cell| b.with_mark(*cell, mark).unwrap());
        let result = evaluate(&board).expect("a line is filled");

        let first_complete = Line::iter()
            .find(|l| {
                let [a, b, c] = l.cells();
                let sq = board.get(a).unwrap();
                sq != Square::Empty && board.get(b) == Some(sq) && board.get(c) == Some(sq)
            })
            .unwrap();
        prop_assert_eq!(result.line, first_complete.cells());
        if first_complete == line {
            prop_assert_eq!(result.mark, mark);
        }
    }

    /// Invariants hold after any sequence of operations.
    #[test]
    fn invariants_hold(ops in proptest::collection::vec(op(), 0..40)) {
        let game = game_from(&ops);
        prop_assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    /// A successful play grows the truncated history by one and lands on it.
    #[test]
    fn play_appends_after_cursor(ops in proptest::collection::vec(op(), 0..30), cell in 0usize..9) {
        let mut game = game_from(&ops);
        let cursor = game.current_move();
        let kept = game.snapshots()[..=cursor].to_vec();
        if game.play(cell).is_ok() {
            prop_assert_eq!(game.len(), cursor + 2);
            prop_assert_eq!(game.current_move(), cursor + 1);
            prop_assert_eq!(&game.snapshots()[..=cursor], kept.as_slice());
        }
    }

    /// A refused play changes nothing.
    #[test]
    fn refused_play_is_noop(ops in proptest::collection::vec(op(), 0..30), cell in 0usize..12) {
        let mut game = game_from(&ops);
        let before = game.clone();
        if game.play(cell).is_err() {
            prop_assert_eq!(game, before);
        }
    }

    /// Jumping only moves the cursor.
    #[test]
    fn jump_keeps_snapshots(ops in proptest::collection::vec(op(), 0..30), target in 0usize..12) {
        let mut game = game_from(&ops);
        let snapshots = game.snapshots().to_vec();
        let landed = game.jump_to(target);
        prop_assert_eq!(game.snapshots(), snapshots.as_slice());
        prop_assert_eq!(landed, target.min(snapshots.len() - 1));
        prop_assert_eq!(game.current_move(), landed);
    }

    /// Reset always returns to the single empty board.
    #[test]
    fn reset_restores_start(ops in proptest::collection::vec(op(), 0..30)) {
        let mut game = game_from(&ops);
        game.reset();
        prop_assert_eq!(game, GameHistory::new());
    }
}
