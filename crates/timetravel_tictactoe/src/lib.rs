//! Time-travel tic-tac-toe - pure game state.
//!
//! Two-player tic-tac-toe kept as a list of board snapshots. Any earlier
//! snapshot can be revisited; playing from it overwrites the moves that
//! followed.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation of a single board
//! - **History**: snapshots, cursor, play / jump / reset
//! - **Invariants**: checkable properties of a history
//! - **Cosmetics**: theme, glyph set and board size, never seen by the rules
//! - **Session**: history plus cosmetics, as driven by a front end
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameHistory, GameStatus, Mark};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 1, 4, 3, 8] {
//!     game.play(cell).unwrap();
//! }
//! assert!(game.play(2).is_err());
//! game.jump_to(1);
//! game.play(8).unwrap();
//! assert_eq!(game.len(), 3);
//! assert_eq!(game.current_status(), GameStatus::InProgress { next: Mark::A });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cosmetics;
mod history;
pub mod invariants;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use cosmetics::{BoardSize, Cosmetics, PieceSet, Theme};
pub use history::{GameHistory, MoveDescription};
pub use rules::{Line, WinResult, evaluate, is_draw, is_full};
pub use session::GameSession;
pub use types::{BOARD_CELLS, Board, GameStatus, Mark, Square};
