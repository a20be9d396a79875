//! Terminal front end for time-travel tic-tac-toe.
//!
//! The front end owns no game rules. [`App`] wraps a
//! [`GameSession`](timetravel_tictactoe::GameSession), turns key presses
//! into session calls, and [`ui::draw`] re-renders the whole screen from
//! it after every event.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod settings;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use input::{digit_cell, move_cursor};
pub use settings::{ConfigError, Settings};
