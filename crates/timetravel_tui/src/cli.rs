//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;
use timetravel_tictactoe::{BoardSize, PieceSet, Theme};

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Color theme (midnight, light, batman)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Piece set (classic, batman, images)
    #[arg(long)]
    pub pieces: Option<PieceSet>,

    /// Board size (small, medium, large)
    #[arg(long)]
    pub size: Option<BoardSize>,

    /// File that receives log output
    #[arg(long, default_value = "timetravel.log")]
    pub log_file: PathBuf,
}
