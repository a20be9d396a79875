//! Cosmetic configuration: theme, piece glyphs, board size.
//!
//! None of these values reach the rules. Marks on the board are always
//! [`Mark::A`] and [`Mark::B`]; a [`PieceSet`] only decides how they look.

use crate::Mark;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let all: Vec<T> = T::iter().collect();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all.get((idx + 1) % all.len().max(1)).copied().unwrap_or(current)
}

/// Color theme for the whole screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark blue background.
    #[default]
    Midnight,
    /// Light background.
    Light,
    /// Black and yellow.
    Batman,
}

impl Theme {
    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Self::Midnight => "Midnight",
            Self::Light => "Light",
            Self::Batman => "Batman",
        }
    }

    /// Next theme in menu order, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        cycle(self)
    }
}

/// Glyph set used to draw marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PieceSet {
    /// X and O.
    #[default]
    Classic,
    /// Bat and clown emoji.
    Batman,
    /// Hero and villain portraits.
    Images,
}

impl PieceSet {
    /// Returns the display label for this piece set.
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic (X / O)",
            Self::Batman => "Batman (🦇 / 🤡)",
            Self::Images => "Portraits (Batman / Joker)",
        }
    }

    /// Glyph drawn for `mark` in this set.
    pub fn glyph(self, mark: Mark) -> &'static str {
        match (self, mark) {
            (Self::Classic, Mark::A) => "X",
            (Self::Classic, Mark::B) => "O",
            (Self::Batman, Mark::A) => "🦇",
            (Self::Batman, Mark::B) => "🤡",
            (Self::Images, Mark::A) => "Bat",
            (Self::Images, Mark::B) => "Jok",
        }
    }

    /// Next piece set in menu order, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        cycle(self)
    }
}

/// Visual size of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardSize {
    /// Compact cells.
    Small,
    /// Default cells.
    #[default]
    Medium,
    /// Wide cells.
    Large,
}

impl BoardSize {
    /// Returns the display label for this size.
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small board",
            Self::Medium => "Medium board",
            Self::Large => "Large board",
        }
    }

    /// Small -> Medium -> Large -> Small.
    #[instrument]
    pub fn next(self) -> Self {
        cycle(self)
    }

    /// Cell width and height in terminal columns and rows.
    pub fn cell_dimensions(self) -> (u16, u16) {
        match self {
            Self::Small => (5, 1),
            Self::Medium => (9, 3),
            Self::Large => (13, 5),
        }
    }
}

/// All cosmetic settings together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cosmetics {
    /// Color theme.
    pub theme: Theme,
    /// Glyph set.
    pub piece_set: PieceSet,
    /// Board size.
    pub board_size: BoardSize,
}
