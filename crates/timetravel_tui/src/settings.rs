//! Cosmetic settings loaded from TOML and the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use timetravel_tictactoe::{BoardSize, Cosmetics, PieceSet, Theme};
use tracing::{debug, info, instrument};

/// User-configurable appearance.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Color theme.
    theme: Theme,

    /// Glyph set for the two marks.
    piece_set: PieceSet,

    /// Board size.
    board_size: BoardSize,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(
            theme = %settings.theme,
            piece_set = %settings.piece_set,
            board_size = %settings.board_size,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Replaces any value given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        theme: Option<Theme>,
        piece_set: Option<PieceSet>,
        board_size: Option<BoardSize>,
    ) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(piece_set) = piece_set {
            self.piece_set = piece_set;
        }
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        self
    }

    /// The settings as game cosmetics.
    pub fn cosmetics(&self) -> Cosmetics {
        Cosmetics {
            theme: self.theme,
            piece_set: self.piece_set,
            board_size: self.board_size,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("theme = \"light\"\n").unwrap();
        assert_eq!(*settings.theme(), Theme::Light);
        assert_eq!(*settings.piece_set(), PieceSet::Classic);
    }

    #[test]
    fn test_unknown_value_is_error() {
        let err = Settings::from_toml("board_size = \"huge\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        assert!(Settings::from_toml("colour = \"light\"\n").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::from_toml("theme = \"light\"\npiece_set = \"batman\"\n")
            .unwrap()
            .with_overrides(Some(Theme::Batman), None, Some(BoardSize::Large));
        assert_eq!(
            settings.cosmetics(),
            Cosmetics {
                theme: Theme::Batman,
                piece_set: PieceSet::Batman,
                board_size: BoardSize::Large,
            }
        );
    }
}
