use std::path::PathBuf;

use crate::game::{Seat, Token};

/// Rejected text at the column prompt. Always answered with a re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnInputError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {0} is outside 1-7")]
    OutOfRange(i64),
}

/// Key outside the 16-entry palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("no colour with key {0} (expected 1-16)")]
    UnknownKey(usize),
}

/// Token assignment that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} has not chosen a token")]
    MissingToken(Seat),

    #[error("both players chose {}", .0.name())]
    DuplicateToken(Token),
}

/// Errors that can end a game session abnormally.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
