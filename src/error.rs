use std::path::PathBuf;

use crate::game::Status;

/// Reasons a move is rejected. The game state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// `column` is the value as the caller passed it, so it may be negative.
    #[error("column {column} is outside the board (valid columns: 0..{width})")]
    InvalidColumn { column: i128, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over ({status})")]
    InvalidState { status: Status },
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
