//! Error types for checked moves and engine configuration

use std::path::PathBuf;

/// Errors from playing a move through one of the checked paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be below {columns}")]
    OutOfRange { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Invalid position, game is over")]
    GameOver,

    #[error("could not parse '{character}' as a valid move")]
    InvalidCharacter { character: char },
}

/// Errors that can occur when loading or validating an [`EngineConfig`](crate::config::EngineConfig)
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
