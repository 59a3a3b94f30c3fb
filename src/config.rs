//! Board dimensions and search settings

use std::path::Path;

use tracing::warn;

use crate::board::Board;
use crate::error::ConfigError;
use crate::{COLUMNS, MAX_DEPTH, ROWS, WINDOW_LENGTH};

/// Settings for the board and the search, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    /// Pieces in a row needed to win, also the width of a scoring window
    pub window_length: usize,
    /// Search depth in plies
    pub depth: u32,
    /// Search the root moves on the rayon thread pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            window_length: WINDOW_LENGTH,
            depth: MAX_DEPTH,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Validation(
                "rows and columns must be > 0".into(),
            ));
        }
        if self.window_length < 3 {
            return Err(ConfigError::Validation(
                "window_length must be >= 3".into(),
            ));
        }
        if self.window_length > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(
                "window_length must fit along the rows or the columns".into(),
            ));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        Ok(())
    }

    /// An empty board with these dimensions
    pub fn new_board(&self) -> Board {
        Board::with_dimensions(self.rows, self.columns, self.window_length)
    }

    /// TOML for the default settings, as a starting point for a config file
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
