//! Game configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Prepended to the board file's name to form the save file's name.
    #[serde(default = "default_output_prefix")]
    output_prefix: String,

    /// Print the how-to-play banner before the first move.
    #[serde(default = "default_show_instructions")]
    show_instructions: bool,
}

#[instrument]
fn default_output_prefix() -> String {
    "out-".to_string()
}

#[instrument]
fn default_show_instructions() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            show_instructions: default_show_instructions(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(output_prefix = %config.output_prefix, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Turns the instructions banner off.
    pub fn without_instructions(mut self) -> Self {
        self.show_instructions = false;
        self
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
