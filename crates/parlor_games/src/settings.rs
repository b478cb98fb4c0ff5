//! User-configurable settings.

use derive_getters::Getters;
use parlor_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings loaded from a toml file. Every field has a default, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Which mark moves first in tic-tac-toe.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,

    /// How many guesses a word round allows.
    #[serde(default = "default_guess_limit")]
    guess_limit: usize,
}

fn default_first_mark() -> Mark {
    Mark::X
}

fn default_guess_limit() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_mark: default_first_mark(),
            guess_limit: default_guess_limit(),
        }
    }
}

impl Settings {
    /// Loads settings from a toml file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading settings");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse settings: {}", e)))?;

        info!(
            first_mark = %settings.first_mark,
            guess_limit = settings.guess_limit,
            "settings loaded"
        );
        Ok(settings)
    }
}

/// Settings file problem.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", message)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// Creates an error with the given message.
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl std::error::Error for ConfigError {}
