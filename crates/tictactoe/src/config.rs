//! Game configuration from TOML and the environment, overridden by the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Difficulty;
use tracing::{debug, info, instrument};

/// Environment variable naming the TOML config file.
pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";

/// Environment variable holding the computer's RNG seed.
pub const RNG_SEED_ENV: &str = "TICTACTOE_RNG_SEED";

/// Settings for one game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Initial board seed (9 characters of `X`, `O`, `_`).
    cells: Option<String>,

    /// Difficulty label shown when the computer moves.
    difficulty: Difficulty,

    /// Seed for the computer's random moves.
    rng_seed: Option<u64>,
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

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the session config from the process environment and the CLI.
    ///
    /// `TICTACTOE_CONFIG` names an optional TOML file, `TICTACTOE_RNG_SEED`
    /// overrides its `rng_seed`, and the `CELLS` argument overrides `cells`.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self::from_env(|key| std::env::var(key).ok())?.with_overrides(cli))
    }

    /// Builds the config from environment values supplied by `lookup`.
    #[instrument(skip(lookup))]
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(seed) = lookup(RNG_SEED_ENV) {
            let seed = seed.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid {}={:?}: {}", RNG_SEED_ENV, seed, e))
            })?;
            debug!(seed, "RNG seed taken from environment");
            config.rng_seed = Some(seed);
        }
        Ok(config)
    }

    /// Applies command-line values over this config.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(cells) = &cli.cells {
            self.cells = Some(cells.clone());
        }
        self
    }

    /// Fixes the computer's RNG seed.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
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
