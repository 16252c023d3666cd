//! Puzzle configuration: the secret word, its puzzle number, and the attempt
//! budget.
//!
//! Configuration is an explicit value handed to the session, never ambient
//! global state, so independent sessions (and tests) cannot contaminate each
//! other.

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default attempt budget, one fewer win than the board has rows.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// First day of puzzle #0; the daily puzzle number counts days since then.
const PUZZLE_EPOCH: (i32, u32, u32) = (2022, 1, 3);

/// Configuration errors.
#[derive(Debug, Clone, Display, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[display("failed to read config file: {_0}")]
    Io(#[error(not(source))] String),
    /// Config file could not be parsed as TOML.
    #[display("failed to parse config: {_0}")]
    Parse(#[error(not(source))] String),
    /// Secret word is empty or contains non-lowercase-ASCII letters.
    #[display("invalid secret word {word:?}: must be lowercase ASCII letters")]
    InvalidSecret {
        /// The rejected word.
        word: String,
    },
    /// Attempt budget of zero makes every session lost before it starts.
    #[display("max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Immutable configuration for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Puzzle number; a change invalidates persisted history.
    #[serde(default = "daily_puzzle_id")]
    puzzle_id: u32,
    /// The word to be guessed, lowercase ASCII.
    secret: String,
    /// Maximum number of guesses before the session is lost.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

/// Puzzle number for today's date.
fn daily_puzzle_id() -> u32 {
    puzzle_id_for(chrono::Utc::now().date_naive())
}

/// Puzzle number for an arbitrary date. Dates before the epoch clamp to 0.
pub fn puzzle_id_for(date: NaiveDate) -> u32 {
    let (y, m, d) = PUZZLE_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).expect("valid epoch date");
    (date - epoch).num_days().max(0) as u32
}

impl PuzzleConfig {
    /// Creates a configuration after validating the secret and budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSecret`] unless the secret is non-empty
    /// lowercase ASCII, and [`ConfigError::ZeroAttempts`] for a zero budget.
    #[instrument(skip(secret))]
    pub fn new(
        puzzle_id: u32,
        secret: impl Into<String>,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidSecret { word: secret });
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        debug!(puzzle_id, word_length = secret.len(), max_attempts, "Puzzle configured");
        Ok(Self {
            puzzle_id,
            secret,
            max_attempts,
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable, unparsable, or
    /// fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading puzzle config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        let raw: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let config = Self::new(raw.puzzle_id, raw.secret, raw.max_attempts)?;

        info!(puzzle_id = config.puzzle_id, "Puzzle config loaded");
        Ok(config)
    }

    /// Builds configuration from the environment: the `WORD` variable holds
    /// the secret (falling back to `default_secret`), and the puzzle number
    /// is today's.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSecret`] when `WORD` fails validation.
    #[instrument(skip(default_secret))]
    pub fn from_env(default_secret: &str) -> Result<Self, ConfigError> {
        let secret = std::env::var("WORD").unwrap_or_else(|_| default_secret.to_string());
        Self::new(daily_puzzle_id(), secret, DEFAULT_MAX_ATTEMPTS)
    }

    /// Length of the secret word in characters.
    pub fn word_length(&self) -> usize {
        self.secret.chars().count()
    }
}
