//! Configuration file loading for the tracker.
//!
//! This module provides types and functions for loading the team name,
//! roster and export defaults from a TOML file.

use hoops_core::{Player, Roster, RosterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
///
/// This enum covers file I/O errors, TOML parsing errors, and roster
/// validation errors like duplicate player names.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured roster is invalid.
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),
}

/// Main tracker configuration structure.
///
/// Uses `tracker.toml` in the current directory by default. Every key is
/// optional; an empty `players` list selects the built-in roster.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrackerConfig {
    /// Team name shown in the JSON snapshot. Defaults to "Home".
    #[serde(default = "default_team")]
    pub team: String,
    /// Where `export` writes the CSV box score when no path is given.
    /// Defaults to "match_stats.csv".
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
    /// Roster in box-score order.
    #[serde(default)]
    pub players: Vec<Player>,
}

fn default_team() -> String {
    "Home".to_string()
}

fn default_export_path() -> PathBuf {
    PathBuf::from("match_stats.csv")
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            team: default_team(),
            export_path: default_export_path(),
            players: Vec::new(),
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from [`Self::config_path()`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("tracker.toml")
    }

    /// Builds the roster for this match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Roster`] if two configured players share a name
    /// or a name cannot be written as a single event token.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        if self.players.is_empty() {
            return Ok(Roster::builtin());
        }
        Ok(Roster::new(self.players.clone())?)
    }
}
