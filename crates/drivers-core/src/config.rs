//! Configuration loading
//!
//! Settings come from three layers, later layers winning:
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables (`DRIVERS_CONNECTION_STRING`, `DRIVERS_LOG_PROFILE`)
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ```toml
//! [database]
//! connection_string = "Data Source=drivers.db"
//!
//! [logging]
//! profile = "production"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::{ExError, ExErrorKind, Result};
use crate::logging_facility::Profile;

pub const ENV_CONNECTION_STRING: &str = "DRIVERS_CONNECTION_STRING";
pub const ENV_LOG_PROFILE: &str = "DRIVERS_LOG_PROFILE";

pub const DEFAULT_CONNECTION_STRING: &str = "Data Source=drivers.db";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// `[database]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Bare SQLite path or `Data Source=<path>;...`
    pub connection_string: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub profile: Profile,
}

impl Settings {
    /// Load settings from an optional file, then apply environment overrides
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Serialization` if it is not valid
    /// TOML, `InvalidInput` if an environment override is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse settings from a TOML file
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Serialization` if it is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("Cannot read {}: {}", path.display(), e))
                .with_cause(e)
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    /// `Serialization` if the text is not valid TOML for these settings.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("load_config")
                .with_message(format!("Invalid configuration: {}", e))
                .with_cause(e)
        })
    }

    /// Apply overrides looked up by environment variable name
    ///
    /// # Errors
    /// `InvalidInput` if the profile override is not a known profile.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(conn) = lookup(ENV_CONNECTION_STRING).filter(|v| !v.trim().is_empty()) {
            self.database.connection_string = conn;
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE) {
            self.logging.profile = profile.parse()?;
        }
        Ok(self)
    }
}
