//! Configuration management for dialog-shell

mod keys;

pub use keys::{DialogCommand, KeyBindings, key_to_string};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::dialog::{DialogOptions, Presentation};
use crate::error::{ConfigError, Result};
use crate::paths;

/// Dialog defaults applied by callers that build dialogs from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogDefaults {
    /// Options shared by every dialog variant
    pub options: DialogOptions,
    /// Presentation for advanced dialogs
    pub presentation: Presentation,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default dialog options and presentation
    #[serde(default)]
    pub dialog: DialogDefaults,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,

    /// Event poll interval in milliseconds; also paces open animations
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

const fn default_tick_rate() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialog: DialogDefaults::default(),
            keys: KeyBindings::default(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Returns defaults when no config directory can be resolved or the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing an existing config file fails
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be resolved, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = self.to_json()?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render the configuration as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        paths::config_dir().map(|dir| dir.join("dialog-shell").join("config.json"))
    }
}
