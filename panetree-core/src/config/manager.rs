//! Loading and saving `config.toml`

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::AppSettings;
use crate::tracing::span_names;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Name of the application directory under the platform config root.
pub const APP_DIR: &str = "panetree";

/// Errors that can occur while reading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid settings TOML
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Locates and persists [`AppSettings`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `<platform config dir>/panetree`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no config
    /// directory.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR);
        Ok(Self { config_dir })
    }

    /// Uses an explicit directory.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of `config.toml`.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> Result<AppSettings, ConfigError> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD).entered();
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(AppSettings::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(settings)
    }

    /// Saves settings, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), ConfigError> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_SAVE).entered();
        let contents = toml::to_string_pretty(settings)?;

        std::fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;
        let path = self.settings_path();
        std::fs::write(&path, contents).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
