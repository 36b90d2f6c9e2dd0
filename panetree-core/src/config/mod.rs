//! Configuration management for `panetree`
//!
//! This module provides the `ConfigManager` for loading and saving
//! `config.toml`.

mod manager;
pub mod settings;

pub use manager::{APP_DIR, ConfigError, ConfigManager, SETTINGS_FILE};
pub use settings::{AppSettings, LayoutSettings, LoggingSettings};
