//! Application settings stored in `config.toml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level settings file.
///
/// Every section and field has a default, so a partial or empty file is
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Logging settings
    pub logging: LoggingSettings,
    /// Layout file handling
    pub layout: LayoutSettings,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Base level: error, warn, info, debug or trace
    pub level: String,
    /// Raw `EnvFilter` directive; overrides `level` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Log file; logs go to stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::Warn.to_string(),
            filter: None,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Parses `level`, falling back to warn for unknown names.
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.level.parse().unwrap_or_default()
    }

    /// Builds a tracing configuration, raising the level by `verbosity`.
    ///
    /// From `-vv` on, events also carry thread IDs.
    #[must_use]
    pub fn to_tracing_config(&self, verbosity: u8) -> TracingConfig {
        let output = self
            .file
            .clone()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
        let base = if verbosity >= 2 {
            TracingConfig::development()
        } else {
            TracingConfig::production()
        };
        let mut config = base
            .with_level(self.tracing_level().raised(verbosity))
            .with_output(output);
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter.clone());
        }
        config
    }
}

/// `[layout]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Write layout files as indented JSON
    pub pretty: bool,
    /// Reject layouts whose split ratios fall outside `[0, 1]` on load
    pub validate_on_load: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            validate_on_load: true,
        }
    }
}
