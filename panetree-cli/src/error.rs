//! CLI error types and exit codes.

use std::path::PathBuf;

use panetree_core::split::{LayoutError, PersistError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O, or unreadable layout files
    pub const GENERAL_ERROR: i32 = 1;
    /// The layout rejected the edit (unknown pane, last pane, ...)
    pub const EDIT_REJECTED: i32 = 2;
    /// The layout file parsed but is structurally invalid
    pub const INVALID_LAYOUT: i32 = 3;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Layout edit rejected
    #[error("Edit rejected: {0}")]
    Edit(#[from] LayoutError),

    /// Layout file could not be read or written
    #[error("Layout file error: {0}")]
    Persist(PersistError),

    /// Layout file failed validation
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Legacy tab list could not be read
    #[error("Invalid legacy tab file: {0}")]
    Legacy(String),

    /// Refusing to overwrite a file
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PersistError> for CliError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::InvalidTree(reason) => Self::InvalidLayout(reason),
            other => Self::Persist(other),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, IO, unreadable file)
    /// - 2: Edit rejected by the layout
    /// - 3: Structurally invalid layout
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Edit(_) => exit_codes::EDIT_REJECTED,
            Self::InvalidLayout(_) => exit_codes::INVALID_LAYOUT,
            Self::Config(_)
            | Self::Persist(_)
            | Self::Legacy(_)
            | Self::AlreadyExists(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
