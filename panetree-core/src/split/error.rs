//! Error types for layout operations
//!
//! The pure engine in [`super::ops`] never fails; it signals "nothing to do"
//! by returning its input. These errors belong to the stateful
//! [`super::PaneLayoutModel`] and to layout persistence, which turn those
//! silent no-ops into reasons a caller can report.

use std::path::PathBuf;

use super::types::NodeId;

/// Errors that can occur during layout model operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The specified pane was not found.
    #[error("pane not found: {0}")]
    PaneNotFound(NodeId),

    /// The specified split was not found.
    #[error("split not found: {0}")]
    SplitNotFound(NodeId),

    /// The tab is not open in the given pane.
    #[error("tab {tab} not found in pane {pane}")]
    TabNotFound {
        /// Pane that was searched.
        pane: NodeId,
        /// Tab that was requested.
        tab: String,
    },

    /// Source and destination of a tab move are the same pane.
    #[error("cannot move a tab onto its own pane: {0}")]
    SamePane(NodeId),

    /// Cannot remove the last pane in a layout.
    #[error("cannot remove the last pane")]
    CannotRemoveLastPane,

    /// Splitting the pane would nest splits deeper than the limit.
    #[error("cannot split {pane}: layouts nest at most {limit} splits deep")]
    TooDeep {
        /// Pane that was to be split.
        pane: NodeId,
        /// Maximum split depth.
        limit: usize,
    },
}

/// Errors that can occur while saving or loading a layout.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(serde_json::Error),

    /// The layout parsed but failed structural validation.
    #[error("invalid pane tree: {0}")]
    InvalidTree(String),
}
