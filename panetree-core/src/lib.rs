//! `panetree` Core Library
//!
//! This crate provides the pane split-tree engine: a persistent binary tree
//! describing a workspace recursively divided into resizable panes, each
//! holding an ordered list of tabs, plus the pure edits that transform one
//! tree into the next.
//!
//! # Crate Structure
//!
//! - [`split`] - Tree model, pure edits, validation, layout persistence and
//!   the stateful `PaneLayoutModel`
//! - [`config`] - `config.toml` settings and persistence
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod split;
pub mod tracing;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::{AppSettings, ConfigError, ConfigManager};
pub use split::{
    LayoutError, NodeId, PaneLayoutModel, PaneLeaf, PaneNode, PaneSplit, PersistError,
    SplitLayout, TabId,
};
pub use tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
