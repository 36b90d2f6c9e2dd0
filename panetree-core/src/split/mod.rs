//! Pane split-tree engine
//!
//! This module provides the data model and transformations for a workspace
//! that is recursively divided into resizable panes, each holding an
//! ordered list of tabs.
//!
//! # Architecture
//!
//! - **Persistent tree**: nodes are immutable and children live behind
//!   `Arc`, so each edit shares untouched subtrees with the previous tree
//! - **Identity no-ops**: an edit that finds nothing to do returns the same
//!   `Arc`, detectable with `Arc::ptr_eq`
//! - **Auto-collapse**: removing one child of a split replaces the split by
//!   the surviving child
//! - **Stateful facade**: `PaneLayoutModel` turns silent no-ops into
//!   `LayoutError`s and tracks focus
//!
//! # Module Structure
//!
//! - `types` - Identifier newtypes (`NodeId`, `TabId`) and `SplitDirection`
//! - `tree` - Tree structure (`PaneNode`, `PaneLeaf`, `PaneSplit`) and queries
//! - `ids` - `pane-<n>` ID generation (`IdGenerator`)
//! - `ops` - Pure transformations (`split_pane`, `remove_pane`, `move_tab`, ...)
//! - `tabs` - Per-pane tab list edits
//! - `validate` - Structural validation
//! - `layout` - `SplitLayout`, legacy migration and JSON persistence
//! - `model` - Stateful layout model (`PaneLayoutModel`)
//! - `error` - Error types (`LayoutError`, `PersistError`)

mod error;
mod ids;
mod layout;
mod model;
mod ops;
pub mod tabs;
mod tree;
mod types;
mod validate;

pub use error::{LayoutError, PersistError};
pub use ids::{ID_PREFIX, IdGenerator, generate_id, global_ids, reset_id_counter};
pub use layout::{LEGACY_PANE_ID, LegacyTabs, SplitLayout, migrate_from_tabs};
pub use model::PaneLayoutModel;
pub use ops::{
    SplitIds, clamp_ratio, move_tab, remove_pane, split_pane, split_pane_with, update_leaf,
    update_ratio,
};
pub use tree::{
    DEFAULT_RATIO, MAX_DEPTH, MAX_RATIO, MAX_VALID_RATIO, MIN_RATIO, MIN_VALID_RATIO, PaneLeaf,
    PaneNode, PaneSplit,
};
pub use types::{NodeId, SplitDirection, TabId};
pub use validate::{validate_tree, validate_value};
