//! Root-level layout aggregate and its JSON persistence
//!
//! A [`SplitLayout`] is what gets written to disk: the tree root plus the
//! advisory focused pane. The file format is plain JSON with camelCase
//! keys, so a layout saved here reads back in any consumer that speaks the
//! same `{"type": "leaf" | "split", ...}` node shape.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::PersistError;
use super::tree::{MAX_DEPTH, PaneLeaf, PaneNode};
use super::types::{NodeId, TabId};
use super::validate::validate_tree;
use crate::tracing::span_names;

/// ID given to the single pane created by [`migrate_from_tabs`].
pub const LEGACY_PANE_ID: &str = "pane-0";

/// A pane tree together with the pane that has focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLayout {
    /// Root of the pane tree.
    pub root: Arc<PaneNode>,
    /// Focused leaf. Not checked against the tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_pane: Option<NodeId>,
}

/// The flat "open tabs plus one active tab" state that predates split
/// layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTabs {
    /// Open tabs in display order.
    pub all: Vec<TabId>,
    /// Selected tab.
    #[serde(default)]
    pub active: Option<TabId>,
}

/// Converts a legacy flat tab list into a single-pane layout.
///
/// The pane is always [`LEGACY_PANE_ID`]. Tabs are copied in order and
/// `active` is carried over as is. No pane is marked focused.
#[must_use]
pub fn migrate_from_tabs(legacy: &LegacyTabs) -> SplitLayout {
    let leaf = PaneLeaf {
        id: NodeId::from(LEGACY_PANE_ID),
        tabs: legacy.all.clone(),
        active: legacy.active.clone(),
    };
    SplitLayout::new(leaf.into_node())
}

impl SplitLayout {
    /// Creates a layout with no focused pane.
    #[must_use]
    pub const fn new(root: Arc<PaneNode>) -> Self {
        Self {
            root,
            focused_pane: None,
        }
    }

    /// Sets the focused pane.
    #[must_use]
    pub fn with_focus(mut self, pane_id: impl Into<NodeId>) -> Self {
        self.focused_pane = Some(pane_id.into());
        self
    }

    /// Returns true if the tree passes [`validate_tree`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_tree(&self.root)
    }

    /// Serializes the layout to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the layout to single-line JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a layout and validates its tree.
    ///
    /// # Errors
    /// Returns `Deserialization` for malformed JSON and `InvalidTree` when a
    /// split ratio lies outside `[0, 1]`.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let layout = Self::from_json_unchecked(json)?;
        if !layout.is_valid() {
            return Err(PersistError::InvalidTree(
                "split ratio outside [0, 1]".to_string(),
            ));
        }
        Ok(layout)
    }

    /// Parses a layout without running [`validate_tree`].
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a layout
    pub fn from_json_unchecked(json: &str) -> Result<Self, PersistError> {
        serde_json::from_str(json).map_err(PersistError::Deserialization)
    }

    /// Saves the layout to a file, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns `InvalidTree` for a tree deeper than [`MAX_DEPTH`], which
    /// could not be read back, and an error if serialization or writing
    /// fails
    pub fn save_to_file(&self, path: &Path, pretty: bool) -> Result<(), PersistError> {
        let _span =
            crate::trace_operation_debug!(span_names::LAYOUT_SAVE, path = %path.display()).entered();
        let depth = self.root.depth();
        if depth > MAX_DEPTH {
            return Err(PersistError::InvalidTree(format!(
                "tree is {depth} splits deep, at most {MAX_DEPTH} can be reloaded"
            )));
        }
        let json = if pretty {
            self.to_json()
        } else {
            self.to_json_compact()
        }
        .map_err(PersistError::Serialization)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, json).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(panes = self.root.count_leaves(), "Saved layout");
        Ok(())
    }

    /// Loads and validates a layout from a file.
    ///
    /// # Errors
    /// Returns an error if reading, parsing or validation fails
    pub fn load_from_file(path: &Path) -> Result<Self, PersistError> {
        Self::load(path, true)
    }

    /// Loads a layout, running [`validate_tree`] only when `validate` is set.
    ///
    /// # Errors
    /// Returns an error if reading or parsing fails, or if validation was
    /// requested and fails
    pub fn load(path: &Path, validate: bool) -> Result<Self, PersistError> {
        let _span =
            crate::trace_operation_debug!(span_names::LAYOUT_LOAD, path = %path.display()).entered();
        let json = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = if validate {
            Self::from_json(&json)
        } else {
            Self::from_json_unchecked(&json)
        };
        match &layout {
            Ok(layout) => {
                tracing::debug!(panes = layout.root.count_leaves(), "Loaded layout");
            }
            Err(error) => tracing::warn!(path = %path.display(), %error, "Failed to load layout"),
        }
        layout
    }
}

impl Default for SplitLayout {
    /// A single empty [`LEGACY_PANE_ID`] pane.
    fn default() -> Self {
        migrate_from_tabs(&LegacyTabs::default())
    }
}
