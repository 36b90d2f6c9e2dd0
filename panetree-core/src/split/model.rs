//! Stateful layout model for editor-level pane management
//!
//! This module provides the `PaneLayoutModel` struct which owns the current
//! tree snapshot, the focused pane and an ID generator. It wraps the pure
//! functions in [`super::ops`] and reports the reasons the engine would
//! otherwise swallow as silent no-ops.
//!
//! # Example
//!
//! ```
//! use panetree_core::split::{LayoutError, PaneLayoutModel};
//!
//! let mut model = PaneLayoutModel::new();
//! model.open_tab("main.rs");
//! model.open_tab("lib.rs");
//!
//! // Split the first pane, moving lib.rs into the new pane
//! let first = model.focused_pane().clone();
//! let second = model.split(first.as_str(), Some("lib.rs")).unwrap();
//! assert_eq!(model.pane_count(), 2);
//! assert_eq!(model.focused_pane(), &second);
//!
//! // Moving the only tab back collapses the emptied pane
//! model.move_tab(second.as_str(), first.as_str(), "lib.rs").unwrap();
//! assert_eq!(model.pane_count(), 1);
//!
//! // The last pane cannot be closed
//! assert_eq!(model.close_pane(first.as_str()), Err(LayoutError::CannotRemoveLastPane));
//! ```

use std::sync::Arc;

use super::error::LayoutError;
use super::ids::IdGenerator;
use super::layout::{LegacyTabs, SplitLayout, migrate_from_tabs};
use super::ops::{self, SplitIds};
use super::tabs;
use super::tree::{MAX_DEPTH, PaneLeaf, PaneNode};
use super::types::NodeId;
use crate::tracing::span_names;

/// Owns one pane layout and keeps its focus pointing at a live pane.
///
/// Every edit swaps in a new root snapshot; snapshots handed out through
/// [`PaneLayoutModel::root`] or [`PaneLayoutModel::layout`] stay valid and
/// unchanged.
///
/// # Focus Tracking
///
/// Focus always names a leaf of the current tree. Closing the focused pane
/// moves focus to the first remaining pane; splitting focuses the new
/// pane; moving a tab focuses its destination.
#[derive(Debug)]
pub struct PaneLayoutModel {
    /// Current tree snapshot.
    root: Arc<PaneNode>,
    /// Focused leaf.
    focused_pane: NodeId,
    /// Source of IDs for new splits and panes.
    ids: IdGenerator,
}

impl Default for PaneLayoutModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PaneLayoutModel {
    /// Creates a model with a single empty pane that has focus.
    #[must_use]
    pub fn new() -> Self {
        Self::from_layout(SplitLayout::default())
    }

    /// Adopts a persisted layout.
    ///
    /// A missing or stale focused pane is replaced by the first pane. New
    /// IDs continue after the highest `pane-<n>` already in the tree.
    #[must_use]
    pub fn from_layout(layout: SplitLayout) -> Self {
        let SplitLayout { root, focused_pane } = layout;
        let focused_pane = focused_pane
            .filter(|id| root.contains_pane(id.as_str()))
            .unwrap_or_else(|| root.first_leaf().id.clone());
        let ids = IdGenerator::seeded_from(&root);
        Self {
            root,
            focused_pane,
            ids,
        }
    }

    /// Creates a model from a legacy flat tab list.
    #[must_use]
    pub fn from_legacy(legacy: &LegacyTabs) -> Self {
        Self::from_layout(migrate_from_tabs(legacy))
    }

    /// Returns the current snapshot with focus filled in.
    #[must_use]
    pub fn layout(&self) -> SplitLayout {
        SplitLayout {
            root: Arc::clone(&self.root),
            focused_pane: Some(self.focused_pane.clone()),
        }
    }

    /// Returns the current tree root.
    #[must_use]
    pub const fn root(&self) -> &Arc<PaneNode> {
        &self.root
    }

    /// Returns the focused pane ID.
    #[must_use]
    pub const fn focused_pane(&self) -> &NodeId {
        &self.focused_pane
    }

    /// Returns all pane IDs, left to right.
    #[must_use]
    pub fn pane_ids(&self) -> Vec<NodeId> {
        self.root.collect_pane_ids()
    }

    /// Returns the number of panes.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.root.count_leaves()
    }

    /// Finds a pane by ID.
    #[must_use]
    pub fn find_pane(&self, pane_id: &str) -> Option<&PaneLeaf> {
        self.root.find_pane(pane_id)
    }

    /// Sets focus to a pane.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if the pane doesn't exist.
    pub fn set_focus(&mut self, pane_id: &str) -> Result<(), LayoutError> {
        self.require_pane(pane_id)?;
        self.focused_pane = NodeId::from(pane_id);
        Ok(())
    }

    /// Splits a pane and focuses the new second pane.
    ///
    /// With `tab_to_move`, that tab becomes the only tab of the new pane;
    /// a tab the pane does not hold is still opened there.
    ///
    /// # Returns
    ///
    /// Returns the ID of the newly created pane.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PaneNotFound` if the pane doesn't exist
    /// - `LayoutError::TooDeep` if the pane already sits [`MAX_DEPTH`]
    ///   splits deep
    pub fn split(&mut self, pane_id: &str, tab_to_move: Option<&str>) -> Result<NodeId, LayoutError> {
        let _span = crate::trace_operation_debug!(span_names::PANE_SPLIT, pane = pane_id).entered();
        self.require_pane(pane_id)?;
        if self.root.pane_depth(pane_id).is_some_and(|depth| depth >= MAX_DEPTH) {
            return Err(LayoutError::TooDeep {
                pane: NodeId::from(pane_id),
                limit: MAX_DEPTH,
            });
        }

        let pane = self.ids.next_id();
        let split = self.ids.next_id();
        let ids = SplitIds::new(split.clone(), pane.clone());
        self.root = ops::split_pane_with(&self.root, pane_id, tab_to_move, ids);
        self.focused_pane = pane.clone();

        tracing::debug!(
            new_pane = %pane,
            split = %split,
            moved_tab = tab_to_move,
            panes = self.pane_count(),
            "Split pane"
        );
        Ok(pane)
    }

    /// Closes a pane and collapses its parent split.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PaneNotFound` if the pane doesn't exist
    /// - `LayoutError::CannotRemoveLastPane` if this is the only pane
    pub fn close_pane(&mut self, pane_id: &str) -> Result<(), LayoutError> {
        let _span = crate::trace_operation_debug!(span_names::PANE_CLOSE, pane = pane_id).entered();
        self.require_pane(pane_id)?;
        let root = ops::remove_pane(&self.root, pane_id).ok_or(LayoutError::CannotRemoveLastPane)?;
        self.replace_root(root);
        tracing::debug!(panes = self.pane_count(), focus = %self.focused_pane, "Closed pane");
        Ok(())
    }

    /// Resizes a split.
    ///
    /// The ratio is clamped to `[MIN_RATIO, MAX_RATIO]`. A NaN ratio leaves
    /// the split unchanged.
    ///
    /// # Returns
    ///
    /// Returns the ratio the split ends up with.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SplitNotFound` if no split has that ID.
    pub fn resize(&mut self, split_id: &str, ratio: f64) -> Result<f64, LayoutError> {
        if self.root.find_split(split_id).is_none() {
            return Err(LayoutError::SplitNotFound(NodeId::from(split_id)));
        }
        self.root = ops::update_ratio(&self.root, split_id, ratio);
        let applied = self
            .root
            .find_split(split_id)
            .map_or(ratio, |split| split.ratio);
        tracing::debug!(split = split_id, requested = ratio, applied, "Resized split");
        Ok(applied)
    }

    /// Moves a tab between panes and focuses the destination.
    ///
    /// A source pane left without tabs is closed.
    ///
    /// # Errors
    ///
    /// - `LayoutError::SamePane` if source and destination are equal
    /// - `LayoutError::PaneNotFound` if either pane doesn't exist
    /// - `LayoutError::TabNotFound` if the source doesn't hold the tab
    pub fn move_tab(&mut self, from_pane_id: &str, to_pane_id: &str, tab: &str) -> Result<(), LayoutError> {
        let _span = crate::trace_operation_debug!(
            span_names::TAB_MOVE,
            from = from_pane_id,
            to = to_pane_id,
            tab = tab
        )
        .entered();
        if from_pane_id == to_pane_id {
            return Err(LayoutError::SamePane(NodeId::from(from_pane_id)));
        }
        self.require_tab(from_pane_id, tab)?;
        self.require_pane(to_pane_id)?;

        self.root = ops::move_tab(&self.root, from_pane_id, to_pane_id, tab);
        self.focused_pane = NodeId::from(to_pane_id);
        tracing::debug!(
            collapsed = !self.root.contains_pane(from_pane_id),
            panes = self.pane_count(),
            "Moved tab"
        );
        Ok(())
    }

    /// Opens a tab in the focused pane and makes it active.
    ///
    /// # Returns
    ///
    /// Returns the pane the tab was opened in.
    pub fn open_tab(&mut self, tab: &str) -> NodeId {
        let pane_id = self.focused_pane.clone();
        match self.edit_leaf(pane_id.as_str(), |leaf| tabs::open_tab(leaf, tab)) {
            Ok(changed) => tracing::debug!(pane = %pane_id, tab, changed, "Opened tab"),
            Err(error) => tracing::warn!(%error, "Focused pane missing"),
        }
        pane_id
    }

    /// Opens a tab in a specific pane, makes it active and focuses the pane.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if the pane doesn't exist.
    pub fn open_tab_in(&mut self, pane_id: &str, tab: &str) -> Result<bool, LayoutError> {
        let changed = self.edit_leaf(pane_id, |leaf| tabs::open_tab(leaf, tab))?;
        self.focused_pane = NodeId::from(pane_id);
        tracing::debug!(pane = pane_id, tab, changed, "Opened tab");
        Ok(changed)
    }

    /// Closes a tab. A pane left without tabs is closed too unless it is
    /// the last pane.
    ///
    /// # Returns
    ///
    /// Returns true if the pane was closed along with the tab.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PaneNotFound` if the pane doesn't exist
    /// - `LayoutError::TabNotFound` if the pane doesn't hold the tab
    pub fn close_tab(&mut self, pane_id: &str, tab: &str) -> Result<bool, LayoutError> {
        self.require_tab(pane_id, tab)?;
        self.edit_leaf(pane_id, |leaf| tabs::close_tab(leaf, tab))?;

        let emptied = self.find_pane(pane_id).is_some_and(PaneLeaf::is_empty);
        let collapsed = emptied && self.pane_count() > 1;
        if collapsed && let Some(root) = ops::remove_pane(&self.root, pane_id) {
            self.replace_root(root);
        }
        tracing::debug!(pane = pane_id, tab, collapsed, "Closed tab");
        Ok(collapsed)
    }

    /// Selects the active tab of a pane.
    ///
    /// # Returns
    ///
    /// Returns false if the tab was already active.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PaneNotFound` if the pane doesn't exist
    /// - `LayoutError::TabNotFound` if the pane doesn't hold the tab
    pub fn set_active_tab(&mut self, pane_id: &str, tab: &str) -> Result<bool, LayoutError> {
        self.require_tab(pane_id, tab)?;
        self.edit_leaf(pane_id, |leaf| tabs::set_active(leaf, Some(tab)))
    }

    /// Moves a tab to a new position within its pane.
    ///
    /// # Returns
    ///
    /// Returns false if the tab was already at that position.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PaneNotFound` if the pane doesn't exist
    /// - `LayoutError::TabNotFound` if the pane doesn't hold the tab
    pub fn reorder_tab(&mut self, pane_id: &str, tab: &str, to_index: usize) -> Result<bool, LayoutError> {
        self.require_tab(pane_id, tab)?;
        self.edit_leaf(pane_id, |leaf| tabs::reorder_tab(leaf, tab, to_index))
    }

    fn require_pane(&self, pane_id: &str) -> Result<&PaneLeaf, LayoutError> {
        self.find_pane(pane_id)
            .ok_or_else(|| LayoutError::PaneNotFound(NodeId::from(pane_id)))
    }

    fn require_tab(&self, pane_id: &str, tab: &str) -> Result<&PaneLeaf, LayoutError> {
        let leaf = self.require_pane(pane_id)?;
        if leaf.contains_tab(tab) {
            Ok(leaf)
        } else {
            Err(LayoutError::TabNotFound {
                pane: leaf.id.clone(),
                tab: tab.to_string(),
            })
        }
    }

    /// Applies a leaf edit, keeping the old snapshot when the edit changes
    /// nothing.
    fn edit_leaf<F>(&mut self, pane_id: &str, transform: F) -> Result<bool, LayoutError>
    where
        F: FnOnce(&PaneLeaf) -> PaneLeaf,
    {
        let leaf = self.require_pane(pane_id)?;
        let next = transform(leaf);
        if next == *leaf {
            return Ok(false);
        }
        self.root = ops::update_leaf(&self.root, pane_id, |_| next.clone());
        Ok(true)
    }

    /// Installs a root that lost panes and repairs focus.
    fn replace_root(&mut self, root: Arc<PaneNode>) {
        self.root = root;
        if !self.root.contains_pane(self.focused_pane.as_str()) {
            self.focused_pane = self.root.first_leaf().id.clone();
        }
    }
}
