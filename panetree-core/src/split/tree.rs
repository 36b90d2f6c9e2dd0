//! Pane tree structure for split layouts
//!
//! This module provides the immutable binary tree used to represent a
//! recursively split workspace. Each node is either a leaf pane (an
//! ordered tab list with an optional active tab) or a split node holding
//! exactly two children.
//!
//! # Tree Structure
//!
//! ```text
//! Split(pane-2, 0.5)
//! ├── Leaf(pane-0, [file://a.rs, session-1], active = session-1)
//! └── Split(pane-4, 0.3)
//!     ├── Leaf(pane-1, [file://b.rs])
//!     └── Leaf(pane-3, [])
//! ```
//!
//! Children are held behind [`Arc`], so a transformed tree shares every
//! untouched subtree with its predecessor. The edit functions in
//! [`super::ops`] never mutate a node after construction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::types::{NodeId, SplitDirection, TabId};

/// Ratio given to the first child of a freshly created split.
pub const DEFAULT_RATIO: f64 = 0.5;

/// Smallest ratio a resize can produce.
pub const MIN_RATIO: f64 = 0.1;

/// Largest ratio a resize can produce.
pub const MAX_RATIO: f64 = 0.9;

/// Lower bound accepted by structural validation.
pub const MIN_VALID_RATIO: f64 = 0.0;

/// Upper bound accepted by structural validation.
pub const MAX_VALID_RATIO: f64 = 1.0;

/// Deepest nesting of splits a layout may reach.
///
/// Each split adds two levels of JSON nesting, and `serde_json` refuses to
/// read past 128, so deeper trees could be saved but never loaded again.
pub const MAX_DEPTH: usize = 48;

/// A node in the pane tree.
///
/// Serialized with a `type` tag so persisted layouts read as
/// `{"type": "leaf", ...}` or `{"type": "split", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaneNode {
    /// A visible pane with its own tab bar.
    Leaf(PaneLeaf),
    /// A binary division of space between two subtrees.
    Split(PaneSplit),
}

/// A leaf pane in the tree.
///
/// `active` is expected to name one of `tabs`. The engine keeps that true
/// on the paths it controls but does not reject leaves that violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneLeaf {
    /// Identity of the pane slot, independent of its content.
    pub id: NodeId,
    /// Open tabs in display order.
    pub tabs: Vec<TabId>,
    /// Currently selected tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<TabId>,
}

/// A split node containing two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneSplit {
    /// Identity of the split, used to target ratio updates.
    pub id: NodeId,
    /// Split axis.
    #[serde(default)]
    pub direction: SplitDirection,
    /// Fraction of space given to the first child.
    pub ratio: f64,
    /// First (left) and second (right) child.
    pub children: [Arc<PaneNode>; 2],
}

impl PaneLeaf {
    /// Creates an empty leaf with the given ID.
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            tabs: Vec::new(),
            active: None,
        }
    }

    /// Creates a leaf holding the given tabs, with no active tab.
    #[must_use]
    pub fn with_tabs<T: Into<TabId>>(
        id: impl Into<NodeId>,
        tabs: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            id: id.into(),
            tabs: tabs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Sets the active tab.
    #[must_use]
    pub fn with_active(mut self, tab: impl Into<TabId>) -> Self {
        self.active = Some(tab.into());
        self
    }

    /// Returns true if the leaf has no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns true if the leaf holds the given tab.
    #[must_use]
    pub fn contains_tab(&self, tab: &str) -> bool {
        self.tabs.iter().any(|t| t == tab)
    }

    /// Wraps the leaf into a shareable tree node.
    #[must_use]
    pub fn into_node(self) -> Arc<PaneNode> {
        Arc::new(PaneNode::Leaf(self))
    }
}

impl PaneSplit {
    /// Creates a split with the default ratio.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, first: Arc<PaneNode>, second: Arc<PaneNode>) -> Self {
        Self {
            id: id.into(),
            direction: SplitDirection::Horizontal,
            ratio: DEFAULT_RATIO,
            children: [first, second],
        }
    }

    /// Sets the ratio as given.
    ///
    /// The value is stored unclamped; [`super::validate::validate_tree`]
    /// reports ratios outside `[0, 1]`.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Returns the first (left) child.
    #[must_use]
    pub fn first(&self) -> &Arc<PaneNode> {
        &self.children[0]
    }

    /// Returns the second (right) child.
    #[must_use]
    pub fn second(&self) -> &Arc<PaneNode> {
        &self.children[1]
    }

    /// Wraps the split into a shareable tree node.
    #[must_use]
    pub fn into_node(self) -> Arc<PaneNode> {
        Arc::new(PaneNode::Split(self))
    }

    /// Returns a copy of this split with new children, keeping id,
    /// direction and ratio.
    pub(crate) fn with_children(&self, first: Arc<PaneNode>, second: Arc<PaneNode>) -> Self {
        Self {
            id: self.id.clone(),
            direction: self.direction,
            ratio: self.ratio,
            children: [first, second],
        }
    }
}

impl From<PaneLeaf> for PaneNode {
    fn from(leaf: PaneLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<PaneSplit> for PaneNode {
    fn from(split: PaneSplit) -> Self {
        Self::Split(split)
    }
}

impl PaneNode {
    /// Returns the ID of this node.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Split(split) => &split.id,
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this is a split node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the leaf if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&PaneLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    /// Returns the split if this is a split node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&PaneSplit> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Returns the number of leaf panes in the tree. Always at least 1.
    #[must_use]
    pub fn count_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(split) => split.first().count_leaves() + split.second().count_leaves(),
        }
    }

    /// Finds a leaf pane by its ID.
    ///
    /// Searches depth-first, first child before second.
    #[must_use]
    pub fn find_pane(&self, pane_id: &str) -> Option<&PaneLeaf> {
        match self {
            Self::Leaf(leaf) => (leaf.id == pane_id).then_some(leaf),
            Self::Split(split) => split
                .first()
                .find_pane(pane_id)
                .or_else(|| split.second().find_pane(pane_id)),
        }
    }

    /// Finds the split whose immediate children include a node with the
    /// given ID.
    ///
    /// Returns `None` when `id` names the root itself or is absent.
    #[must_use]
    pub fn find_parent(&self, id: &str) -> Option<&PaneSplit> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => {
                if split.children.iter().any(|child| child.id() == id) {
                    return Some(split);
                }
                split
                    .first()
                    .find_parent(id)
                    .or_else(|| split.second().find_parent(id))
            }
        }
    }

    /// Finds a split node by its ID.
    #[must_use]
    pub fn find_split(&self, split_id: &str) -> Option<&PaneSplit> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) if split.id == split_id => Some(split),
            Self::Split(split) => split
                .first()
                .find_split(split_id)
                .or_else(|| split.second().find_split(split_id)),
        }
    }

    /// Returns all leaf IDs, depth-first and left-to-right.
    #[must_use]
    pub fn collect_pane_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.push_pane_ids(&mut ids);
        ids
    }

    fn push_pane_ids(&self, ids: &mut Vec<NodeId>) {
        match self {
            Self::Leaf(leaf) => ids.push(leaf.id.clone()),
            Self::Split(split) => {
                split.first().push_pane_ids(ids);
                split.second().push_pane_ids(ids);
            }
        }
    }

    /// Returns true if the tree contains a leaf with the given ID.
    #[must_use]
    pub fn contains_pane(&self, pane_id: &str) -> bool {
        self.find_pane(pane_id).is_some()
    }

    /// Returns the leftmost leaf.
    #[must_use]
    pub fn first_leaf(&self) -> &PaneLeaf {
        match self {
            Self::Leaf(leaf) => leaf,
            Self::Split(split) => split.first().first_leaf(),
        }
    }

    /// Returns the depth of the tree.
    ///
    /// A single leaf has depth 0. Each level of splits adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(split) => 1 + split.first().depth().max(split.second().depth()),
        }
    }

    /// Returns the number of splits above the leaf `pane_id`.
    #[must_use]
    pub fn pane_depth(&self, pane_id: &str) -> Option<usize> {
        match self {
            Self::Leaf(leaf) => (leaf.id == pane_id).then_some(0),
            Self::Split(split) => split
                .first()
                .pane_depth(pane_id)
                .or_else(|| split.second().pane_depth(pane_id))
                .map(|depth| depth + 1),
        }
    }

    /// Returns the total number of tabs across all leaves.
    #[must_use]
    pub fn count_tabs(&self) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.tabs.len(),
            Self::Split(split) => split.first().count_tabs() + split.second().count_tabs(),
        }
    }

    /// Finds the first leaf (depth-first) holding the given tab.
    #[must_use]
    pub fn find_tab(&self, tab: &str) -> Option<&PaneLeaf> {
        match self {
            Self::Leaf(leaf) => leaf.contains_tab(tab).then_some(leaf),
            Self::Split(split) => split
                .first()
                .find_tab(tab)
                .or_else(|| split.second().find_tab(tab)),
        }
    }

    /// Returns every node ID in the tree, splits included, in pre-order.
    #[must_use]
    pub fn collect_node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.push_node_ids(&mut ids);
        ids
    }

    fn push_node_ids(&self, ids: &mut Vec<NodeId>) {
        ids.push(self.id().clone());
        if let Self::Split(split) = self {
            split.first().push_node_ids(ids);
            split.second().push_node_ids(ids);
        }
    }
}
