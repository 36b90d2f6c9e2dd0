//! Pure tree transformations
//!
//! Every function here takes a tree root and returns a tree root. The input
//! is never modified. When an edit has nothing to do (unknown ID, tab not
//! present, same source and destination) the very same [`Arc`] is handed
//! back, so callers detect "no change" with [`Arc::ptr_eq`]. Otherwise the
//! result is a new spine from the root down to the edited node, and every
//! subtree off that path is shared with the input.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use panetree_core::split::{IdGenerator, PaneLeaf, move_tab, split_pane};
//!
//! let ids = IdGenerator::new();
//! let root = PaneLeaf::with_tabs("pane-0", ["a.rs", "b.rs"]).with_active("a.rs").into_node();
//!
//! let split = split_pane(&root, "pane-0", Some("b.rs"), &ids);
//! assert_eq!(split.count_leaves(), 2);
//!
//! // Moving the last tab back collapses the emptied pane.
//! let merged = move_tab(&split, "pane-1", "pane-0", "b.rs");
//! assert!(merged.is_leaf());
//!
//! // Unknown panes leave the tree untouched.
//! assert!(Arc::ptr_eq(&move_tab(&merged, "pane-0", "nope", "a.rs"), &merged));
//! ```

use std::sync::Arc;

use super::ids::IdGenerator;
use super::tabs::close_tab;
use super::tree::{MAX_RATIO, MIN_RATIO, PaneLeaf, PaneNode, PaneSplit};
use super::types::{NodeId, TabId};

/// IDs for the two nodes created by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIds {
    /// ID of the new split node.
    pub split: NodeId,
    /// ID of the new (second) leaf.
    pub pane: NodeId,
}

impl SplitIds {
    /// Creates a pair of split IDs.
    #[must_use]
    pub fn new(split: impl Into<NodeId>, pane: impl Into<NodeId>) -> Self {
        Self {
            split: split.into(),
            pane: pane.into(),
        }
    }
}

/// Clamps a ratio to the operational `[MIN_RATIO, MAX_RATIO]` range.
#[must_use]
pub fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// Splits the leaf `pane_id` into two side-by-side leaves.
///
/// The original leaf keeps its ID and becomes the first child. Without
/// `tab_to_move` it keeps all tabs and the new second leaf starts empty.
/// With `tab_to_move`, that tab leaves the first child (its active tab
/// falling back to the first remaining one) and becomes the only, active
/// tab of the second. An empty `tab_to_move` counts as none.
///
/// IDs are drawn from `ids` only when the leaf is found: the new leaf's ID
/// first, then the split's.
pub fn split_pane(
    root: &Arc<PaneNode>,
    pane_id: &str,
    tab_to_move: Option<&str>,
    ids: &IdGenerator,
) -> Arc<PaneNode> {
    split_node(root, pane_id, tab_to_move, &mut || {
        let pane = ids.next_id();
        let split = ids.next_id();
        SplitIds { split, pane }
    })
}

/// Same as [`split_pane`] with caller-supplied IDs.
pub fn split_pane_with(
    root: &Arc<PaneNode>,
    pane_id: &str,
    tab_to_move: Option<&str>,
    ids: SplitIds,
) -> Arc<PaneNode> {
    split_node(root, pane_id, tab_to_move, &mut || ids.clone())
}

fn split_node(
    node: &Arc<PaneNode>,
    pane_id: &str,
    tab_to_move: Option<&str>,
    ids: &mut dyn FnMut() -> SplitIds,
) -> Arc<PaneNode> {
    match node.as_ref() {
        PaneNode::Leaf(leaf) if leaf.id == pane_id => split_leaf(leaf, tab_to_move, ids()),
        PaneNode::Leaf(_) => Arc::clone(node),
        PaneNode::Split(split) => {
            let first = split_node(split.first(), pane_id, tab_to_move, ids);
            let second = split_node(split.second(), pane_id, tab_to_move, ids);
            rebuild(node, split, first, second)
        }
    }
}

fn split_leaf(leaf: &PaneLeaf, tab_to_move: Option<&str>, ids: SplitIds) -> Arc<PaneNode> {
    let (first, second) = match tab_to_move.filter(|tab| !tab.is_empty()) {
        None => (leaf.clone(), PaneLeaf::new(ids.pane)),
        Some(tab) => (
            close_tab(leaf, tab),
            PaneLeaf::with_tabs(ids.pane, [tab]).with_active(tab),
        ),
    };
    PaneSplit::new(ids.split, first.into_node(), second.into_node()).into_node()
}

/// Removes a node and collapses its parent split into the surviving
/// sibling.
///
/// Returns `None` when `pane_id` is the root leaf itself: the tree would
/// have no panes left. The target is matched against the direct children
/// of each split, so naming a split ID removes that whole subtree.
#[must_use]
pub fn remove_pane(root: &Arc<PaneNode>, pane_id: &str) -> Option<Arc<PaneNode>> {
    match root.as_ref() {
        PaneNode::Leaf(leaf) => (leaf.id != pane_id).then(|| Arc::clone(root)),
        PaneNode::Split(split) => Some(remove_below(root, split, pane_id)),
    }
}

fn remove_below(node: &Arc<PaneNode>, split: &PaneSplit, pane_id: &str) -> Arc<PaneNode> {
    let [first, second] = &split.children;
    if first.id() == pane_id {
        return Arc::clone(second);
    }
    if second.id() == pane_id {
        return Arc::clone(first);
    }
    let first = prune(first, pane_id);
    let second = prune(second, pane_id);
    rebuild(node, split, first, second)
}

fn prune(node: &Arc<PaneNode>, pane_id: &str) -> Arc<PaneNode> {
    match node.as_ref() {
        PaneNode::Leaf(_) => Arc::clone(node),
        PaneNode::Split(split) => remove_below(node, split, pane_id),
    }
}

/// Sets the ratio of split `split_id` to `ratio` clamped into
/// `[MIN_RATIO, MAX_RATIO]`.
///
/// A NaN ratio is ignored and the input returned unchanged.
pub fn update_ratio(root: &Arc<PaneNode>, split_id: &str, ratio: f64) -> Arc<PaneNode> {
    if ratio.is_nan() {
        return Arc::clone(root);
    }
    set_ratio(root, split_id, clamp_ratio(ratio))
}

fn set_ratio(node: &Arc<PaneNode>, split_id: &str, ratio: f64) -> Arc<PaneNode> {
    match node.as_ref() {
        PaneNode::Leaf(_) => Arc::clone(node),
        PaneNode::Split(split) if split.id == split_id => PaneSplit {
            ratio,
            ..split.clone()
        }
        .into_node(),
        PaneNode::Split(split) => {
            let first = set_ratio(split.first(), split_id, ratio);
            let second = set_ratio(split.second(), split_id, ratio);
            rebuild(node, split, first, second)
        }
    }
}

/// Replaces the leaf `pane_id` with `transform(leaf)`.
///
/// Everything else is shared with the input. Returns the input unchanged
/// when no leaf has that ID.
pub fn update_leaf<F>(root: &Arc<PaneNode>, pane_id: &str, mut transform: F) -> Arc<PaneNode>
where
    F: FnMut(&PaneLeaf) -> PaneLeaf,
{
    map_leaf(root, pane_id, &mut transform)
}

fn map_leaf(
    node: &Arc<PaneNode>,
    pane_id: &str,
    transform: &mut dyn FnMut(&PaneLeaf) -> PaneLeaf,
) -> Arc<PaneNode> {
    match node.as_ref() {
        PaneNode::Leaf(leaf) if leaf.id == pane_id => transform(leaf).into_node(),
        PaneNode::Leaf(_) => Arc::clone(node),
        PaneNode::Split(split) => {
            let first = map_leaf(split.first(), pane_id, transform);
            let second = map_leaf(split.second(), pane_id, transform);
            rebuild(node, split, first, second)
        }
    }
}

/// Moves `tab` from pane `from_pane_id` to pane `to_pane_id`.
///
/// The tab is appended to the destination and becomes its active tab. If
/// it was active in the source, the source falls back to its first
/// remaining tab. A source left without tabs is collapsed out of the tree.
///
/// No-op when the panes are the same, either pane is missing, or the
/// source does not hold `tab`.
pub fn move_tab(
    root: &Arc<PaneNode>,
    from_pane_id: &str,
    to_pane_id: &str,
    tab: &str,
) -> Arc<PaneNode> {
    if from_pane_id == to_pane_id {
        return Arc::clone(root);
    }
    let Some(from) = root.find_pane(from_pane_id) else {
        return Arc::clone(root);
    };
    if !root.contains_pane(to_pane_id) || !from.contains_tab(tab) {
        return Arc::clone(root);
    }

    let moved = TabId::from(tab);
    let result = update_leaf(root, from_pane_id, |leaf| close_tab(leaf, tab));
    let result = update_leaf(&result, to_pane_id, |leaf| {
        let mut tabs = leaf.tabs.clone();
        tabs.push(moved.clone());
        PaneLeaf {
            id: leaf.id.clone(),
            tabs,
            active: Some(moved.clone()),
        }
    });

    let emptied = result
        .find_pane(from_pane_id)
        .is_some_and(PaneLeaf::is_empty);
    if emptied {
        if let Some(collapsed) = remove_pane(&result, from_pane_id) {
            return collapsed;
        }
    }
    result
}

/// Reuses `node` when neither child changed, otherwise builds a new split
/// with the same ID, direction and ratio.
fn rebuild(
    node: &Arc<PaneNode>,
    split: &PaneSplit,
    first: Arc<PaneNode>,
    second: Arc<PaneNode>,
) -> Arc<PaneNode> {
    if Arc::ptr_eq(&first, split.first()) && Arc::ptr_eq(&second, split.second()) {
        Arc::clone(node)
    } else {
        split.with_children(first, second).into_node()
    }
}
