//! Tab list edits within a single pane
//!
//! Pure `PaneLeaf -> PaneLeaf` helpers meant to be handed to
//! [`super::ops::update_leaf`]. When an edit does not apply, the returned
//! leaf compares equal to the input.

use super::tree::PaneLeaf;
use super::types::TabId;

/// Appends `tab` if the pane does not hold it yet and makes it active.
#[must_use]
pub fn open_tab(leaf: &PaneLeaf, tab: &str) -> PaneLeaf {
    let mut next = leaf.clone();
    if !next.contains_tab(tab) {
        next.tabs.push(TabId::from(tab));
    }
    next.active = Some(TabId::from(tab));
    next
}

/// Removes `tab`. If it was active, the first remaining tab becomes active.
#[must_use]
pub fn close_tab(leaf: &PaneLeaf, tab: &str) -> PaneLeaf {
    let tabs: Vec<TabId> = leaf.tabs.iter().filter(|t| *t != tab).cloned().collect();
    let active = if leaf.active.as_ref().is_some_and(|a| a == tab) {
        tabs.first().cloned()
    } else {
        leaf.active.clone()
    };
    PaneLeaf {
        id: leaf.id.clone(),
        tabs,
        active,
    }
}

/// Selects `tab` if the pane holds it; `None` clears the selection.
#[must_use]
pub fn set_active(leaf: &PaneLeaf, tab: Option<&str>) -> PaneLeaf {
    let mut next = leaf.clone();
    match tab {
        Some(tab) if leaf.contains_tab(tab) => next.active = Some(TabId::from(tab)),
        Some(_) => {}
        None => next.active = None,
    }
    next
}

/// Moves `tab` to position `to_index` within the pane, clamped to the last
/// position.
#[must_use]
pub fn reorder_tab(leaf: &PaneLeaf, tab: &str, to_index: usize) -> PaneLeaf {
    let mut next = leaf.clone();
    let Some(from_index) = next.tabs.iter().position(|t| t == tab) else {
        return next;
    };
    let to_index = to_index.min(next.tabs.len() - 1);
    if from_index != to_index {
        let moved = next.tabs.remove(from_index);
        next.tabs.insert(to_index, moved);
    }
    next
}

/// Drops repeated tabs, keeping the first occurrence of each.
///
/// An active tab that no longer appears falls back to the first tab.
#[must_use]
pub fn dedup_tabs(leaf: &PaneLeaf) -> PaneLeaf {
    let mut tabs: Vec<TabId> = Vec::with_capacity(leaf.tabs.len());
    for tab in &leaf.tabs {
        if !tabs.contains(tab) {
            tabs.push(tab.clone());
        }
    }
    let active = match &leaf.active {
        Some(active) if !tabs.contains(active) => tabs.first().cloned(),
        other => other.clone(),
    };
    PaneLeaf {
        id: leaf.id.clone(),
        tabs,
        active,
    }
}
