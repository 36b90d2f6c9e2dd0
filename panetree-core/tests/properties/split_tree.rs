//! Property-based tests for the pure pane tree transformations
//!
//! Trees are grown from a single leaf through random splits, so every
//! generated tree has unique pane IDs, unique tabs and operational ratios.

use std::sync::Arc;

use panetree_core::split::{
    IdGenerator, MAX_RATIO, MIN_RATIO, NodeId, PaneLeaf, PaneNode, PaneSplit, SplitLayout, TabId,
    move_tab, remove_pane, split_pane, tabs, update_leaf, update_ratio, validate_tree,
    validate_value,
};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Test Strategies
// ============================================================================

/// One growth step: which leaf to split, whether to move a tab out of it,
/// and the ratio to give the new split.
#[derive(Debug, Clone)]
struct Growth {
    leaf: Index,
    move_tab: Option<Index>,
    ratio: f64,
}

fn growth_strategy() -> impl Strategy<Value = Growth> {
    (any::<Index>(), proptest::option::of(any::<Index>()), 0.1f64..=0.9)
        .prop_map(|(leaf, move_tab, ratio)| Growth { leaf, move_tab, ratio })
}

/// Builds a tree by applying growth steps to `pane-0` holding `tab_count`
/// tabs.
fn grow(tab_count: usize, steps: &[Growth]) -> Arc<PaneNode> {
    let ids = IdGenerator::new();
    let names: Vec<String> = (0..tab_count).map(|i| format!("t{i}")).collect();
    let mut seed = PaneLeaf::with_tabs("pane-0", names.iter().map(String::as_str));
    seed.active = seed.tabs.first().cloned();
    let mut root = seed.into_node();

    for step in steps {
        let pane_ids = root.collect_pane_ids();
        let pane_id = step.leaf.get(&pane_ids).clone();
        let leaf = root.find_pane(pane_id.as_str()).unwrap();
        let tab = match &step.move_tab {
            Some(index) if !leaf.tabs.is_empty() => Some(index.get(&leaf.tabs).to_string()),
            _ => None,
        };
        root = split_pane(&root, pane_id.as_str(), tab.as_deref(), &ids);
        let split_id = root.find_parent(pane_id.as_str()).unwrap().id.clone();
        root = update_ratio(&root, split_id.as_str(), step.ratio);
    }
    root
}

fn tree_strategy() -> impl Strategy<Value = Arc<PaneNode>> {
    (0usize..8, proptest::collection::vec(growth_strategy(), 0..8))
        .prop_map(|(tab_count, steps)| grow(tab_count, &steps))
}

/// Trees with at least one split.
fn split_tree_strategy() -> impl Strategy<Value = Arc<PaneNode>> {
    (0usize..8, proptest::collection::vec(growth_strategy(), 1..8))
        .prop_map(|(tab_count, steps)| grow(tab_count, &steps))
}

fn split_ids(root: &PaneNode) -> Vec<NodeId> {
    root.collect_node_ids()
        .into_iter()
        .filter(|id| root.find_split(id.as_str()).is_some())
        .collect()
}

/// Leaves holding at least one tab.
fn leaves_with_tabs(root: &PaneNode) -> Vec<NodeId> {
    root.collect_pane_ids()
        .into_iter()
        .filter(|id| root.find_pane(id.as_str()).is_some_and(|leaf| !leaf.is_empty()))
        .collect()
}

fn occurrences(leaf: &PaneLeaf, tab: &str) -> usize {
    leaf.tabs.iter().filter(|t| *t == tab).count()
}

// ============================================================================
// No-op identity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every edit naming an absent ID returns the very same tree
    #[test]
    fn prop_absent_id_edits_return_same_tree(root in tree_strategy(), ratio in -5.0f64..5.0) {
        let ids = IdGenerator::new();
        prop_assert!(Arc::ptr_eq(&split_pane(&root, "missing", None, &ids), &root));
        prop_assert_eq!(ids.issued(), 0);

        let removed = remove_pane(&root, "missing");
        prop_assert!(removed.is_some_and(|tree| Arc::ptr_eq(&tree, &root)));
        prop_assert!(Arc::ptr_eq(&update_ratio(&root, "missing", ratio), &root));
        prop_assert!(Arc::ptr_eq(
            &update_leaf(&root, "missing", |leaf| tabs::open_tab(leaf, "x")),
            &root
        ));
    }

    /// Moving a tab the source does not hold returns the same tree
    #[test]
    fn prop_move_absent_tab_returns_same_tree(root in split_tree_strategy()) {
        let panes = root.collect_pane_ids();
        let (from, to) = (&panes[0], &panes[1]);
        prop_assert!(Arc::ptr_eq(
            &move_tab(&root, from.as_str(), to.as_str(), "not-a-tab"),
            &root
        ));
        prop_assert!(Arc::ptr_eq(
            &move_tab(&root, from.as_str(), from.as_str(), "t0"),
            &root
        ));
    }
}

// ============================================================================
// Leaf count under split and remove
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Splitting an existing leaf adds exactly one leaf
    #[test]
    fn prop_split_adds_one_leaf(root in tree_strategy(), pick in any::<Index>()) {
        let panes = root.collect_pane_ids();
        let target = pick.get(&panes);
        let ids = IdGenerator::starting_after(1000);

        let result = split_pane(&root, target.as_str(), None, &ids);
        prop_assert_eq!(result.count_leaves(), root.count_leaves() + 1);
        prop_assert_eq!(ids.issued(), 1002);
        prop_assert!(validate_tree(&result));
    }

    /// Removing an existing leaf removes exactly one leaf
    #[test]
    fn prop_remove_drops_one_leaf(root in tree_strategy(), pick in any::<Index>()) {
        let panes = root.collect_pane_ids();
        let target = pick.get(&panes);

        match remove_pane(&root, target.as_str()) {
            None => prop_assert_eq!(root.count_leaves(), 1),
            Some(result) => {
                prop_assert!(root.count_leaves() > 1);
                prop_assert_eq!(result.count_leaves(), root.count_leaves() - 1);
                prop_assert!(!result.contains_pane(target.as_str()));
            }
        }
    }
}

// ============================================================================
// Ratio clamp
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Resizing always lands inside the operational range
    #[test]
    fn prop_ratio_is_clamped(
        root in split_tree_strategy(),
        pick in any::<Index>(),
        ratio in -10.0f64..10.0,
    ) {
        let splits = split_ids(&root);
        let target = pick.get(&splits);
        let result = update_ratio(&root, target.as_str(), ratio);
        let applied = result.find_split(target.as_str()).unwrap().ratio;

        prop_assert!((MIN_RATIO..=MAX_RATIO).contains(&applied));
        if ratio < MIN_RATIO {
            prop_assert_eq!(applied, MIN_RATIO);
        } else if ratio > MAX_RATIO {
            prop_assert_eq!(applied, MAX_RATIO);
        } else {
            prop_assert_eq!(applied, ratio);
        }
    }
}

// ============================================================================
// Structural sharing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Editing a leaf on one side of the root shares the other side
    #[test]
    fn prop_edit_shares_untouched_branch(root in split_tree_strategy(), pick in any::<Index>()) {
        let top = root.as_split().unwrap();
        let left_panes = top.first().collect_pane_ids();
        let target = pick.get(&left_panes);

        let result = update_leaf(&root, target.as_str(), |leaf| tabs::open_tab(leaf, "fresh"));
        let result_top = result.as_split().unwrap();
        prop_assert!(Arc::ptr_eq(result_top.second(), top.second()));
        prop_assert!(!Arc::ptr_eq(result_top.first(), top.first()));

        let ids = IdGenerator::starting_after(1000);
        let split = split_pane(&root, target.as_str(), None, &ids);
        prop_assert!(Arc::ptr_eq(split.as_split().unwrap().second(), top.second()));
    }
}

// ============================================================================
// move_tab
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Moving a tab keeps the total tab count and lands it once, active,
    /// in the destination
    #[test]
    fn prop_move_tab_conserves_tabs(
        root in split_tree_strategy(),
        from_pick in any::<Index>(),
        to_pick in any::<Index>(),
        tab_pick in any::<Index>(),
    ) {
        let sources = leaves_with_tabs(&root);
        prop_assume!(!sources.is_empty());
        let from = from_pick.get(&sources).clone();
        let destinations: Vec<NodeId> = root
            .collect_pane_ids()
            .into_iter()
            .filter(|id| *id != from)
            .collect();
        let to = to_pick.get(&destinations).clone();
        let source = root.find_pane(from.as_str()).unwrap();
        let tab = tab_pick.get(&source.tabs).clone();

        let result = move_tab(&root, from.as_str(), to.as_str(), tab.as_str());

        prop_assert_eq!(result.count_tabs(), root.count_tabs());
        let dest = result.find_pane(to.as_str()).unwrap();
        prop_assert_eq!(occurrences(dest, tab.as_str()), 1);
        prop_assert_eq!(dest.tabs.last(), Some(&tab));
        prop_assert_eq!(dest.active.as_ref(), Some(&tab));
        match result.find_pane(from.as_str()) {
            Some(left) => prop_assert!(!left.contains_tab(tab.as_str())),
            None => prop_assert_eq!(source.tabs.len(), 1),
        }
    }

    /// A moved active tab hands the source's selection to its first
    /// remaining tab
    #[test]
    fn prop_move_tab_active_fallback(
        root in split_tree_strategy(),
        from_pick in any::<Index>(),
        to_pick in any::<Index>(),
    ) {
        let sources: Vec<NodeId> = leaves_with_tabs(&root)
            .into_iter()
            .filter(|id| root.find_pane(id.as_str()).is_some_and(|l| l.active.is_some()))
            .collect();
        prop_assume!(!sources.is_empty());
        let from = from_pick.get(&sources).clone();
        let destinations: Vec<NodeId> = root
            .collect_pane_ids()
            .into_iter()
            .filter(|id| *id != from)
            .collect();
        let to = to_pick.get(&destinations);
        let source = root.find_pane(from.as_str()).unwrap();
        let active = source.active.clone().unwrap();

        let result = move_tab(&root, from.as_str(), to.as_str(), active.as_str());

        if source.tabs.len() > 1 {
            let left = result.find_pane(from.as_str()).unwrap();
            prop_assert_eq!(left.active.as_ref(), left.tabs.first());
        } else {
            prop_assert!(!result.contains_pane(from.as_str()));
            prop_assert_eq!(result.count_leaves(), root.count_leaves() - 1);
        }
    }
}

// ============================================================================
// Tab edits and validation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering permutes a pane's tabs without losing any
    #[test]
    fn prop_reorder_is_a_permutation(
        count in 1usize..8,
        pick in any::<Index>(),
        to_index in 0usize..10,
    ) {
        let names: Vec<String> = (0..count).map(|i| format!("t{i}")).collect();
        let leaf = PaneLeaf::with_tabs("a", names.iter().map(String::as_str));
        let tab = pick.get(&names);

        let next = tabs::reorder_tab(&leaf, tab, to_index);
        let mut before: Vec<TabId> = leaf.tabs.clone();
        let mut after: Vec<TabId> = next.tabs.clone();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
        prop_assert_eq!(
            next.tabs.iter().position(|t| t == tab.as_str()),
            Some(to_index.min(count - 1))
        );
    }

    /// Dedup is idempotent and leaves no repeats
    #[test]
    fn prop_dedup_is_idempotent(raw in proptest::collection::vec("[a-d]", 0..12)) {
        let leaf = PaneLeaf::with_tabs("a", raw.iter().map(String::as_str));
        let once = tabs::dedup_tabs(&leaf);
        prop_assert_eq!(tabs::dedup_tabs(&once), once.clone());
        let mut sorted = once.tabs.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), once.tabs.len());
    }

    /// Grown trees validate, typed and untyped, and survive a JSON trip
    #[test]
    fn prop_grown_trees_validate(root in tree_strategy()) {
        prop_assert!(validate_tree(&root));
        let layout = SplitLayout::new(Arc::clone(&root));
        let value = serde_json::to_value(&*root).unwrap();
        prop_assert!(validate_value(&value));
        let restored = SplitLayout::from_json(&layout.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored, layout);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn leaf(id: &str, tabs: &[&str], active: Option<&str>) -> Arc<PaneNode> {
    let mut leaf = PaneLeaf::with_tabs(id, tabs.iter().copied());
    leaf.active = active.map(TabId::from);
    leaf.into_node()
}

#[test]
fn scenario_nested_removal_collapse() {
    let tree = PaneSplit::new(
        "s1",
        PaneSplit::new("s2", leaf("a", &[], None), leaf("b", &[], None)).into_node(),
        leaf("c", &[], None),
    )
    .into_node();
    let result = remove_pane(&tree, "a").unwrap();
    let top = result.as_split().unwrap();
    assert_eq!(top.id, "s1");
    assert_eq!(top.first().as_leaf().unwrap().id, "b");
    assert_eq!(top.second().as_leaf().unwrap().id, "c");
}

#[test]
fn scenario_move_tab_auto_collapse() {
    let tree = PaneSplit::new(
        "s",
        leaf("a", &["t1"], Some("t1")),
        leaf("b", &["t2"], Some("t2")),
    )
    .into_node();
    let result = move_tab(&tree, "a", "b", "t1");
    let b = result.as_leaf().unwrap();
    assert_eq!(b.id, "b");
    assert_eq!(b.tabs, [TabId::from("t2"), TabId::from("t1")]);
}

#[test]
fn scenario_split_with_tab_move() {
    let ids = IdGenerator::new();
    let tree = leaf("a", &["t1", "t2", "t3"], Some("t2"));
    let result = split_pane(&tree, "a", Some("t2"), &ids);
    let split = result.as_split().unwrap();
    let left = split.first().as_leaf().unwrap();
    let right = split.second().as_leaf().unwrap();
    assert_eq!(left.tabs, [TabId::from("t1"), TabId::from("t3")]);
    assert_eq!(left.active.as_ref().unwrap(), "t1");
    assert_eq!(right.tabs, [TabId::from("t2")]);
    assert_eq!(right.active.as_ref().unwrap(), "t2");
}
