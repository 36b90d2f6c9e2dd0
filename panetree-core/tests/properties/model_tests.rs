//! Property-based tests for `PaneLayoutModel`
//!
//! Random edit sequences are applied to a model; whatever succeeds or
//! fails, the model must keep a consistent layout.

use std::collections::HashSet;
use std::sync::Arc;

use panetree_core::split::{LayoutError, PaneLayoutModel, SplitLayout, validate_tree};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Test Strategies
// ============================================================================

/// Represents an operation that can be performed on a `PaneLayoutModel`
#[derive(Debug, Clone)]
enum ModelOperation {
    /// Split a pane (by index into pane_ids), optionally moving a tab
    Split { pane: Index, tab: Option<Index> },
    /// Close a pane
    ClosePane { pane: Index },
    /// Open a named tab in the focused pane
    OpenTab(u8),
    /// Close a tab of a pane
    CloseTab { pane: Index, tab: Index },
    /// Move a tab between two panes
    MoveTab { from: Index, to: Index, tab: Index },
    /// Resize the split that is the parent of a pane
    Resize { pane: Index, ratio: f64 },
    /// Focus a pane
    Focus { pane: Index },
    /// Move a tab within its pane
    Reorder { pane: Index, tab: Index, to: usize },
}

fn model_operation_strategy() -> impl Strategy<Value = ModelOperation> {
    prop_oneof![
        (any::<Index>(), proptest::option::of(any::<Index>()))
            .prop_map(|(pane, tab)| ModelOperation::Split { pane, tab }),
        any::<Index>().prop_map(|pane| ModelOperation::ClosePane { pane }),
        (0u8..12).prop_map(ModelOperation::OpenTab),
        (any::<Index>(), any::<Index>())
            .prop_map(|(pane, tab)| ModelOperation::CloseTab { pane, tab }),
        (any::<Index>(), any::<Index>(), any::<Index>())
            .prop_map(|(from, to, tab)| ModelOperation::MoveTab { from, to, tab }),
        (any::<Index>(), -1.0f64..2.0)
            .prop_map(|(pane, ratio)| ModelOperation::Resize { pane, ratio }),
        any::<Index>().prop_map(|pane| ModelOperation::Focus { pane }),
        (any::<Index>(), any::<Index>(), 0usize..6)
            .prop_map(|(pane, tab, to)| ModelOperation::Reorder { pane, tab, to }),
    ]
}

fn model_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ModelOperation>> {
    proptest::collection::vec(model_operation_strategy(), 0..=max_ops)
}

fn tab_of(model: &PaneLayoutModel, pane_id: &str, tab: &Index) -> Option<String> {
    let leaf = model.find_pane(pane_id)?;
    (!leaf.tabs.is_empty()).then(|| tab.get(&leaf.tabs).to_string())
}

/// Apply an operation, returning the error if the model rejected it
fn apply_operation(model: &mut PaneLayoutModel, op: &ModelOperation) -> Result<(), LayoutError> {
    let panes = model.pane_ids();
    match op {
        ModelOperation::Split { pane, tab } => {
            let pane_id = pane.get(&panes).as_str();
            let tab = tab.as_ref().and_then(|t| tab_of(model, pane_id, t));
            model.split(pane_id, tab.as_deref()).map(|_| ())
        }
        ModelOperation::ClosePane { pane } => model.close_pane(pane.get(&panes).as_str()),
        ModelOperation::OpenTab(n) => {
            model.open_tab(&format!("tab-{n}"));
            Ok(())
        }
        ModelOperation::CloseTab { pane, tab } => {
            let pane_id = pane.get(&panes).as_str();
            let tab = tab_of(model, pane_id, tab).unwrap_or_else(|| "none".to_string());
            model.close_tab(pane_id, &tab).map(|_| ())
        }
        ModelOperation::MoveTab { from, to, tab } => {
            let from_id = from.get(&panes).as_str();
            let to_id = to.get(&panes).as_str();
            let tab = tab_of(model, from_id, tab).unwrap_or_else(|| "none".to_string());
            model.move_tab(from_id, to_id, &tab)
        }
        ModelOperation::Resize { pane, ratio } => {
            let pane_id = pane.get(&panes).as_str();
            let split_id = model
                .root()
                .find_parent(pane_id)
                .map_or_else(|| pane_id.to_string(), |split| split.id.to_string());
            model.resize(&split_id, *ratio).map(|_| ())
        }
        ModelOperation::Focus { pane } => model.set_focus(pane.get(&panes).as_str()),
        ModelOperation::Reorder { pane, tab, to } => {
            let pane_id = pane.get(&panes).as_str();
            let tab = tab_of(model, pane_id, tab).unwrap_or_else(|| "none".to_string());
            model.reorder_tab(pane_id, &tab, *to).map(|_| ())
        }
    }
}

// ============================================================================
// Model invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Focus always names a live pane
    #[test]
    fn prop_focus_names_live_pane(ops in model_operations_strategy(20)) {
        let mut model = PaneLayoutModel::new();
        for op in &ops {
            let _ = apply_operation(&mut model, op);
            prop_assert!(
                model.root().contains_pane(model.focused_pane().as_str()),
                "focus {} not in tree after {:?}",
                model.focused_pane(),
                op
            );
        }
    }

    /// Node IDs stay unique and the tree stays valid
    #[test]
    fn prop_ids_unique_and_tree_valid(ops in model_operations_strategy(20)) {
        let mut model = PaneLayoutModel::new();
        for op in &ops {
            let _ = apply_operation(&mut model, op);
        }
        let ids = model.root().collect_node_ids();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert!(validate_tree(model.root()));
        prop_assert_eq!(model.pane_count(), model.pane_ids().len());
    }

    /// A rejected edit leaves the snapshot untouched
    #[test]
    fn prop_errors_keep_snapshot(ops in model_operations_strategy(20)) {
        let mut model = PaneLayoutModel::new();
        for op in &ops {
            let before = Arc::clone(model.root());
            let focus = model.focused_pane().clone();
            if apply_operation(&mut model, op).is_err() {
                prop_assert!(Arc::ptr_eq(&before, model.root()));
                prop_assert_eq!(&focus, model.focused_pane());
            }
        }
    }

    /// A model restored from its own layout behaves like the original
    #[test]
    fn prop_restored_model_matches(ops in model_operations_strategy(12), extra in any::<Index>()) {
        let mut model = PaneLayoutModel::new();
        for op in &ops {
            let _ = apply_operation(&mut model, op);
        }
        let json = model.layout().to_json().unwrap();
        let mut restored = PaneLayoutModel::from_layout(SplitLayout::from_json(&json).unwrap());
        prop_assert_eq!(restored.layout(), model.layout());

        let panes = model.pane_ids();
        let target = extra.get(&panes).as_str();
        let ours = model.split(target, None).unwrap();
        let theirs = restored.split(target, None).unwrap();
        prop_assert!(!panes.contains(&theirs));
        prop_assert_eq!(model.pane_count(), restored.pane_count());
        prop_assert!(restored.root().contains_pane(theirs.as_str()));
        prop_assert!(model.root().contains_pane(ours.as_str()));
    }
}
