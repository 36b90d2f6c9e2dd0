//! Structural validation of pane trees
//!
//! Validation checks shape, not policy: split ratios must lie in `[0, 1]`,
//! wider than the `[0.1, 0.9]` range that resizing clamps to. A tree built
//! only through the engine never leaves the narrower range, but a tree
//! read from elsewhere with a ratio of 0.05 is still structurally valid.

use serde_json::Value;

use super::tree::{MAX_VALID_RATIO, MIN_VALID_RATIO, PaneNode};

/// Returns true if every split in the tree has a ratio within `[0, 1]`.
///
/// Leaf ID and tab list types, and the two-children rule, are already
/// guaranteed by [`PaneNode`]'s shape. Leaf ID uniqueness and `active`
/// membership are not checked.
#[must_use]
pub fn validate_tree(node: &PaneNode) -> bool {
    match node {
        PaneNode::Leaf(_) => true,
        PaneNode::Split(split) => {
            ratio_in_bounds(split.ratio)
                && validate_tree(split.first())
                && validate_tree(split.second())
        }
    }
}

/// Performs the same structural check on untyped JSON.
///
/// A leaf needs `"type": "leaf"`, a string `id` and an array `tabs`. A split
/// needs `"type": "split"`, a `children` array of exactly two valid nodes
/// and a numeric `ratio` within `[0, 1]`.
#[must_use]
pub fn validate_value(value: &Value) -> bool {
    match value.get("type").and_then(Value::as_str) {
        Some("leaf") => {
            value.get("id").is_some_and(Value::is_string)
                && value.get("tabs").is_some_and(Value::is_array)
        }
        Some("split") => {
            let Some(children) = value.get("children").and_then(Value::as_array) else {
                return false;
            };
            let ratio_ok = value
                .get("ratio")
                .and_then(Value::as_f64)
                .is_some_and(ratio_in_bounds);
            children.len() == 2 && ratio_ok && children.iter().all(validate_value)
        }
        _ => false,
    }
}

fn ratio_in_bounds(ratio: f64) -> bool {
    (MIN_VALID_RATIO..=MAX_VALID_RATIO).contains(&ratio)
}
