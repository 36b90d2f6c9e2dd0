//! Text rendering of pane trees.

use panetree_core::split::{PaneLeaf, PaneNode, PaneSplit};

/// Renders a tree with box-drawing connectors.
///
/// The focused pane is marked with `<`, the active tab of each pane with `*`.
pub fn render_tree(root: &PaneNode, focused: Option<&str>) -> String {
    let mut out = node_label(root, focused);
    out.push('\n');
    render_children(&mut out, root, focused, "");
    out
}

fn render_children(out: &mut String, node: &PaneNode, focused: Option<&str>, prefix: &str) {
    let PaneNode::Split(split) = node else {
        return;
    };
    for (child, last) in [(split.first(), false), (split.second(), true)] {
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&node_label(child, focused));
        out.push('\n');
        render_children(out, child, focused, &format!("{prefix}{indent}"));
    }
}

fn node_label(node: &PaneNode, focused: Option<&str>) -> String {
    match node {
        PaneNode::Leaf(leaf) => leaf_label(leaf, focused),
        PaneNode::Split(split) => split_label(split),
    }
}

fn split_label(split: &PaneSplit) -> String {
    format!("{} {} {:.2}", split.id, split.direction, split.ratio)
}

fn leaf_label(leaf: &PaneLeaf, focused: Option<&str>) -> String {
    let tabs = leaf
        .tabs
        .iter()
        .map(|tab| {
            if leaf.active.as_ref() == Some(tab) {
                format!("*{tab}")
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    let marker = if focused == Some(leaf.id.as_str()) { " <" } else { "" };
    format!("{} [{tabs}]{marker}", leaf.id)
}

/// Renders pane IDs in left-to-right order, one per line.
pub fn render_ids(root: &PaneNode) -> String {
    root.collect_pane_ids()
        .iter()
        .map(|id| format!("{id}\n"))
        .collect()
}
