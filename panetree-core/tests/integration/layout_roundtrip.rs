//! Layout persistence integration tests
//!
//! Drives a `PaneLayoutModel` through a realistic editing session and checks
//! that every intermediate layout survives a save and load through disk.

use std::sync::Arc;

use panetree_core::split::{
    IdGenerator, LayoutError, LegacyTabs, MAX_DEPTH, NodeId, PaneLayoutModel, PaneLeaf,
    PersistError, SplitLayout, TabId, split_pane, validate_value,
};
use tempfile::TempDir;

fn legacy_session() -> LegacyTabs {
    LegacyTabs {
        all: ["file:///src/main.rs", "file:///src/lib.rs", "session:1", "preview:README.md"]
            .into_iter()
            .map(TabId::from)
            .collect(),
        active: Some(TabId::from("file:///src/lib.rs")),
    }
}

fn save_and_reload(layout: &SplitLayout, dir: &TempDir, name: &str) -> SplitLayout {
    let path = dir.path().join(name);
    layout
        .save_to_file(&path, true)
        .expect(&format!("saving {name} should succeed"));
    SplitLayout::load_from_file(&path).expect(&format!("loading {name} should succeed"))
}

#[test]
fn editing_session_survives_disk_round_trips() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut model = PaneLayoutModel::from_legacy(&legacy_session());

    let right = model
        .split("pane-0", Some("session:1"))
        .expect("split should succeed");
    assert_eq!(
        save_and_reload(&model.layout(), &dir, "step1.json"),
        model.layout()
    );

    let preview = model
        .split(right.as_str(), Some("session:1"))
        .expect("nested split should succeed");
    model
        .move_tab("pane-0", preview.as_str(), "preview:README.md")
        .expect("move should succeed");
    let parent = model.root().find_parent(preview.as_str()).unwrap().id.clone();
    model.resize(parent.as_str(), 0.25).expect("resize should succeed");
    assert_eq!(
        save_and_reload(&model.layout(), &dir, "step2.json"),
        model.layout()
    );

    // right is now empty; closing it collapses the nested split
    model.close_pane(right.as_str()).expect("close should succeed");
    let reloaded = save_and_reload(&model.layout(), &dir, "step3.json");
    assert_eq!(reloaded, model.layout());
    assert_eq!(reloaded.root.count_leaves(), 2);
    assert_eq!(reloaded.root.count_tabs(), 4);

    let restored = PaneLayoutModel::from_layout(reloaded);
    assert_eq!(restored.focused_pane(), model.focused_pane());
    assert_eq!(restored.pane_ids(), model.pane_ids());
}

#[test]
fn saved_file_matches_host_json_shape() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("layout.json");
    let mut model = PaneLayoutModel::from_legacy(&legacy_session());
    model.split("pane-0", Some("session:1")).unwrap();
    model.layout().save_to_file(&path, false).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["focusedPane"], "pane-1");
    assert_eq!(value["root"]["type"], "split");
    assert_eq!(value["root"]["id"], "pane-2");
    assert_eq!(value["root"]["direction"], "horizontal");
    assert_eq!(value["root"]["children"][0]["id"], "pane-0");
    assert_eq!(value["root"]["children"][1]["tabs"][0], "session:1");
    assert!(validate_value(&value["root"]));
}

#[test]
fn out_of_range_ratio_is_rejected_unless_unchecked() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"root":{"type":"split","id":"s","direction":"horizontal","ratio":-0.2,
            "children":[{"type":"leaf","id":"a","tabs":["x"]},{"type":"leaf","id":"b","tabs":[]}]}}"#,
    )
    .unwrap();

    assert!(matches!(
        SplitLayout::load_from_file(&path),
        Err(PersistError::InvalidTree(_))
    ));
    let layout = SplitLayout::load(&path, false).expect("unchecked load should succeed");
    assert!(!layout.is_valid());
}

#[test]
fn resaving_unchanged_model_is_stable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut model = PaneLayoutModel::from_legacy(&legacy_session());
    let before = Arc::clone(model.root());
    model.set_active_tab("pane-0", "file:///src/lib.rs").unwrap();
    assert!(Arc::ptr_eq(&before, model.root()));

    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");
    model.layout().save_to_file(&first, true).unwrap();
    SplitLayout::load_from_file(&first)
        .unwrap()
        .save_to_file(&second, true)
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn deepest_model_layout_reloads() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut model = PaneLayoutModel::from_legacy(&legacy_session());
    loop {
        let focused = model.focused_pane().clone();
        match model.split(focused.as_str(), None) {
            Ok(_) => {}
            Err(LayoutError::TooDeep { limit, .. }) => {
                assert_eq!(limit, MAX_DEPTH);
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(model.root().depth(), MAX_DEPTH);

    let reloaded = save_and_reload(&model.layout(), &dir, "deep.json");
    assert_eq!(reloaded, model.layout());
    assert_eq!(
        SplitLayout::from_json(&model.layout().to_json().unwrap()).unwrap(),
        reloaded
    );
}

#[test]
fn tree_too_deep_to_reload_is_not_saved() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("too_deep.json");
    let ids = IdGenerator::new();
    let mut root = PaneLeaf::new("pane-0").into_node();
    let mut target = NodeId::from("pane-0");
    for _ in 0..=MAX_DEPTH {
        root = split_pane(&root, target.as_str(), None, &ids);
        target = root.collect_pane_ids().last().unwrap().clone();
    }
    assert_eq!(root.depth(), MAX_DEPTH + 1);

    let result = SplitLayout::new(root).save_to_file(&path, true);
    assert!(matches!(result, Err(PersistError::InvalidTree(_))));
    assert!(!path.exists());
}
