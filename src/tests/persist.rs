use super::{load, save, PersistError};
use crate::node::{Node, NodeId};
use crate::outline::Outline;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn sample_outline() -> Outline {
    let mut a = Node::blank();
    a.text = "a".to_string();
    a.editing = false;
    a.children = Some(vec![Node::blank()]);
    let mut b = Node::blank();
    b.text = "b".to_string();
    b.editing = false;
    Outline { nodes: vec![a, b] }
}

#[test]
fn test_load_missing_snapshot_returns_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing-here.json");
    assert!(load(&path).unwrap().is_none());
}

#[test]
fn test_save_then_load_round_trips_tree_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("outline.json");
    let outline = sample_outline();

    save(&path, &outline).unwrap();
    let loaded = load(&path).unwrap().unwrap();

    assert_eq!(loaded.nodes.len(), 2);
    assert_eq!(loaded.nodes[0].text, "a");
    assert!(!loaded.nodes[0].editing);
    let children = loaded.nodes[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text, "");
    assert!(children[0].editing);
    assert!(loaded.nodes[1].children.is_none());
}

#[test]
fn test_loaded_nodes_get_fresh_distinct_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("outline.json");
    save(&path, &sample_outline()).unwrap();

    let loaded = load(&path).unwrap().unwrap();

    let ids: HashSet<NodeId> = loaded.traverse().map(|(node, _)| node.id).collect();
    assert_eq!(ids.len(), loaded.node_count());
}

#[test]
fn test_snapshot_is_plain_records_without_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("outline.json");
    save(&path, &sample_outline()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Root is a bare array of {text, editing, children} records.
    let root = value.as_array().unwrap();
    assert_eq!(root.len(), 2);
    let record = root[0].as_object().unwrap();
    assert_eq!(record.len(), 3);
    assert!(record.contains_key("text"));
    assert!(record.contains_key("editing"));
    assert!(record.contains_key("children"));
    assert!(root[1]["children"].is_null());
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is not an outline").unwrap();

    let result = load(file.path());

    assert!(matches!(result, Err(PersistError::Malformed(_))));
}
