use super::AppState;
use crate::node::Node;
use crate::outline::Outline;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn committed(text: &str) -> Node {
    let mut node = Node::blank();
    node.text = text.to_string();
    node.editing = false;
    node
}

fn app_with(nodes: Vec<Node>) -> AppState {
    AppState::new(Outline { nodes }, PathBuf::from("unused.json"))
}

#[test]
fn test_enter_flow_commits_and_focuses_fresh_sibling() {
    let mut app = AppState::new(Outline::seed(), PathBuf::from("unused.json"));

    app.push_char('A');
    app.commit_current(true);
    app.apply_pending_focus();

    assert_eq!(app.outline.nodes.len(), 2);
    assert_eq!(app.outline.nodes[0].text, "A");
    assert!(!app.outline.nodes[0].editing);
    assert!(app.outline.nodes[1].editing);
    // The cursor jumped onto the fresh node's input.
    assert_eq!(app.cursor, 1);
    assert!(app.current_is_editing());
    assert!(app.dirty);
}

#[test]
fn test_commit_without_insert_leaves_cursor_in_place() {
    let mut app = AppState::new(Outline::seed(), PathBuf::from("unused.json"));

    app.push_char('x');
    app.commit_current(false);
    app.apply_pending_focus();

    assert_eq!(app.outline.nodes.len(), 1);
    assert_eq!(app.cursor, 0);
    assert!(!app.current_is_editing());
}

#[test]
fn test_add_child_focuses_the_new_child_row() {
    let mut app = app_with(vec![committed("a"), committed("b")]);

    app.add_child_current();
    app.apply_pending_focus();

    // Pre-order: a, new child, b — cursor lands on the child.
    assert_eq!(app.cursor, 1);
    assert!(app.current_is_editing());
    assert_eq!(app.outline.node_count(), 3);
}

#[test]
fn test_indent_keeps_cursor_on_the_moved_node() {
    let mut app = app_with(vec![committed("a"), committed("b")]);
    app.move_down();
    let target = app.current_node_id().unwrap();

    app.indent_current();
    app.apply_pending_focus();

    assert_eq!(app.current_node_id(), Some(target));
    let children = app.outline.nodes[0].children.as_ref().unwrap();
    assert_eq!(children[0].id, target);
}

#[test]
fn test_dedent_keeps_cursor_on_the_moved_node() {
    let mut parent = committed("parent");
    parent.children = Some(vec![committed("x")]);
    let mut app = app_with(vec![parent]);
    app.move_down();
    let target = app.current_node_id().unwrap();

    app.dedent_current();
    app.apply_pending_focus();

    assert_eq!(app.current_node_id(), Some(target));
    assert_eq!(app.outline.nodes.len(), 2);
    assert_eq!(app.outline.nodes[1].id, target);
}

#[test]
fn test_cursor_movement_clamps_at_both_ends() {
    let mut app = app_with(vec![committed("a"), committed("b")]);

    app.move_up();
    assert_eq!(app.cursor, 0);

    app.move_down();
    app.move_down();
    app.move_down();
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_save_writes_snapshot_and_clears_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("outline.json");
    let mut app = AppState::new(Outline::seed(), path.clone());
    app.push_char('A');
    assert!(app.dirty);

    assert!(app.save());

    assert!(!app.dirty);
    assert_eq!(app.message.as_deref(), Some("Saved"));
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"A\""));
}

#[test]
fn test_failed_save_reports_and_keeps_session_alive() {
    let dir = tempdir().unwrap();
    // A directory path cannot be overwritten as a file.
    let mut app = AppState::new(Outline::seed(), dir.path().to_path_buf());
    app.push_char('A');

    assert!(!app.save());

    assert!(app.dirty);
    assert!(app.message.as_deref().unwrap().starts_with("Error saving"));
}
