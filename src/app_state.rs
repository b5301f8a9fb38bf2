//! The core state machine bridging the outline tree and the interactive TUI.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the user navigates and edits. The outline tree is that truth; this
//! module wraps it with the session state around it: where the cursor sits in
//! the flattened rendering, which view handles input, and the focus request
//! raised when an insertion creates a node the cursor should jump to on the
//! next render cycle.

use crate::node::NodeId;
use crate::outline::Outline;
use crate::persist;
use std::path::PathBuf;

#[derive(PartialEq)]
/// Determines which UI chrome renders and how input is interpreted.
pub enum View {
    /// Tree navigation and inline node editing.
    List,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

/// Bridges the outline tree and the interactive TUI, maintaining session state.
pub struct AppState {
    /// The whole tree; exclusively owned and mutated here.
    pub outline: Outline,
    /// Selected row in the flattened pre-order rendering.
    pub cursor: usize,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Snapshot file written on save and teardown.
    pub snapshot_path: PathBuf,
    /// Unsaved structural or text changes exist.
    pub dirty: bool,
    /// Node whose input should receive the cursor after the next render.
    pending_focus: Option<NodeId>,
}

impl AppState {
    #[must_use]
    pub fn new(outline: Outline, snapshot_path: PathBuf) -> Self {
        Self {
            outline,
            cursor: 0,
            current_view: View::List,
            command_buffer: String::new(),
            message: None,
            snapshot_path,
            dirty: false,
            pending_focus: None,
        }
    }

    /// Id of the node under the cursor, if the tree is non-empty.
    #[must_use]
    pub fn current_node_id(&self) -> Option<NodeId> {
        self.outline
            .traverse()
            .nth(self.cursor)
            .map(|(node, _)| node.id)
    }

    /// Whether the node under the cursor is in edit mode.
    #[must_use]
    pub fn current_is_editing(&self) -> bool {
        self.outline
            .traverse()
            .nth(self.cursor)
            .is_some_and(|(node, _)| node.editing)
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.outline.node_count() {
            self.cursor += 1;
        }
    }

    /// Consume the post-insertion focus request, moving the cursor onto the
    /// requested node's row. Runs once per render cycle; a request whose
    /// node has since vanished is dropped silently.
    pub fn apply_pending_focus(&mut self) {
        if let Some(id) = self.pending_focus.take() {
            if let Some(pos) = self.outline.traverse().position(|(node, _)| node.id == id) {
                self.cursor = pos;
            }
        }
    }

    /// Commit the current node's text as-is, taking it out of edit mode.
    /// With `and_insert`, also splice a fresh editing sibling after it and
    /// request focus on it, which is the Enter-key flow.
    pub fn commit_current(&mut self, and_insert: bool) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        let text = self
            .outline
            .traverse()
            .find(|(node, _)| node.id == id)
            .map(|(node, _)| node.text.clone())
            .unwrap_or_default();
        if self.outline.commit_edit(id, &text) {
            self.dirty = true;
        }
        if and_insert {
            if let Some(fresh) = self.outline.insert_after(id) {
                self.pending_focus = Some(fresh);
            }
        }
    }

    /// Splice a new editing sibling after the current node.
    pub fn insert_sibling(&mut self) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if let Some(fresh) = self.outline.insert_after(id) {
            self.pending_focus = Some(fresh);
            self.dirty = true;
        }
    }

    /// Give the current node a sublist entry, creating the sublist if this
    /// is its first child.
    pub fn add_child_current(&mut self) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if let Some(fresh) = self.outline.add_child(id) {
            self.pending_focus = Some(fresh);
            self.dirty = true;
        }
    }

    /// Indent the current node under its preceding sibling. The cursor
    /// follows the node to its new row.
    pub fn indent_current(&mut self) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if self.outline.indent(id) {
            self.pending_focus = Some(id);
            self.dirty = true;
        }
    }

    /// Dedent the current node to become its parent's next sibling.
    pub fn dedent_current(&mut self) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if self.outline.dedent(id) {
            self.pending_focus = Some(id);
            self.dirty = true;
        }
    }

    /// Type a character into the current node's input.
    pub fn push_char(&mut self, ch: char) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if self.outline.push_char(id, ch) {
            self.dirty = true;
        }
    }

    /// Delete the last character of the current node's input.
    pub fn pop_char(&mut self) {
        let Some(id) = self.current_node_id() else {
            return;
        };
        if self.outline.pop_char(id) {
            self.dirty = true;
        }
    }

    /// Write the snapshot to disk. A failed write is reported in the help
    /// bar and never ends the session.
    pub fn save(&mut self) -> bool {
        match persist::save(&self.snapshot_path, &self.outline) {
            Ok(()) => {
                self.dirty = false;
                self.message = Some("Saved".to_string());
                true
            }
            Err(e) => {
                self.message = Some(format!("Error saving: {e}"));
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
