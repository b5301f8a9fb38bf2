//! Node representation for the outline tree.
//!
//! A node is one outline entry: its text, whether it is currently being
//! composed, and an optional ordered sublist. Nodes carry a stable identity
//! so that structural operations can locate them by id rather than by text,
//! which matters because distinct entries routinely share identical text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable per-node identity, valid for one process lifetime.
///
/// Ids are deliberately not persisted: a snapshot loaded from disk gets
/// fresh ids on deserialization, so identity never leaks across a
/// serialization round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One outline entry: text, edit-mode flag, optional ordered sublist.
pub struct Node {
    /// Identity for structural operations; regenerated on load.
    #[serde(skip)]
    pub id: NodeId,
    /// Text payload, mutable while the node is in edit mode.
    pub text: String,
    /// True while the node is rendered as an input field capturing keystrokes.
    pub editing: bool,
    /// The node's own sublist; `None` until a sublist is first created.
    /// An emptied sublist stays `Some` rather than reverting to `None`.
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// A freshly inserted entry: empty text, edit mode on, no sublist.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: NodeId::new(),
            text: String::new(),
            editing: true,
            children: None,
        }
    }

    /// Append a new blank entry to this node's sublist, creating the
    /// sublist if it does not exist yet. Returns the new entry's id.
    ///
    /// This is the no-search form: the caller already holds the node.
    pub fn add_child(&mut self) -> NodeId {
        let child = Node::blank();
        let id = child.id;
        self.children.get_or_insert_with(Vec::new).push(child);
        id
    }

    /// Whether this node has a sublist, empty or not.
    #[must_use]
    pub fn has_sublist(&self) -> bool {
        self.children.is_some()
    }
}
