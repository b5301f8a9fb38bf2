//! The outline tree and its edit engine.
//!
//! An outline is an ordered list of sibling nodes, each of which may own a
//! sublist with the same shape, recursively. The edit engine is the set of
//! structural operations that grow and reshape that tree in place:
//! insert-after, add-child, indent, dedent, and commit-edit.
//!
//! Every operation locates its target by id search from the root and treats
//! a missing target as a silent no-op, so the tree is structurally valid
//! after every call regardless of outcome. Edits splice only after the
//! search has produced a concrete (list, index) locator; no sibling list is
//! mutated while it is being scanned.

use crate::node::{Node, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
/// An ordered sequence of sibling nodes at one nesting level.
///
/// The root outline owns the whole tree; ordering is caller-visible (it
/// renders top to bottom and defines indent/dedent targets). Serialized as
/// a bare array so the root and every sublist share one snapshot shape.
pub struct Outline {
    pub nodes: Vec<Node>,
}

impl Outline {
    /// The default startup tree: a single empty node in edit mode.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            nodes: vec![Node::blank()],
        }
    }

    /// Depth-first pre-order walk: each node before its children, children
    /// before the next sibling. Restartable; holds no state between calls.
    #[must_use]
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack: Vec<(&Node, usize)> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter().rev() {
            stack.push((node, 0));
        }
        Traverse { stack }
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Whether a node with this id is reachable from the root.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.traverse().any(|(node, _)| node.id == id)
    }

    /// Splice a new blank node immediately after `target` in the target's
    /// own sibling list. Returns the new node's id, or `None` when the
    /// target is no longer reachable from the root.
    ///
    /// Search order: each sibling is checked for an id match before its
    /// subtree is descended into, scanning left to right.
    pub fn insert_after(&mut self, target: NodeId) -> Option<NodeId> {
        insert_after_in(&mut self.nodes, target)
    }

    /// Append a new blank node to the end of `target`'s sublist, creating
    /// the sublist if absent. Returns the new node's id.
    pub fn add_child(&mut self, target: NodeId) -> Option<NodeId> {
        add_child_in(&mut self.nodes, target)
    }

    /// Move `target` into the sublist of its immediately preceding sibling,
    /// appended at the end. The first node of a sibling list has no
    /// preceding sibling to adopt it, so indenting it is a no-op that still
    /// reports success. Returns false only when the target is absent.
    pub fn indent(&mut self, target: NodeId) -> bool {
        indent_in(&mut self.nodes, target)
    }

    /// Move `target` out of its parent's sublist to become the parent's
    /// next sibling, one level shallower. A target already at the top
    /// level has no parent context and is left unchanged (reported as
    /// not found).
    pub fn dedent(&mut self, target: NodeId) -> bool {
        dedent_in(&mut self.nodes, target)
    }

    /// Set `target`'s text and take it out of edit mode. Idempotent.
    pub fn commit_edit(&mut self, target: NodeId, text: &str) -> bool {
        commit_in(&mut self.nodes, target, text)
    }

    /// Append a character to `target`'s text. Only meaningful while the
    /// node is in edit mode; committed nodes are left untouched.
    pub fn push_char(&mut self, target: NodeId, ch: char) -> bool {
        edit_text_in(&mut self.nodes, target, &|text| text.push(ch))
    }

    /// Remove the last character of `target`'s text.
    pub fn pop_char(&mut self, target: NodeId) -> bool {
        edit_text_in(&mut self.nodes, target, &|text| {
            text.pop();
        })
    }
}

/// Lazy depth-first pre-order iterator over `(node, depth)` pairs.
pub struct Traverse<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some(children) = node.children.as_deref() {
            for child in children.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((node, depth))
    }
}

fn insert_after_in(list: &mut Vec<Node>, target: NodeId) -> Option<NodeId> {
    for i in 0..list.len() {
        if list[i].id == target {
            let fresh = Node::blank();
            let id = fresh.id;
            list.insert(i + 1, fresh);
            return Some(id);
        }
        if let Some(children) = list[i].children.as_mut() {
            if let Some(id) = insert_after_in(children, target) {
                return Some(id);
            }
        }
    }
    None
}

fn add_child_in(list: &mut [Node], target: NodeId) -> Option<NodeId> {
    for node in list.iter_mut() {
        if node.id == target {
            return Some(node.add_child());
        }
        if let Some(children) = node.children.as_deref_mut() {
            if let Some(id) = add_child_in(children, target) {
                return Some(id);
            }
        }
    }
    None
}

fn indent_in(list: &mut Vec<Node>, target: NodeId) -> bool {
    // Scan this level completely before descending anywhere.
    if let Some(i) = list.iter().position(|node| node.id == target) {
        if i > 0 {
            let node = list.remove(i);
            list[i - 1].children.get_or_insert_with(Vec::new).push(node);
        }
        return true;
    }
    for node in list.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if indent_in(children, target) {
                return true;
            }
        }
    }
    false
}

fn dedent_in(list: &mut Vec<Node>, target: NodeId) -> bool {
    for p in 0..list.len() {
        let hit = list[p]
            .children
            .as_deref()
            .and_then(|children| children.iter().position(|node| node.id == target));
        if let Some(i) = hit {
            // `list[p]` is the parent, `list` its grandparent list: the
            // target becomes the parent's next sibling at index p + 1.
            if let Some(children) = list[p].children.as_mut() {
                let node = children.remove(i);
                list.insert(p + 1, node);
            }
            return true;
        }
        if let Some(children) = list[p].children.as_mut() {
            if dedent_in(children, target) {
                return true;
            }
        }
    }
    false
}

fn commit_in(list: &mut [Node], target: NodeId, text: &str) -> bool {
    for node in list.iter_mut() {
        if node.id == target {
            node.text = text.to_string();
            node.editing = false;
            return true;
        }
        if let Some(children) = node.children.as_deref_mut() {
            if commit_in(children, target, text) {
                return true;
            }
        }
    }
    false
}

fn edit_text_in(list: &mut [Node], target: NodeId, apply: &dyn Fn(&mut String)) -> bool {
    for node in list.iter_mut() {
        if node.id == target {
            if node.editing {
                apply(&mut node.text);
            }
            return true;
        }
        if let Some(children) = node.children.as_deref_mut() {
            if edit_text_in(children, target, apply) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
