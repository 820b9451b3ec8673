//! Arena-backed block tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. A parent
//! owns the ordered list of its children; `parent`/`prev`/`next` are plain
//! indices, so the tree has no ownership cycles and clones trivially.

mod node;
mod walk;

pub use node::{CodeBlock, ListData, ListItem, ListKind, Node, NodeId, NodeKind};
pub use walk::{Visitor, WalkStatus};

use std::ops::Index;

use crate::item::{Item, ItemKind};
use crate::range::Range;

/// The parsed block tree, rooted at a `Document` node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// A tree holding only an open document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Children of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    /// All node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Create a detached node.
    pub(crate) fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind));
        id
    }

    /// Append `child` as the last child of `parent`, linking siblings.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev = self[parent].last_child();
        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(child);
        }
        let node = self.node_mut(child);
        node.parent = Some(parent);
        node.prev = prev;
        node.next = None;
        self.node_mut(parent).children.push(child);
    }

    /// Append items to a leaf's content.
    pub(crate) fn push_content(&mut self, id: NodeId, items: impl IntoIterator<Item = Item>) {
        self.node_mut(id).content.extend(items);
    }

    /// Close `id`, closing its still-open descendants first.
    ///
    /// Only the last child of an open node can still be open, so the open
    /// descendants form a single chain.
    pub(crate) fn close(&mut self, id: NodeId) {
        let mut chain = vec![id];
        let mut cur = id;
        while let Some(last) = self[cur].last_child() {
            if !self[last].open {
                break;
            }
            chain.push(last);
            cur = last;
        }
        while let Some(node) = chain.pop() {
            self.finalize(node);
        }
    }

    fn finalize(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        if !node.open {
            return;
        }
        node.open = false;
        match &node.kind {
            NodeKind::Paragraph | NodeKind::Heading { .. } => {
                while node.content.last().is_some_and(Item::is_whitespace) {
                    node.content.pop();
                }
            }
            NodeKind::CodeBlock(code) if !code.fenced => trim_trailing_blank_lines(&mut node.content),
            _ => {}
        }
        node.span = span_of(&node.content);
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

fn span_of(content: &[Item]) -> Option<Range> {
    let first = content.first()?;
    let last = content.last()?;
    Some(Range::new(first.offset, last.offset + 1))
}

/// Drop whole blank lines from the end of newline-terminated code content.
fn trim_trailing_blank_lines(content: &mut Vec<Item>) {
    loop {
        let Some(body_end) = content.len().checked_sub(1) else {
            return;
        };
        let line_start = content[..body_end]
            .iter()
            .rposition(|i| i.kind == ItemKind::Newline)
            .map_or(0, |p| p + 1);
        if content[line_start..body_end].iter().all(Item::is_space_or_tab) {
            content.truncate(line_start);
        } else {
            return;
        }
    }
}
