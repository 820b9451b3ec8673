//! Block container stack and per-document parser context.

use crate::error::Defect;
use crate::item::Line;
use crate::tree::{NodeId, NodeKind, Tree};

/// Currently open nodes, outermost (the document) first.
///
/// Every entry is the parent of the entry after it, and no entry is closed.
#[derive(Debug, Clone)]
pub struct ContainerStack {
    ids: Vec<NodeId>,
}

impl Default for ContainerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerStack {
    /// A stack holding the document root.
    pub fn new() -> Self {
        Self {
            ids: vec![NodeId::ROOT],
        }
    }

    /// Number of open nodes, document included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    /// Node at `depth` (0 is the document).
    #[inline]
    pub fn get(&self, depth: usize) -> Option<NodeId> {
        self.ids.get(depth).copied()
    }

    /// Link `id` as the last child of the innermost node and make it the new
    /// innermost node.
    pub fn push(&mut self, tree: &mut Tree, id: NodeId) {
        tree.append_child(self.peek(), id);
        self.ids.push(id);
    }

    /// Close and remove the innermost node.
    pub fn pop(&mut self, tree: &mut Tree) -> Result<NodeId, Defect> {
        let id = self.ids.pop().ok_or(Defect::EmptyStack)?;
        tree.close(id);
        Ok(id)
    }

    /// Pop, checking that the innermost node is `expected`.
    pub fn pop_expect(&mut self, tree: &mut Tree, expected: NodeId) -> Result<(), Defect> {
        let found = self.pop(tree)?;
        if found == expected {
            Ok(())
        } else {
            Err(Defect::UnbalancedStack {
                expected: expected.index(),
                found: found.index(),
            })
        }
    }

    /// Innermost open node; the document once everything else is closed.
    #[inline]
    pub fn peek(&self) -> NodeId {
        self.ids.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Kind of the innermost open node.
    #[inline]
    pub fn peek_type<'t>(&self, tree: &'t Tree) -> &'t NodeKind {
        &tree[self.peek()].kind
    }

    /// Innermost open node that can own blocks (skips an open leaf).
    pub fn innermost_container(&self, tree: &Tree) -> NodeId {
        self.ids
            .iter()
            .rev()
            .copied()
            .find(|&id| tree[id].kind.is_container())
            .unwrap_or(NodeId::ROOT)
    }
}

/// Mutable state of one parsing pass over one document.
#[derive(Debug, Default)]
pub struct Context {
    /// Open nodes. Each open list item carries its own required
    /// indentation, so the innermost requirement is read off the stack.
    pub stack: ContainerStack,
    /// One line of lookahead handed back by a parser that over-read.
    backup: Option<Line>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand a raw line back; the next read returns it again.
    pub fn backup_line(&mut self, line: Line) {
        debug_assert!(self.backup.is_none(), "pushback slot already holds a line");
        self.backup = Some(line);
    }

    pub fn take_backup(&mut self) -> Option<Line> {
        self.backup.take()
    }
}
