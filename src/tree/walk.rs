//! Pre/post-order traversal for tree consumers.

use std::fmt::Write;

use super::{NodeId, NodeKind, Tree};

/// What a visitor wants the walk to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Descend into children (on enter) or carry on (on leave).
    Continue,
    /// Do not visit the children; `leave` is still called.
    SkipChildren,
    /// End the walk immediately.
    Stop,
}

/// Callbacks invoked by [`Tree::walk`].
pub trait Visitor {
    fn enter(&mut self, tree: &Tree, id: NodeId) -> WalkStatus;

    fn leave(&mut self, _tree: &Tree, _id: NodeId) -> WalkStatus {
        WalkStatus::Continue
    }
}

enum Step {
    Enter(NodeId),
    Leave(NodeId),
}

impl Tree {
    /// Walk the tree depth first from the root.
    ///
    /// Uses a heap stack, so arbitrarily deep trees cannot overflow the call
    /// stack. Returns `false` if the visitor stopped the walk.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> bool {
        let mut steps = vec![Step::Enter(self.root())];
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(id) => {
                    let status = visitor.enter(self, id);
                    if status == WalkStatus::Stop {
                        return false;
                    }
                    steps.push(Step::Leave(id));
                    if status == WalkStatus::Continue {
                        steps.extend(self.children(id).iter().rev().map(|&c| Step::Enter(c)));
                    }
                }
                Step::Leave(id) => {
                    if visitor.leave(self, id) == WalkStatus::Stop {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Indented one-line-per-node dump of the tree.
    ///
    /// ```
    /// let tree = ferroblock::parse("> a\n> b\n").unwrap();
    /// assert_eq!(tree.outline(), "Document\n  Blockquote\n    Paragraph \"a\\nb\"\n");
    /// ```
    pub fn outline(&self) -> String {
        let mut printer = Outline::default();
        self.walk(&mut printer);
        printer.out
    }
}

#[derive(Default)]
struct Outline {
    out: String,
    depth: usize,
}

impl Visitor for Outline {
    fn enter(&mut self, tree: &Tree, id: NodeId) -> WalkStatus {
        let node = &tree[id];
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(node.kind.name());
        match &node.kind {
            NodeKind::List(list) => {
                let _ = write!(self.out, " tight={}", list.tight);
            }
            NodeKind::ListItem(item) => {
                let _ = write!(self.out, " {:?} tight={}", item.marker, item.tight);
            }
            NodeKind::Heading { level } => {
                let _ = write!(self.out, " h{level} {:?}", node.text());
            }
            NodeKind::CodeBlock(code) => {
                if let Some(info) = &code.info {
                    let _ = write!(self.out, " info={info:?}");
                }
                let _ = write!(self.out, " {:?}", node.text());
            }
            NodeKind::Paragraph => {
                let _ = write!(self.out, " {:?}", node.text());
            }
            _ => {}
        }
        self.out.push('\n');
        self.depth += 1;
        WalkStatus::Continue
    }

    fn leave(&mut self, _tree: &Tree, _id: NodeId) -> WalkStatus {
        self.depth -= 1;
        WalkStatus::Continue
    }
}
