//! Node kinds of the block tree.

use crate::item::Item;
use crate::range::Range;

/// Stable index of a node in a [`Tree`](super::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document root; always the first node.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ListKind {
    /// Unordered list; `marker` is `*`, `-` or `+`.
    Bullet { marker: u8 },
    /// Ordered list with starting number and delimiter.
    Ordered {
        /// Starting number.
        start: u32,
        /// Delimiter character ('.' or ')').
        delimiter: u8,
    },
}

impl ListKind {
    /// Whether an item with kind `other` continues a list of this kind.
    ///
    /// Bullets must use the same character, ordered items the same
    /// delimiter; the number of a following item does not matter.
    pub fn same_list(self, other: ListKind) -> bool {
        match (self, other) {
            (ListKind::Bullet { marker: a }, ListKind::Bullet { marker: b }) => a == b,
            (ListKind::Ordered { delimiter: a, .. }, ListKind::Ordered { delimiter: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

/// A list container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListData {
    /// Kind of the first item.
    pub kind: ListKind,
    /// Conjunction of the items' tightness, set when the list closes.
    pub tight: bool,
}

/// A list item container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListItem {
    pub kind: ListKind,
    /// Whether the item's children are separated without blank lines.
    /// Mutable until the item closes.
    pub tight: bool,
    /// Marker text as written, e.g. `-` or `12.`.
    pub marker: String,
    /// Indentation in front of the marker.
    pub start_indent_spaces: usize,
    /// Indentation a line needs to continue this item.
    pub indent_spaces: usize,
}

impl ListItem {
    #[inline]
    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, ListKind::Bullet { .. })
    }

    /// Start number of an ordered item; 0 for bullets.
    #[inline]
    pub fn start(&self) -> u32 {
        match self.kind {
            ListKind::Ordered { start, .. } => start,
            ListKind::Bullet { .. } => 0,
        }
    }

    /// `.` or `)` for ordered items, a space for bullets.
    #[inline]
    pub fn delimiter(&self) -> u8 {
        match self.kind {
            ListKind::Ordered { delimiter, .. } => delimiter,
            ListKind::Bullet { .. } => b' ',
        }
    }
}

/// A fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeBlock {
    pub fenced: bool,
    /// Info string of a fenced block, trimmed.
    pub info: Option<String>,
}

impl CodeBlock {
    /// First word of the info string.
    pub fn language(&self) -> Option<&str> {
        self.info
            .as_deref()
            .and_then(|info| info.split_whitespace().next())
    }
}

/// Block node kinds.
///
/// Consumers should treat kinds they do not recognise as opaque
/// pass-through containers; new kinds may be added.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum NodeKind {
    Document,
    Blockquote,
    List(ListData),
    ListItem(ListItem),
    Paragraph,
    Heading { level: u8 },
    ThematicBreak,
    CodeBlock(CodeBlock),
}

impl NodeKind {
    /// Short name used in outlines and traces.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::List(_) => "List",
            NodeKind::ListItem(_) => "ListItem",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::CodeBlock(_) => "CodeBlock",
        }
    }

    /// Whether the kind can own block children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::Blockquote | NodeKind::List(_) | NodeKind::ListItem(_)
        )
    }
}

/// One node of the block tree.
///
/// `parent`, `prev` and `next` are plain indices used for navigation only;
/// ownership runs through `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Leaf content; empty for containers.
    pub content: Vec<Item>,
    /// Source span of `content`, recorded on close.
    pub span: Option<Range>,
    pub(crate) open: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            prev: None,
            next: None,
            children: Vec::new(),
            content: Vec::new(),
            span: None,
            open: true,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    #[inline]
    pub fn last_child(&self) -> Option<NodeId> {
        self.children.last().copied()
    }

    /// Leaf content as text. Lines of a paragraph are joined by `\n`.
    pub fn text(&self) -> String {
        let bytes: Vec<u8> = self.content.iter().map(|i| i.byte).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn as_list_item(&self) -> Option<&ListItem> {
        match &self.kind {
            NodeKind::ListItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListData> {
        match &self.kind {
            NodeKind::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match &self.kind {
            NodeKind::CodeBlock(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_list() {
        let dash = ListKind::Bullet { marker: b'-' };
        let star = ListKind::Bullet { marker: b'*' };
        let dot = ListKind::Ordered {
            start: 1,
            delimiter: b'.',
        };
        let dot_later = ListKind::Ordered {
            start: 7,
            delimiter: b'.',
        };
        let paren = ListKind::Ordered {
            start: 1,
            delimiter: b')',
        };
        assert!(dash.same_list(dash));
        assert!(!dash.same_list(star));
        assert!(dot.same_list(dot_later));
        assert!(!dot.same_list(paren));
        assert!(!dash.same_list(dot));
    }

    #[test]
    fn test_list_item_accessors() {
        let item = ListItem {
            kind: ListKind::Ordered {
                start: 12,
                delimiter: b')',
            },
            tight: true,
            marker: "12)".to_string(),
            start_indent_spaces: 0,
            indent_spaces: 4,
        };
        assert!(!item.is_bullet());
        assert_eq!(item.start(), 12);
        assert_eq!(item.delimiter(), b')');
    }

    #[test]
    fn test_code_language() {
        let code = CodeBlock {
            fenced: true,
            info: Some("rust ignore".to_string()),
        };
        assert_eq!(code.language(), Some("rust"));
        let bare = CodeBlock {
            fenced: false,
            info: None,
        };
        assert_eq!(bare.language(), None);
    }
}
