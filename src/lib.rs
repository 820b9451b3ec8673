//! ferroblock: the block-container engine of a CommonMark-style parser
//!
//! This crate turns Markdown source into a tree of block nodes (document,
//! blockquotes, lists, list items, paragraphs, headings, code blocks) with
//! list tightness resolved. Inline parsing and rendering happen elsewhere;
//! consumers walk the tree with a [`Visitor`].
//!
//! # Design Principles
//! - Arena tree: nodes addressed by [`NodeId`], no ownership cycles
//! - No regex: byte-level classification into typed items
//! - One line of lookahead, handed back through a single pushback slot
//! - Bounded nesting: container markers past [`Options::max_nesting`] are read
//!   as text
//! - Never fails on input: [`Defect`] only reports internal invariant
//!   violations
//!
//! # Example
//! ```
//! let tree = ferroblock::parse("- a\n- b\n").unwrap();
//! let list = tree.children(tree.root())[0];
//! assert_eq!(tree.children(list).len(), 2);
//! assert!(tree[list].as_list().unwrap().tight);
//! ```

pub mod block;
pub mod error;
pub mod item;
pub mod lexer;
pub mod limits;
pub mod range;
mod trace;
pub mod tree;

// Re-export primary types
pub use block::BlockParser;
pub use error::Defect;
pub use item::{Item, ItemKind, Line};
pub use lexer::Lexer;
pub use range::Range;
pub use tree::{
    CodeBlock, ListData, ListItem, ListKind, Node, NodeId, NodeKind, Tree, Visitor, WalkStatus,
};

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of open containers, the document included. A
    /// blockquote or list marker that would exceed it is read as paragraph
    /// text.
    pub max_nesting: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_nesting: limits::MAX_BLOCK_NESTING,
        }
    }
}

/// Parse Markdown into a block tree.
///
/// This is the primary API for simple use cases. Every input produces a
/// tree; an `Err` means the parser itself is broken.
pub fn parse(input: &str) -> Result<Tree, Defect> {
    parse_with_options(input, Options::default())
}

/// Parse Markdown into a block tree with options.
pub fn parse_with_options(input: &str, options: Options) -> Result<Tree, Defect> {
    BlockParser::with_options(input, options).parse()
}
