//! Block-level parser.
//!
//! The parser is line-oriented. Every line is first run through the open
//! containers (blockquotes, lists, list items), each stripping its own
//! prefix; what is left is dispatched to the container parsers, which
//! recurse back into the dispatcher for their children. It handles:
//! - Blockquotes
//! - Lists and list items, including tightness
//! - Paragraphs with lazy continuation
//! - Thematic breaks
//! - ATX headings
//! - Fenced and indented code blocks

mod blockquote;
mod context;
pub mod continuation;
mod leaf;
mod list;
mod parser;

pub use blockquote::{blockquote_marker_count, is_blockquote, trim_blockquote_marker};
pub use context::{ContainerStack, Context};
pub use continuation::{Continuation, interrupts_paragraph};
pub use leaf::{
    FenceState, is_closing_fence, is_fence_open, is_thematic_break, parse_atx_heading,
    parse_fence_open,
};
pub use list::{ListMarker, classify_tightness, parse_list_marker};
pub use parser::BlockParser;
