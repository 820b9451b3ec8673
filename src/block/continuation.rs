//! Continuation classifiers.
//!
//! One pure function per open node kind decides what a line means for that
//! node: it continues it (with the node's prefix stripped), it is swallowed
//! by it (consumed, closing the node), or it fails to continue it.

use crate::item::Line;
use crate::limits::CODE_INDENT;
use crate::tree::ListItem;

use super::blockquote::{is_blockquote, trim_blockquote_marker};
use super::leaf::{FenceState, is_closing_fence, is_fence_open, is_thematic_break, parse_atx_heading};
use super::list::parse_list_marker;

/// What a line means for one open node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// The line continues the node; the node's prefix has been stripped.
    Continues(Line),
    /// The line belongs to the node and closes it.
    Swallowed,
    /// The node does not continue on this line.
    Fails,
}

impl Continuation {
    #[inline]
    pub fn continues(&self) -> bool {
        matches!(self, Continuation::Continues(_))
    }
}

/// A blockquote continues on a line whose first non-space item, indented
/// less than 4 columns, is `>`.
pub fn blockquote(line: &Line) -> Continuation {
    if line.is_eof() || line.space_count_left() >= CODE_INDENT || !is_blockquote(line) {
        return Continuation::Fails;
    }
    Continuation::Continues(trim_blockquote_marker(line.clone()))
}

/// A list item continues on a blank line once it has content, and on any
/// line indented at least its required indentation.
pub fn list_item(item: &ListItem, has_children: bool, line: &Line) -> Continuation {
    if line.is_eof() {
        return Continuation::Fails;
    }
    if line.is_blank() {
        return if has_children {
            Continuation::Continues(line.clone())
        } else {
            Continuation::Fails
        };
    }
    if line.space_count_left() < item.indent_spaces {
        return Continuation::Fails;
    }
    let mut rest = line.clone();
    rest.indent_offset(item.indent_spaces);
    Continuation::Continues(rest)
}

/// A paragraph continues on a non-blank line that does not interrupt it.
///
/// `strict` is set when every container around the paragraph matched the
/// line; otherwise the line can only be a lazy continuation.
pub fn paragraph(line: &Line, strict: bool, room: usize) -> Continuation {
    if line.is_eof() || line.is_blank() || interrupts_paragraph(line, strict, room) {
        return Continuation::Fails;
    }
    Continuation::Continues(line.clone())
}

/// A fenced code block swallows its closing fence and continues on every
/// other line, losing up to the opening fence's indentation.
pub fn fenced_code(fence: &FenceState, line: &Line) -> Continuation {
    if line.is_eof() {
        return Continuation::Fails;
    }
    if is_closing_fence(fence, line) {
        return Continuation::Swallowed;
    }
    let mut rest = line.clone();
    rest.indent_offset(fence.indent);
    Continuation::Continues(rest)
}

/// Indented code continues on blank lines and lines indented 4+ columns.
pub fn indented_code(line: &Line) -> Continuation {
    if line.is_eof() {
        return Continuation::Fails;
    }
    if line.is_blank() || line.space_count_left() >= CODE_INDENT {
        let mut rest = line.clone();
        rest.indent_offset(CODE_INDENT);
        return Continuation::Continues(rest);
    }
    Continuation::Fails
}

/// Whether `line` starts a block that closes an open paragraph.
///
/// `room` is how many more containers may be opened; a blockquote needs one,
/// a list two (list and item). In `strict` mode a list item only interrupts
/// when it has content and is a bullet or starts at 1.
pub fn interrupts_paragraph(line: &Line, strict: bool, room: usize) -> bool {
    if line.space_count_left() >= CODE_INDENT {
        return false;
    }
    if is_thematic_break(line) || parse_atx_heading(line).is_some() || is_fence_open(line) {
        return true;
    }
    if is_blockquote(line) {
        return room >= 1;
    }
    match parse_list_marker(line) {
        Some(marker) if room >= 2 => {
            !strict || (!marker.remains.is_blank() && (marker.is_bullet() || marker.start() == 1))
        }
        _ => false,
    }
}
