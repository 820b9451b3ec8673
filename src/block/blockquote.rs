//! Blockquote recognition, marker trimming and the blockquote parser.

use crate::error::Defect;
use crate::item::{ItemKind, Line};
use crate::trace::trace;
use crate::tree::NodeKind;

use super::continuation::{self, Continuation};
use super::parser::{BlockParser, NextLine};

/// Whether the first non-space item of `line` is `>`.
///
/// The line must hold at least one more item after it (the terminator).
pub fn is_blockquote(line: &Line) -> bool {
    if line.len() < 2 {
        return false;
    }
    let (_, marker) = line.first_non_space();
    marker.kind == ItemKind::Greater
}

/// Strip one blockquote marker level from `line`.
///
/// After left-trimming, consumes a single `>` and the one space that may
/// follow it; a tab after the marker leaves two columns of indentation.
/// A line without a leading marker comes back left-trimmed only, so each
/// call removes at most one nesting level.
pub fn trim_blockquote_marker(mut line: Line) -> Line {
    line.trim_left();
    if line.peek(0).map(|i| i.kind) != Some(ItemKind::Greater) {
        return line;
    }
    line.advance(1);
    match line.peek(0).map(|i| i.kind) {
        Some(ItemKind::Space) => line.advance(1),
        Some(ItemKind::Tab) => {
            line.advance(1);
            line.set_indent(2);
        }
        _ => {}
    }
    line
}

/// Number of `>` markers at the start of `line`, whitespace between them
/// allowed.
///
/// A public helper for callers inspecting raw lines; the parser itself only
/// reports it when a quote is flattened at the nesting limit.
pub fn blockquote_marker_count(line: &Line) -> usize {
    let mut rest = line.clone();
    rest.trim_left();
    let mut count = 0;
    for item in rest.items() {
        match item.kind {
            ItemKind::Greater => count += 1,
            ItemKind::Space | ItemKind::Tab => {}
            _ => break,
        }
    }
    count
}

impl BlockParser<'_> {
    /// Open a blockquote on `line` and parse its children until a line no
    /// longer carries its marker.
    pub(super) fn parse_blockquote(&mut self, line: Line) -> Result<(), Defect> {
        let mut line = trim_blockquote_marker(line);
        let id = self.open(NodeKind::Blockquote);
        let depth = self.ctx.stack.depth() - 1;
        trace!(depth, "open blockquote");

        loop {
            self.parse_block(line)?;

            let next = self.skip_blank_blockquote(depth);
            if next.matched > depth && !next.line.is_eof() {
                line = next.line;
                continue;
            }
            self.push_back(next);
            break;
        }

        trace!(depth, "close blockquote");
        self.ctx.stack.pop_expect(&mut self.tree, id)
    }

    /// Strip the marker of the innermost open blockquote from a lazy line.
    ///
    /// Only a marker the blockquote would accept is stripped: one indented 4
    /// or more columns is paragraph text and the line comes back unchanged.
    pub(super) fn trim_innermost_blockquote_marker(&self, line: Line) -> Line {
        let container = self.ctx.stack.innermost_container(&self.tree);
        if self.tree[container].kind != NodeKind::Blockquote {
            return line;
        }
        match continuation::blockquote(&line) {
            Continuation::Continues(rest) => rest,
            _ => line,
        }
    }

    /// Whether `line` lazily continues the open paragraph even though not
    /// every container around it matched.
    pub(super) fn is_paragraph_continuation(&self, line: &Line) -> bool {
        let container = self.ctx.stack.innermost_container(&self.tree);
        let Some(last) = self.tree[container].last_child() else {
            return false;
        };
        let last = &self.tree[last];
        if last.kind != NodeKind::Paragraph || !last.is_open() {
            return false;
        }

        let line = self.trim_innermost_blockquote_marker(line.clone());
        continuation::paragraph(&line, false, self.nesting_room()).continues()
    }

    /// Read past lines that carry the markers of the blockquote at `depth`
    /// but are blank after them. Returns the first other line.
    pub(super) fn skip_blank_blockquote(&mut self, depth: usize) -> NextLine {
        loop {
            let next = self.next_line();
            if next.line.is_eof() || next.matched <= depth || !next.line.is_blank() {
                return next;
            }
        }
    }
}
