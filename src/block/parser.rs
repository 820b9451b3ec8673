//! Block dispatcher and the line plumbing shared by the container parsers.

use crate::Options;
use crate::error::Defect;
use crate::item::Line;
use crate::lexer::Lexer;
use crate::limits::CODE_INDENT;
use crate::trace::trace;
use crate::tree::{NodeId, NodeKind, Tree};

use super::blockquote::is_blockquote;
use super::context::Context;
use super::continuation::{self, Continuation};
use super::leaf::{is_thematic_break, parse_atx_heading, parse_fence_open};
use super::list::parse_list_marker;

/// A line read through the open containers.
#[derive(Debug, Clone)]
pub(crate) struct NextLine {
    /// The line as the lexer produced it.
    pub raw: Line,
    /// The line with the prefixes of every matched container stripped.
    pub line: Line,
    /// Number of open nodes, from the document down, whose continuation
    /// test the line passed. The container at stack depth `d` continues iff
    /// `matched > d`.
    pub matched: usize,
}

/// Block parser state for one document.
pub struct BlockParser<'a> {
    pub(super) lexer: Lexer<'a>,
    pub(super) tree: Tree,
    pub(super) ctx: Context,
    pub(super) options: Options,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, Options::default())
    }

    pub fn with_options(input: &'a str, options: Options) -> Self {
        Self {
            lexer: Lexer::new(input),
            tree: Tree::new(),
            ctx: Context::new(),
            options,
        }
    }

    /// Parse all blocks and return the closed tree.
    pub fn parse(mut self) -> Result<Tree, Defect> {
        loop {
            let next = self.next_line();
            if next.line.is_eof() {
                break;
            }
            self.parse_block(next.line)?;
        }
        trace!(lines = self.lexer.line_no(), nodes = self.tree.len(), "document parsed");
        self.ctx.stack.pop_expect(&mut self.tree, NodeId::ROOT)?;
        Ok(self.tree)
    }

    /// Read the next line (the pushed-back one first) and run it through the
    /// open containers.
    pub(super) fn next_line(&mut self) -> NextLine {
        let raw = match self.ctx.take_backup() {
            Some(line) => line,
            None => self.lexer.next_line(),
        };
        let (line, matched) = self.match_containers(&raw);
        NextLine { raw, line, matched }
    }

    /// Hand a line back; the next [`next_line`](Self::next_line) re-reads it
    /// against whatever containers are open by then.
    pub(super) fn push_back(&mut self, next: NextLine) {
        self.ctx.backup_line(next.raw);
    }

    fn match_containers(&self, raw: &Line) -> (Line, usize) {
        let mut line = raw.clone();
        let mut matched = 1;
        if line.is_eof() {
            return (line, matched);
        }

        for depth in 1..self.ctx.stack.depth() {
            let Some(id) = self.ctx.stack.get(depth) else {
                break;
            };
            let node = &self.tree[id];
            let outcome = match &node.kind {
                NodeKind::Blockquote => continuation::blockquote(&line),
                // A list has no prefix of its own; its items decide.
                NodeKind::List(_) => {
                    matched += 1;
                    continue;
                }
                NodeKind::ListItem(item) => {
                    continuation::list_item(item, !node.children.is_empty(), &line)
                }
                _ => break,
            };
            match outcome {
                Continuation::Continues(rest) => {
                    line = rest;
                    matched += 1;
                }
                _ => break,
            }
        }
        (line, matched)
    }

    /// Create a node and push it as the new innermost open node.
    pub(super) fn open(&mut self, kind: NodeKind) -> NodeId {
        let id = self.tree.create(kind);
        self.ctx.stack.push(&mut self.tree, id);
        id
    }

    /// How many more containers may be opened before the nesting limit.
    pub(super) fn nesting_room(&self) -> usize {
        let mut open = self.ctx.stack.depth();
        if !self.ctx.stack.peek_type(&self.tree).is_container() {
            open -= 1;
        }
        self.options.max_nesting.saturating_sub(open)
    }

    /// Dispatch one line: open whatever block it starts inside the innermost
    /// container and parse that block to its end.
    pub(super) fn parse_block(&mut self, line: Line) -> Result<(), Defect> {
        if line.is_eof() || line.is_blank() {
            return Ok(());
        }
        if line.space_count_left() >= CODE_INDENT {
            return self.parse_indented_code(line);
        }

        // Thematic breaks win over list markers: `- - -` is a break
        if is_thematic_break(&line) {
            return self.append_leaf(NodeKind::ThematicBreak, Vec::new());
        }

        let room = self.nesting_room();
        if is_blockquote(&line) {
            if room >= 1 {
                return self.parse_blockquote(line);
            }
            trace!(
                depth = self.ctx.stack.depth(),
                markers = super::blockquote::blockquote_marker_count(&line),
                "nesting limit reached, blockquote read as text"
            );
            return self.parse_paragraph(line);
        }
        if let Some(marker) = parse_list_marker(&line) {
            if room >= 2 {
                return self.parse_list(marker);
            }
            trace!(
                depth = self.ctx.stack.depth(),
                marker = marker.marker.as_str(),
                "nesting limit reached, list item read as text"
            );
            return self.parse_paragraph(line);
        }

        if let Some((level, content)) = parse_atx_heading(&line) {
            return self.append_leaf(NodeKind::Heading { level }, content);
        }
        if let Some(fence) = parse_fence_open(&line) {
            return self.parse_fenced_code(fence);
        }
        self.parse_paragraph(line)
    }
}
