//! List marker recognition, tightness classification and the list and
//! list-item parsers.

use smallvec::SmallVec;

use crate::error::Defect;
use crate::item::{ItemKind, Line};
use crate::limits::{CODE_INDENT, MAX_LIST_MARKER_DIGITS};
use crate::trace::trace;
use crate::tree::{ListData, ListItem, ListKind, NodeId, NodeKind};

use super::leaf::is_thematic_break;
use super::parser::BlockParser;

/// A recognised list item marker and the indentation arithmetic around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    /// Marker text as written, e.g. `*` or `12.`.
    pub marker: String,
    /// Columns of indentation in front of the marker.
    pub start_indent_spaces: usize,
    /// Columns of gap after the marker counted towards the content
    /// indentation, clamped to 1..=4.
    pub gap: usize,
    /// Required indentation of the item's children:
    /// `start_indent_spaces + marker width + gap`.
    pub indent_spaces: usize,
    /// The line after the marker and its gap.
    pub remains: Line,
}

impl ListMarker {
    #[inline]
    pub fn width(&self) -> usize {
        self.marker.len()
    }

    #[inline]
    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, ListKind::Bullet { .. })
    }

    /// Start number of an ordered marker; 0 for bullets.
    #[inline]
    pub fn start(&self) -> u32 {
        match self.kind {
            ListKind::Ordered { start, .. } => start,
            ListKind::Bullet { .. } => 0,
        }
    }
}

/// Recognise a list item marker at the start of `line`.
///
/// Bullets are `*`, `-` and `+`; ordered markers are up to nine digits
/// followed by `.` or `)`. The marker must be followed by a space, a tab or
/// the end of the line.
///
/// A gap of more than 4 columns after the marker, or none at all, counts as
/// a single column: the content then starts one column after the marker and
/// anything further in is indented relative to it.
pub fn parse_list_marker(line: &Line) -> Option<ListMarker> {
    let lead = line.leading_whitespace();
    if lead.columns() >= CODE_INDENT {
        return None;
    }
    let start_indent_spaces = lead.columns();

    let mut rest = line.clone();
    rest.trim_left();
    let first = rest.peek(0)?;

    let (kind, width) = match first.kind {
        ItemKind::Asterisk | ItemKind::Hyphen | ItemKind::Plus => {
            (ListKind::Bullet { marker: first.byte }, 1)
        }
        ItemKind::Digit => {
            let digits = rest
                .items()
                .iter()
                .take_while(|i| i.kind == ItemKind::Digit)
                .count();
            if digits > MAX_LIST_MARKER_DIGITS {
                return None;
            }
            let delimiter = rest.peek(digits)?;
            if !matches!(delimiter.kind, ItemKind::Dot | ItemKind::CloseParen) {
                return None;
            }
            let start = rest.items()[..digits]
                .iter()
                .fold(0u32, |n, i| n * 10 + u32::from(i.byte - b'0'));
            (
                ListKind::Ordered {
                    start,
                    delimiter: delimiter.byte,
                },
                digits + 1,
            )
        }
        _ => return None,
    };

    let after = rest.peek(width)?;
    if !matches!(after.kind, ItemKind::Space | ItemKind::Tab | ItemKind::Newline) {
        return None;
    }

    let marker: String = rest.items()[..width]
        .iter()
        .map(|i| char::from(i.byte))
        .collect();
    rest.advance(width);

    let raw_gap = rest.leading_whitespace().columns();
    let blank = rest.is_blank();
    let gap = if blank || !(1..=4).contains(&raw_gap) {
        1
    } else {
        raw_gap
    };
    if !blank {
        rest.indent_offset(gap);
    }

    Some(ListMarker {
        kind,
        marker,
        start_indent_spaces,
        gap,
        indent_spaces: start_indent_spaces + width + gap,
        remains: rest,
    })
}

/// Decide an item's tightness from the dispatch iterations after which a
/// run of blank lines was skipped.
///
/// No blank runs: tight. More than one: loose. Exactly one: tight only if it
/// came after the final iteration, i.e. it trails the item instead of
/// separating two of its children.
pub fn classify_tightness(blank_line_indices: &[usize], iterations: usize) -> bool {
    match blank_line_indices {
        [] => true,
        [only] => *only == iterations,
        _ => false,
    }
}

impl BlockParser<'_> {
    /// Parse a list starting with `marker`, then every following sibling
    /// item of the same kind.
    pub(super) fn parse_list(&mut self, marker: ListMarker) -> Result<(), Defect> {
        let kind = marker.kind;
        let list = self.open(NodeKind::List(ListData { kind, tight: true }));
        let depth = self.ctx.stack.depth() - 1;
        trace!(depth, marker = marker.marker.as_str(), "open list");

        let mut marker = marker;
        loop {
            self.parse_list_item(marker)?;

            self.skip_blank_lines(depth);
            let next = self.next_line();
            if next.matched > depth && !next.line.is_eof() && !is_thematic_break(&next.line) {
                if let Some(sibling) = parse_list_marker(&next.line) {
                    if kind.same_list(sibling.kind) {
                        marker = sibling;
                        continue;
                    }
                }
            }
            self.push_back(next);
            break;
        }

        let tight = self
            .tree
            .children(list)
            .iter()
            .all(|&child| self.tree[child].as_list_item().is_none_or(|item| item.tight));
        if let NodeKind::List(data) = &mut self.tree.node_mut(list).kind {
            data.tight = tight;
        }
        trace!(depth, tight, "close list");
        self.ctx.stack.pop_expect(&mut self.tree, list)
    }

    /// Parse one list item: its marker line, then every following line
    /// indented at least the item's required indentation.
    pub(super) fn parse_list_item(&mut self, marker: ListMarker) -> Result<(), Defect> {
        if marker.width() == 0 {
            return Err(Defect::EmptyMarker);
        }
        let ListMarker {
            kind,
            marker,
            start_indent_spaces,
            indent_spaces,
            remains,
            ..
        } = marker;

        let id = self.open(NodeKind::ListItem(ListItem {
            kind,
            tight: true,
            marker,
            start_indent_spaces,
            indent_spaces,
        }));
        let depth = self.ctx.stack.depth() - 1;

        let mut line = remains;
        if line.is_blank() {
            // Blank marker line: the item continues only if the very next line
            // is content indented under it.
            let next = self.next_line();
            if next.matched > depth && !next.line.is_eof() {
                line = next.line;
            } else {
                if next.line.is_blank() {
                    self.set_item_tight(id, false);
                }
                self.push_back(next);
                return self.ctx.stack.pop_expect(&mut self.tree, id);
            }
        }

        let mut blank_line_indices: SmallVec<[usize; 4]> = SmallVec::new();
        let mut i = 0;
        loop {
            self.parse_block(line)?;

            if self.skip_blank_lines(depth) > 0 {
                blank_line_indices.push(i);
            }

            let next = self.next_line();
            if next.matched > depth && !next.line.is_eof() {
                line = next.line;
                i += 1;
                continue;
            }
            self.push_back(next);
            break;
        }

        let tight = classify_tightness(&blank_line_indices, i);
        self.set_item_tight(id, tight);
        trace!(depth, tight, iterations = i, "close list item");
        self.ctx.stack.pop_expect(&mut self.tree, id)
    }

    /// Read past blank lines that every container up to `depth` matched.
    /// Returns how many were skipped.
    pub(super) fn skip_blank_lines(&mut self, depth: usize) -> usize {
        let mut skipped = 0;
        loop {
            let next = self.next_line();
            if next.matched > depth && next.line.is_blank() {
                skipped += 1;
                continue;
            }
            self.push_back(next);
            return skipped;
        }
    }

    fn set_item_tight(&mut self, id: NodeId, tight: bool) {
        if let NodeKind::ListItem(item) = &mut self.tree.node_mut(id).kind {
            item.tight = tight;
        }
    }
}
