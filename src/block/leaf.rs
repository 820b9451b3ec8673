//! Leaf blocks: thematic breaks, ATX headings, fenced and indented code, and
//! paragraphs.

use crate::error::Defect;
use crate::item::{Item, ItemKind, Line};
use crate::limits::{CODE_INDENT, MIN_FENCE_LEN, MIN_THEMATIC_BREAK_MARKERS};
use crate::tree::{CodeBlock, NodeKind};

use super::continuation::{self, Continuation};
use super::parser::BlockParser;

/// An open code fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceState {
    /// `` ` `` or `~`.
    pub fence_char: u8,
    pub fence_len: usize,
    /// Columns of indentation in front of the opening fence.
    pub indent: usize,
    pub info: Option<String>,
}

/// Whether `line` is a thematic break: three or more of the same `*`, `-`
/// or `_`, optionally separated by spaces or tabs.
pub fn is_thematic_break(line: &Line) -> bool {
    if line.is_eof() || line.space_count_left() >= CODE_INDENT {
        return false;
    }
    let (_, first) = line.first_non_space();
    if !matches!(
        first.kind,
        ItemKind::Asterisk | ItemKind::Hyphen | ItemKind::Underscore
    ) {
        return false;
    }

    let mut count = 0;
    for item in line.items() {
        match item.kind {
            ItemKind::Newline | ItemKind::Eof => break,
            ItemKind::Space | ItemKind::Tab => {}
            k if k == first.kind => count += 1,
            _ => return false,
        }
    }
    count >= MIN_THEMATIC_BREAK_MARKERS
}

/// Parse an ATX heading, returning its level and content items.
pub fn parse_atx_heading(line: &Line) -> Option<(u8, Vec<Item>)> {
    if line.is_eof() || line.space_count_left() >= CODE_INDENT {
        return None;
    }
    let mut rest = line.clone();
    rest.trim_left();

    // Count # characters (1-6)
    let level = rest
        .items()
        .iter()
        .take_while(|i| i.kind == ItemKind::Hash)
        .count();
    if level == 0 || level > 6 {
        return None;
    }

    // Must be followed by space, tab, or end of line
    let after = rest.peek(level)?;
    if !after.is_whitespace() {
        return None;
    }
    rest.advance(level);
    rest.trim_left();

    let mut content: Vec<Item> = rest.content().collect();
    trim_heading_end(&mut content);
    Some((level as u8, content))
}

/// Trim trailing whitespace and an optional closing `#` run.
fn trim_heading_end(content: &mut Vec<Item>) {
    while content.last().is_some_and(Item::is_space_or_tab) {
        content.pop();
    }

    // Check for closing # sequence
    let hashes = content
        .iter()
        .rev()
        .take_while(|i| i.kind == ItemKind::Hash)
        .count();
    if hashes == 0 {
        return;
    }
    let before = content.len() - hashes;

    // Closing hashes must be preceded by whitespace (or be everything)
    if before == 0 || content[before - 1].is_space_or_tab() {
        content.truncate(before);
        while content.last().is_some_and(Item::is_space_or_tab) {
            content.pop();
        }
    }
}

/// Parse a code fence opening line.
pub fn parse_fence_open(line: &Line) -> Option<FenceState> {
    if line.is_eof() {
        return None;
    }
    let indent = line.space_count_left();
    if indent >= CODE_INDENT {
        return None;
    }
    let mut rest = line.clone();
    rest.trim_left();

    let first = rest.peek(0)?;
    if !matches!(first.kind, ItemKind::Backtick | ItemKind::Tilde) {
        return None;
    }
    let fence_len = rest
        .items()
        .iter()
        .take_while(|i| i.kind == first.kind)
        .count();
    if fence_len < MIN_FENCE_LEN {
        return None;
    }
    rest.advance(fence_len);
    rest.trim_left();

    // For backtick fences, info string cannot contain backticks
    if first.kind == ItemKind::Backtick && rest.content().any(|i| i.kind == ItemKind::Backtick) {
        return None;
    }

    let info = rest.text();
    let info = info.trim_end_matches([' ', '\t']);
    Some(FenceState {
        fence_char: first.byte,
        fence_len,
        indent,
        info: (!info.is_empty()).then(|| info.to_string()),
    })
}

#[inline]
pub fn is_fence_open(line: &Line) -> bool {
    parse_fence_open(line).is_some()
}

/// Whether `line` closes the fence: a run of the fence character at least as
/// long as the opening one, indented less than 4 columns, followed only by
/// whitespace.
pub fn is_closing_fence(fence: &FenceState, line: &Line) -> bool {
    if line.is_eof() || line.space_count_left() >= CODE_INDENT {
        return false;
    }
    let mut rest = line.clone();
    rest.trim_left();
    let closing_len = rest
        .items()
        .iter()
        .take_while(|i| i.byte == fence.fence_char)
        .count();
    if closing_len < fence.fence_len {
        return false;
    }
    rest.advance(closing_len);
    rest.content().all(|i| i.is_space_or_tab())
}

impl BlockParser<'_> {
    /// Append a closed leaf to the innermost container.
    pub(super) fn append_leaf(&mut self, kind: NodeKind, content: Vec<Item>) -> Result<(), Defect> {
        let id = self.open(kind);
        self.tree.push_content(id, content);
        self.ctx.stack.pop_expect(&mut self.tree, id)
    }

    /// Parse a paragraph starting at `line`, absorbing continuation lines
    /// (lazy ones included) until something interrupts it.
    pub(super) fn parse_paragraph(&mut self, mut line: Line) -> Result<(), Defect> {
        let id = self.open(NodeKind::Paragraph);
        let depth = self.ctx.stack.depth() - 1;

        loop {
            line.trim_left();
            self.tree.push_content(id, line.content());
            self.tree.push_content(id, [line.terminator()]);

            let next = self.next_line();
            let lazy = next.matched < depth;
            let continues = if next.line.is_eof() {
                false
            } else if lazy {
                self.is_paragraph_continuation(&next.line)
            } else {
                continuation::paragraph(&next.line, true, self.nesting_room()).continues()
            };
            if !continues {
                self.push_back(next);
                break;
            }
            line = if lazy {
                self.trim_innermost_blockquote_marker(next.line)
            } else {
                next.line
            };
        }

        self.ctx.stack.pop_expect(&mut self.tree, id)
    }

    /// Parse a fenced code block whose opening line has been consumed.
    pub(super) fn parse_fenced_code(&mut self, fence: FenceState) -> Result<(), Defect> {
        let id = self.open(NodeKind::CodeBlock(CodeBlock {
            fenced: true,
            info: fence.info.clone(),
        }));
        let depth = self.ctx.stack.depth() - 1;

        loop {
            let next = self.next_line();
            if next.matched < depth {
                self.push_back(next);
                break;
            }
            match continuation::fenced_code(&fence, &next.line) {
                Continuation::Continues(line) => {
                    self.tree.push_content(id, line.content());
                    self.tree.push_content(id, [line.terminator()]);
                }
                Continuation::Swallowed => break,
                Continuation::Fails => {
                    self.push_back(next);
                    break;
                }
            }
        }

        self.ctx.stack.pop_expect(&mut self.tree, id)
    }

    /// Parse an indented code block starting at `line`.
    pub(super) fn parse_indented_code(&mut self, mut line: Line) -> Result<(), Defect> {
        let id = self.open(NodeKind::CodeBlock(CodeBlock {
            fenced: false,
            info: None,
        }));
        let depth = self.ctx.stack.depth() - 1;

        line.indent_offset(CODE_INDENT);
        loop {
            self.tree.push_content(id, line.content());
            self.tree.push_content(id, [line.terminator()]);

            let next = self.next_line();
            if next.matched < depth {
                self.push_back(next);
                break;
            }
            match continuation::indented_code(&next.line) {
                Continuation::Continues(rest) => line = rest,
                _ => {
                    self.push_back(next);
                    break;
                }
            }
        }

        self.ctx.stack.pop_expect(&mut self.tree, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn line(s: &str) -> Line {
        Lexer::new(s).next_line()
    }

    fn heading(s: &str) -> Option<(u8, String)> {
        parse_atx_heading(&line(s)).map(|(level, items)| {
            let bytes: Vec<u8> = items.iter().map(|i| i.byte).collect();
            (level, String::from_utf8(bytes).unwrap())
        })
    }

    #[test]
    fn test_thematic_break() {
        assert!(is_thematic_break(&line("---")));
        assert!(is_thematic_break(&line("***")));
        assert!(is_thematic_break(&line("___")));
        assert!(is_thematic_break(&line(" - - -")));
        assert!(is_thematic_break(&line("**********")));
    }

    #[test]
    fn test_thematic_break_invalid() {
        assert!(!is_thematic_break(&line("--")));
        assert!(!is_thematic_break(&line("-*-")));
        assert!(!is_thematic_break(&line("--- a")));
        assert!(!is_thematic_break(&line("    ---")));
        assert!(!is_thematic_break(&Line::eof(0)));
    }

    #[test]
    fn test_atx_heading_levels() {
        assert_eq!(heading("# Title"), Some((1, "Title".to_string())));
        assert_eq!(heading("###### Six"), Some((6, "Six".to_string())));
        assert_eq!(heading("####### Seven"), None);
        assert_eq!(heading("#NoSpace"), None);
    }

    #[test]
    fn test_atx_heading_empty() {
        assert_eq!(heading("#"), Some((1, String::new())));
        assert_eq!(heading("## ##"), Some((2, String::new())));
    }

    #[test]
    fn test_atx_heading_closing_hashes() {
        assert_eq!(heading("# Title #"), Some((1, "Title".to_string())));
        assert_eq!(heading("## Title ###   "), Some((2, "Title".to_string())));
        assert_eq!(heading("# Title#"), Some((1, "Title#".to_string())));
    }

    #[test]
    fn test_fence_open() {
        let fence = parse_fence_open(&line("```rust  ")).unwrap();
        assert_eq!(fence.fence_char, b'`');
        assert_eq!(fence.fence_len, 3);
        assert_eq!(fence.info.as_deref(), Some("rust"));

        let tilde = parse_fence_open(&line("  ~~~~")).unwrap();
        assert_eq!(tilde.fence_len, 4);
        assert_eq!(tilde.indent, 2);
        assert_eq!(tilde.info, None);
    }

    #[test]
    fn test_fence_open_invalid() {
        assert!(!is_fence_open(&line("``")));
        assert!(!is_fence_open(&line("``` a`b")));
        assert!(!is_fence_open(&line("    ```")));
        assert!(is_fence_open(&line("~~~ a`b")));
    }

    #[test]
    fn test_closing_fence() {
        let fence = parse_fence_open(&line("````")).unwrap();
        assert!(is_closing_fence(&fence, &line("````")));
        assert!(is_closing_fence(&fence, &line("  `````  ")));
        assert!(!is_closing_fence(&fence, &line("```")));
        assert!(!is_closing_fence(&fence, &line("~~~~")));
        assert!(!is_closing_fence(&fence, &line("```` x")));
    }
}
