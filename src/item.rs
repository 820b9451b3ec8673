//! Typed items and the per-line item cursor the block engine consumes.
//!
//! Every input byte becomes one [`Item`]. A [`Line`] owns the items of one
//! physical line and exposes a cursor over them: trimming, indentation
//! stripping and peeking move the cursor instead of copying items.

use crate::limits::TAB_WIDTH;

/// Classification of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ItemKind {
    Space,
    Tab,
    Newline,
    Eof,
    Digit,
    /// `>`
    Greater,
    /// `*`
    Asterisk,
    /// `-`
    Hyphen,
    /// `+`
    Plus,
    /// `.`
    Dot,
    /// `)`
    CloseParen,
    /// `#`
    Hash,
    /// `` ` ``
    Backtick,
    /// `~`
    Tilde,
    /// `_`
    Underscore,
    /// Any other byte, including UTF-8 continuation bytes.
    Other,
}

impl ItemKind {
    /// Classify one byte.
    #[inline]
    pub fn of(byte: u8) -> Self {
        match byte {
            b' ' => Self::Space,
            b'\t' => Self::Tab,
            b'\n' => Self::Newline,
            b'0'..=b'9' => Self::Digit,
            b'>' => Self::Greater,
            b'*' => Self::Asterisk,
            b'-' => Self::Hyphen,
            b'+' => Self::Plus,
            b'.' => Self::Dot,
            b')' => Self::CloseParen,
            b'#' => Self::Hash,
            b'`' => Self::Backtick,
            b'~' => Self::Tilde,
            b'_' => Self::Underscore,
            _ => Self::Other,
        }
    }
}

/// One classified byte of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    pub kind: ItemKind,
    pub byte: u8,
    /// Byte offset in the source.
    pub offset: u32,
}

impl Item {
    #[inline]
    pub fn new(byte: u8, offset: u32) -> Self {
        Self {
            kind: ItemKind::of(byte),
            byte,
            offset,
        }
    }

    /// A synthetic space standing in for part of an expanded tab.
    #[inline]
    pub fn virtual_space(offset: u32) -> Self {
        Self {
            kind: ItemKind::Space,
            byte: b' ',
            offset,
        }
    }

    /// The end-of-file marker.
    #[inline]
    pub fn eof(offset: u32) -> Self {
        Self {
            kind: ItemKind::Eof,
            byte: 0,
            offset,
        }
    }

    #[inline]
    pub fn is_space_or_tab(&self) -> bool {
        matches!(self.kind, ItemKind::Space | ItemKind::Tab)
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Space | ItemKind::Tab | ItemKind::Newline | ItemKind::Eof
        )
    }

    /// Indentation columns this item occupies.
    #[inline]
    pub fn columns(&self) -> usize {
        match self.kind {
            ItemKind::Tab => TAB_WIDTH,
            _ => 1,
        }
    }
}

/// Whitespace run in front of the first non-whitespace item of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingWhitespace {
    pub spaces: usize,
    pub tabs: usize,
    /// Number of items in the run (virtual spaces excluded).
    pub len: usize,
}

impl LeadingWhitespace {
    /// `spaces + 4 × tabs`.
    #[inline]
    pub fn columns(&self) -> usize {
        self.spaces + self.tabs * TAB_WIDTH
    }
}

/// The items of one physical line with a cursor over them.
///
/// A line always ends with a `Newline` item, except the end-of-file line,
/// which is the single item `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    items: Vec<Item>,
    pos: usize,
    /// Spaces left over from a partially consumed tab, logically in front of
    /// `items[pos]`.
    virtual_spaces: usize,
}

impl Line {
    /// Wrap the items of one line.
    pub fn new(items: Vec<Item>) -> Self {
        debug_assert!(matches!(
            items.last().map(|i| i.kind),
            Some(ItemKind::Newline | ItemKind::Eof)
        ));
        Self {
            items,
            pos: 0,
            virtual_spaces: 0,
        }
    }

    /// The end-of-file line.
    pub fn eof(offset: u32) -> Self {
        Self::new(vec![Item::eof(offset)])
    }

    /// Items from the cursor to the end of the line, terminator included.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items[self.pos..]
    }

    /// Number of items left, counting virtual spaces.
    #[inline]
    pub fn len(&self) -> usize {
        self.virtual_spaces + self.items.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn virtual_spaces(&self) -> usize {
        self.virtual_spaces
    }

    /// Item `n` positions after the cursor, virtual spaces included.
    pub fn peek(&self, n: usize) -> Option<Item> {
        if n < self.virtual_spaces {
            return Some(Item::virtual_space(self.virtual_offset()));
        }
        self.items.get(self.pos + n - self.virtual_spaces).copied()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.virtual_spaces == 0 && self.items()[0].kind == ItemKind::Eof
    }

    /// True when nothing but spaces and tabs remains before the terminator.
    pub fn is_blank(&self) -> bool {
        !self.is_eof() && self.items().iter().all(Item::is_whitespace)
    }

    /// Offset used for virtual spaces: the tab they were cut from.
    fn virtual_offset(&self) -> u32 {
        match self.pos.checked_sub(1) {
            Some(prev) => self.items[prev].offset,
            None => self.items[self.pos].offset,
        }
    }

    /// Leading whitespace counts; virtual spaces count as spaces.
    pub fn leading_whitespace(&self) -> LeadingWhitespace {
        let mut ws = LeadingWhitespace {
            spaces: self.virtual_spaces,
            tabs: 0,
            len: 0,
        };
        for item in self.items() {
            match item.kind {
                ItemKind::Space => ws.spaces += 1,
                ItemKind::Tab => ws.tabs += 1,
                _ => break,
            }
            ws.len += 1;
        }
        ws
    }

    /// Indentation in columns (`spaces + 4 × tabs`).
    #[inline]
    pub fn space_count_left(&self) -> usize {
        self.leading_whitespace().columns()
    }

    /// First item that is not a space or tab, with its position after the
    /// cursor (virtual spaces included).
    pub fn first_non_space(&self) -> (usize, Item) {
        let ws = self.leading_whitespace();
        let idx = self.pos + ws.len;
        // The terminator is never a space or tab, so idx is in bounds.
        (self.virtual_spaces + ws.len, self.items[idx])
    }

    /// Skip all leading spaces and tabs, returning the columns removed.
    pub fn trim_left(&mut self) -> usize {
        let ws = self.leading_whitespace();
        self.pos += ws.len;
        self.virtual_spaces = 0;
        ws.columns()
    }

    /// Move the cursor past `n` real items, dropping any virtual spaces.
    pub fn advance(&mut self, n: usize) {
        self.virtual_spaces = 0;
        self.pos = (self.pos + n).min(self.items.len() - 1);
    }

    /// Strip up to `columns` columns of indentation.
    ///
    /// A tab wider than what is left to strip is consumed and its remainder
    /// becomes virtual spaces. Stops early at the first non-whitespace item.
    pub fn indent_offset(&mut self, columns: usize) {
        let mut left = columns;
        let from_virtual = left.min(self.virtual_spaces);
        self.virtual_spaces -= from_virtual;
        left -= from_virtual;
        while left > 0 {
            let item = self.items[self.pos];
            match item.kind {
                ItemKind::Space => {
                    self.pos += 1;
                    left -= 1;
                }
                ItemKind::Tab => {
                    self.pos += 1;
                    if left >= TAB_WIDTH {
                        left -= TAB_WIDTH;
                    } else {
                        self.virtual_spaces = TAB_WIDTH - left;
                        left = 0;
                    }
                }
                _ => break,
            }
        }
    }

    /// Replace leading whitespace with `columns` virtual spaces of
    /// indentation. Used after a marker whose trailing tab expands.
    pub fn set_indent(&mut self, columns: usize) {
        self.virtual_spaces = columns;
    }

    /// Content items from the cursor, virtual spaces materialised and the
    /// line terminator dropped.
    pub fn content(&self) -> impl Iterator<Item = Item> + '_ {
        let offset = self.virtual_offset();
        let real = &self.items()[..self.items().len().saturating_sub(1)];
        std::iter::repeat_n(Item::virtual_space(offset), self.virtual_spaces)
            .chain(real.iter().copied())
    }

    /// The line terminator (`Newline` or `Eof`).
    #[inline]
    pub fn terminator(&self) -> Item {
        self.items[self.items.len() - 1]
    }

    /// Remaining text from the cursor, terminator excluded.
    pub fn text(&self) -> String {
        let bytes: Vec<u8> = self.content().map(|i| i.byte).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
