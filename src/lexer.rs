//! Line lexer: splits input into [`Line`]s of classified items.
//!
//! Newlines are located with `memchr`; each byte up to the newline becomes
//! one [`Item`]. `\r\n` is folded into a single newline item. Once the input
//! is exhausted the lexer keeps returning the end-of-file line.

use crate::item::{Item, Line};

/// Produces one [`Line`] per call.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    offset: usize,
    line_no: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over a source text.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            offset: 0,
            line_no: 0,
        }
    }

    /// Check if all lines have been produced.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Number of lines produced so far (the EOF line is not counted).
    #[inline]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Produce the next line, or the EOF line when input is exhausted.
    pub fn next_line(&mut self) -> Line {
        if self.is_eof() {
            return Line::eof(self.input.len() as u32);
        }

        let start = self.offset;
        let rest = &self.input[start..];
        let (content_end, next) = match memchr::memchr(b'\n', rest) {
            Some(pos) => (start + pos, start + pos + 1),
            None => (self.input.len(), self.input.len()),
        };
        let newline_at = content_end;
        let content_end = if content_end > start && self.input[content_end - 1] == b'\r' {
            content_end - 1
        } else {
            content_end
        };

        let mut items = Vec::with_capacity(content_end - start + 1);
        items.extend(
            self.input[start..content_end]
                .iter()
                .enumerate()
                .map(|(i, &b)| Item::new(b, (start + i) as u32)),
        );
        // A missing final newline is synthesised at the end of input.
        items.push(Item::new(b'\n', newline_at as u32));

        self.offset = next;
        self.line_no += 1;
        Line::new(items)
    }
}
