//! Limits that keep pathological inputs bounded.
//!
//! Block parsing recurses once per open container, so nesting depth is the
//! one resource an adversarial document can grow without bound.

/// Maximum number of open block containers (document, blockquotes, lists,
/// list items) before container markers are read as plain text.
pub const MAX_BLOCK_NESTING: usize = 32;

/// Maximum digits in an ordered list marker (prevents big-integer parsing).
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Minimum run of backticks or tildes that opens a code fence.
pub const MIN_FENCE_LEN: usize = 3;

/// Minimum number of `*`, `-` or `_` that form a thematic break.
pub const MIN_THEMATIC_BREAK_MARKERS: usize = 3;

/// Columns of indentation that turn a line into indented code.
pub const CODE_INDENT: usize = 4;

/// Columns a tab counts for in indentation arithmetic.
pub const TAB_WIDTH: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_reasonable() {
        const { assert!(MAX_BLOCK_NESTING >= 16) };
        const { assert!(MAX_BLOCK_NESTING <= 64) };
        // 999_999_999 still fits in a u32 start number
        const { assert!(MAX_LIST_MARKER_DIGITS <= 9) };
        const { assert!(CODE_INDENT == TAB_WIDTH) };
    }
}
