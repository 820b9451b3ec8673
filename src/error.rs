//! Internal invariant violations.
//!
//! Block parsing has no recoverable failure mode: every input produces a
//! tree. The only errors are defects in the parser itself, surfaced as values
//! so they propagate with `?` instead of aborting the host process.

use thiserror::Error;

/// A broken parser invariant. Never produced by well-formed dispatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// `pop` was called on an empty container stack.
    #[error("defect: pop on an empty container stack")]
    EmptyStack,

    /// A list marker was recognised with zero width.
    #[error("defect: list marker of zero width")]
    EmptyMarker,

    /// A container parser closed a node it did not open.
    #[error("defect: container stack unbalanced (expected node {expected}, popped {found})")]
    UnbalancedStack { expected: usize, found: usize },
}
