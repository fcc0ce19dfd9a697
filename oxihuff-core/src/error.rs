//! Error types for OxiHuff operations.
//!
//! One error enum covers both layers: bit-level I/O failures from the
//! bitstream primitives and structural failures detected by the codec
//! (truncated tree data, impossible traversals).

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bit source exhausted where more bits were required.
    #[error("Unexpected end of stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position at which the source ran dry.
        bit_position: u64,
    },

    /// Bit source exhausted while tree-structure bits were still expected.
    #[error("Truncated tree data at bit position {bit_position}")]
    TruncatedTree {
        /// Bit position at which the tree data ended.
        bit_position: u64,
    },

    /// Serialized tree nests deeper than any valid 256-symbol prefix tree.
    #[error("Tree exceeds maximum depth: {depth}")]
    TreeTooDeep {
        /// Depth at which deserialization gave up.
        depth: usize,
    },

    /// Payload traversal cannot make progress on the decoded tree.
    #[error("Malformed traversal at bit position {bit_position}")]
    MalformedTraversal {
        /// Bit position of the offending payload bit.
        bit_position: u64,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create a truncated tree error.
    pub fn truncated_tree(bit_position: u64) -> Self {
        Self::TruncatedTree { bit_position }
    }

    /// Create a tree depth error.
    pub fn tree_too_deep(depth: usize) -> Self {
        Self::TreeTooDeep { depth }
    }

    /// Create a malformed traversal error.
    pub fn malformed_traversal(bit_position: u64) -> Self {
        Self::MalformedTraversal { bit_position }
    }
}
