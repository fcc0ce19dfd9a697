//! Classic Huffman compression/decompression for byte streams.
//!
//! The codec runs in two passes: count per-byte frequencies, build the
//! prefix-code tree by greedy weight merging, then emit the serialized
//! tree followed by the bit-packed payload. Decompression reads the tree
//! back out of the stream and walks it bit by bit.
//!
//! The wire format is self-describing and minimal: a pre-order tree
//! section flushed to a byte boundary, then the payload bits with the
//! final partial byte filled by a dead-end code prefix. There is no
//! magic number and no length field; end-of-tree is structural and
//! end-of-payload is input exhaustion.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! let restored = decompress(&compressed).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codes;
mod decode;
mod encode;
mod freq;
mod tree;

pub use codes::CodeTable;
pub use decode::{decompress, decompress_stream};
pub use encode::{compress, compress_stream};
pub use freq::{ALPHABET_SIZE, FreqTable, count_frequencies, count_frequencies_reader};
pub use tree::{HuffNode, MAX_TREE_DEPTH, build_tree};

#[cfg(feature = "parallel")]
pub use freq::count_frequencies_parallel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_hello() {
        let original = b"hello world";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_repeated() {
        let original = b"aaaaaaaaaabbbbbbbbbbcccccccccc";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_empty() {
        let original = b"";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_aaab() {
        let original = [0x41, 0x41, 0x41, 0x42];
        let compressed = compress(&original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }
}
