//! Decompression: rebuild the tree, then walk it bit by bit.

use crate::tree::HuffNode;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::BitReader;
use std::io::{Read, Write};

/// Decompress an OxiHuff-compressed byte slice.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress_stream(data, &mut output)?;
    Ok(output)
}

/// Decompress from a reader into a writer.
///
/// Reads the serialized tree, skips the tree section's byte-alignment
/// padding, then follows payload bits from the root: left on 0, right on
/// 1, emitting the symbol at each leaf and resetting to the root.
///
/// The format carries no terminator or length field; exhaustion of the
/// bit source is the normal end of the payload. Bits consumed past the
/// last complete symbol are final-byte padding (a dead-end code prefix
/// that cannot reach a leaf) and are discarded.
pub fn decompress_stream<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut reader = BitReader::new(input);
    let tree = HuffNode::read_from(&mut reader)?;
    reader.align_to_byte();

    // A single-leaf tree assigns the empty code to its one symbol, so no
    // encoder output can follow it; payload bits here are unwalkable.
    if tree.is_leaf() {
        return match reader.try_read_bit()? {
            None => Ok(()),
            Some(_) => Err(OxiHuffError::malformed_traversal(reader.bit_position())),
        };
    }

    let mut current = &tree;
    while let Some(bit) = reader.try_read_bit()? {
        current = match current {
            HuffNode::Internal(left, right) => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // The walk resets to the root (internal, checked above) after
            // every emitted symbol, so a leaf cannot be current here.
            HuffNode::Leaf(_) => {
                return Err(OxiHuffError::malformed_traversal(reader.bit_position()));
            }
        };

        if let HuffNode::Leaf(symbol) = current {
            output.write_all(std::slice::from_ref(symbol))?;
            current = &tree;
        }
    }

    output.flush()?;
    Ok(())
}
