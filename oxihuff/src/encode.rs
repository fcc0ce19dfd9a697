//! Compression: frequency pass, tree, then the bit-packed payload.

use crate::codes::CodeTable;
use crate::freq::{count_frequencies, count_frequencies_reader};
use crate::tree::build_tree;
use oxihuff_core::{BitWriter, Result};
use std::io::{Read, Seek, SeekFrom, Write};

/// Read buffer size for the encoding pass.
const ENCODE_BUF_SIZE: usize = 8192;

/// Compress a byte slice into the OxiHuff wire format.
///
/// The output is the serialized tree (flushed to a byte boundary),
/// followed by the packed payload bits with the final partial byte
/// padded by a dead-end code prefix.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let freqs = count_frequencies(data);
    let tree = build_tree(&freqs);
    let table = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::new(Vec::new());
    tree.write_to(&mut writer)?;
    writer.align_to_byte()?;

    for &byte in data {
        write_symbol(&mut writer, &table, byte)?;
    }

    write_payload_padding(&mut writer, &table)?;
    writer.into_inner()
}

/// Compress from a seekable reader into a writer.
///
/// The input is scanned twice: once to count frequencies, once to encode.
/// It is rewound to its starting position between the passes, so the
/// source must be seekable; callers that only have a forward reader can
/// buffer and use [`compress`] instead.
pub fn compress_stream<R: Read + Seek, W: Write>(mut input: R, output: W) -> Result<()> {
    let start = input.stream_position()?;
    let freqs = count_frequencies_reader(&mut input)?;
    let tree = build_tree(&freqs);
    let table = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::new(output);
    tree.write_to(&mut writer)?;
    writer.align_to_byte()?;

    input.seek(SeekFrom::Start(start))?;
    let mut buf = [0u8; ENCODE_BUF_SIZE];
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            write_symbol(&mut writer, &table, byte)?;
        }
    }

    write_payload_padding(&mut writer, &table)?;
    writer.flush()
}

fn write_symbol<W: Write>(writer: &mut BitWriter<W>, table: &CodeTable, byte: u8) -> Result<()> {
    for &bit in table.code(byte) {
        writer.write_bit(bit)?;
    }
    Ok(())
}

/// Fill the final partial byte with a prefix of the longest code.
///
/// A proper code prefix stops at an internal node, so the decoder can
/// never mistake the padding for a complete symbol. The full-alphabet
/// tree always carries a code of length >= 8 (256 leaves cannot all sit
/// above depth 8), which covers the at-most-7 padding bits. Zero padding
/// would not be safe here: a dominant symbol can own a short all-zeros
/// code, and zero fill would decode as extra copies of it.
fn write_payload_padding<W: Write>(writer: &mut BitWriter<W>, table: &CodeTable) -> Result<()> {
    let partial = (writer.bits_written() % 8) as usize;
    if partial == 0 {
        return Ok(());
    }

    let longest = (0..=255u8)
        .map(|symbol| table.code(symbol))
        .max_by_key(|code| code.len())
        .unwrap_or_default();

    for &bit in longest.iter().take(8 - partial) {
        writer.write_bit(bit)?;
    }
    Ok(())
}
