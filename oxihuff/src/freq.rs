//! Per-byte frequency counting.

use oxihuff_core::Result;
use std::io::Read;

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count per byte value.
pub type FreqTable = [u64; ALPHABET_SIZE];

/// Read buffer size for the counting pass.
const COUNT_BUF_SIZE: usize = 8192;

/// Count byte frequencies in a slice.
pub fn count_frequencies(data: &[u8]) -> FreqTable {
    let mut freqs = [0u64; ALPHABET_SIZE];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

/// Count byte frequencies by consuming a reader to the end.
///
/// Compression scans its input twice, so the caller must rewind (or
/// reopen) the source before the encoding pass.
pub fn count_frequencies_reader<R: Read>(reader: &mut R) -> Result<FreqTable> {
    let mut freqs = [0u64; ALPHABET_SIZE];
    let mut buf = [0u8; COUNT_BUF_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            freqs[byte as usize] += 1;
        }
    }

    Ok(freqs)
}

/// Count byte frequencies across parallel chunks.
///
/// Each chunk is counted independently and the per-chunk tables are
/// merged by summation; tree construction downstream stays sequential.
#[cfg(feature = "parallel")]
pub fn count_frequencies_parallel(data: &[u8]) -> FreqTable {
    use rayon::prelude::*;

    // Below this size the fork/join overhead dominates.
    const CHUNK_SIZE: usize = 64 * 1024;

    if data.len() < CHUNK_SIZE * 2 {
        return count_frequencies(data);
    }

    data.par_chunks(CHUNK_SIZE)
        .map(count_frequencies)
        .reduce(|| [0u64; ALPHABET_SIZE], merge_counts)
}

#[cfg(feature = "parallel")]
fn merge_counts(mut a: FreqTable, b: FreqTable) -> FreqTable {
    for (dst, src) in a.iter_mut().zip(b.iter()) {
        *dst += src;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty() {
        let freqs = count_frequencies(b"");
        assert!(freqs.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_count_aaab() {
        let freqs = count_frequencies(b"AAAB");
        assert_eq!(freqs[b'A' as usize], 3);
        assert_eq!(freqs[b'B' as usize], 1);
        let other: u64 = freqs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != b'A' as usize && *i != b'B' as usize)
            .map(|(_, &c)| c)
            .sum();
        assert_eq!(other, 0);
    }

    #[test]
    fn test_reader_matches_slice() {
        let data: Vec<u8> = (0..100_000).map(|i| (i % 251) as u8).collect();
        let from_slice = count_frequencies(&data);
        let from_reader = count_frequencies_reader(&mut data.as_slice()).unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u8> = (0..1_000_000).map(|i| (i * 31 % 256) as u8).collect();
        assert_eq!(count_frequencies(&data), count_frequencies_parallel(&data));
    }
}
