//! Optional gzip pass over a hidden sequence.
//!
//! The compressed bytes are written back in letters: `X` followed by two
//! letters per byte. Byte `b` is read as a signed value and shifted into
//! `0..=255` (`128 + b as i8`); the tens go to the first letter and the ones to
//! the second, so pairs look like `[A-Z][A-J]`. A plain hidden sequence never
//! starts with `X`, which keeps [`decompress`] transparent for it.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::encoders::cipher::letter;
use crate::encoders::errors::HiderError;

/// First letter of a compressed sequence.
pub const COMPRESSED_MARKER: char = 'X';

/// gzip level used when none is configured.
pub const DEFAULT_LEVEL: u32 = 6;

/// Compresses `sequence`, keeping the original when compression would not
/// make it shorter.
pub fn compress(sequence: &str, level: u32) -> Result<String, HiderError> {
    if sequence.is_empty() {
        return Ok(String::new());
    }

    let packed = compress_gzip(sequence.as_bytes(), level.min(9)).map_err(HiderError::codec)?;
    if packed.len() * 2 + 1 > sequence.chars().count() {
        return Ok(sequence.to_string());
    }

    let mut out = String::with_capacity(packed.len() * 2 + 1);
    out.push(COMPRESSED_MARKER);
    for byte in packed {
        let value = byte ^ 0x80;
        out.push(letter(value / 10));
        out.push(letter(value % 10));
    }
    Ok(out)
}

/// Reverses [`compress`]; anything not starting with `X` is returned as is.
pub fn decompress(sequence: &str) -> Result<String, HiderError> {
    let Some(payload) = sequence.strip_prefix(COMPRESSED_MARKER) else {
        return Ok(sequence.to_string());
    };

    let letters = payload
        .chars()
        .enumerate()
        .map(|(offset, c)| {
            if c.is_ascii_uppercase() {
                Ok(c as u8 - b'A')
            } else {
                Err(HiderError::InvalidAlphabet {
                    found: c,
                    position: offset + 1,
                })
            }
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if letters.len() % 2 != 0 {
        return Err(HiderError::frame(
            letters.len(),
            "compressed payload ends with an unpaired letter",
        ));
    }

    let mut packed = Vec::with_capacity(letters.len() / 2);
    for (pair, chunk) in letters.chunks_exact(2).enumerate() {
        let (tens, ones) = (chunk[0], chunk[1]);
        let value = u16::from(tens) * 10 + u16::from(ones);
        if ones > 9 || value > 255 {
            let position = 1 + pair * 2;
            return Err(HiderError::InvalidAlphabet {
                found: letter(if ones > 9 { ones } else { tens }),
                position: if ones > 9 { position + 1 } else { position },
            });
        }
        packed.push(value as u8 ^ 0x80);
    }

    let bytes = decompress_gzip(&packed).map_err(HiderError::codec)?;
    String::from_utf8(bytes).map_err(HiderError::codec)
}

fn compress_gzip(data: &[u8], level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(data)?;
    encoder.finish()
}

fn decompress_gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut result = Vec::new();
    decoder.read_to_end(&mut result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_sequence() -> String {
        "BCZBAMQPLTTLKM".repeat(40)
    }

    #[test]
    fn test_gzip_roundtrip() {
        let data = b"Hello, world! This is a test of gzip compression.";
        let compressed = compress_gzip(data, DEFAULT_LEVEL).unwrap();
        let decompressed = decompress_gzip(&compressed).unwrap();
        assert_eq!(data.as_ref(), decompressed.as_slice());
    }

    #[test]
    fn test_compress_long_sequence() {
        let sequence = long_sequence();
        let compressed = compress(&sequence, DEFAULT_LEVEL).unwrap();
        assert!(compressed.starts_with(COMPRESSED_MARKER));
        assert!(compressed.len() < sequence.len());
        assert!(compressed[1..].chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(decompress(&compressed).unwrap(), sequence);
    }

    #[test]
    fn test_compress_never_expands() {
        let sequence = "BCZBAMQPLTTLKM";
        assert_eq!(compress(sequence, DEFAULT_LEVEL).unwrap(), sequence);
    }

    #[test]
    fn test_pair_letters_in_range() {
        let compressed = compress(&long_sequence(), 9).unwrap();
        for pair in compressed.as_bytes()[1..].chunks(2) {
            assert!(pair[1] <= b'J');
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compress("", DEFAULT_LEVEL).unwrap(), "");
        assert_eq!(decompress("").unwrap(), "");
    }

    #[test]
    fn test_decompress_passthrough() {
        assert_eq!(decompress("BCZBAMQPL").unwrap(), "BCZBAMQPL");
    }

    #[test]
    fn test_decompress_rejects_bad_payloads() {
        assert!(matches!(
            decompress("XAb"),
            Err(HiderError::InvalidAlphabet { position: 2, .. })
        ));
        assert!(matches!(
            decompress("XAK"),
            Err(HiderError::InvalidAlphabet { position: 2, .. })
        ));
        assert!(matches!(
            decompress("XZJ"),
            Err(HiderError::InvalidAlphabet { position: 1, .. })
        ));
        assert!(matches!(
            decompress("XAAB"),
            Err(HiderError::FrameCorruption { .. })
        ));
        assert!(matches!(
            decompress("XAAAB"),
            Err(HiderError::Codec { .. })
        ));
    }
}
