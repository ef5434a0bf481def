//! Checksum suffix.
//!
//! The checksum is the fold hash of the plaintext under the sequence seed,
//! written as ciphered decimal digits, least significant first. The tail has
//! no length marker: it ends where the sequence ends, and a zero checksum
//! writes nothing.

use super::cipher::{Cipher, fold_hash, letter};
use super::errors::HiderError;

/// Appends the checksum tail for `text` to `out`.
pub fn append(text: &str, cipher: &Cipher, out: &mut String) {
    for digit in Digits::new(fold_hash(text, cipher.seed())) {
        out.push(letter(cipher.hide_keyed(digit)));
    }
}

/// Verifies that `tail` is exactly the checksum tail for `text`.
///
/// `offset` is the logical letter position of the first tail letter and is
/// only used to report where a mismatch happened.
pub fn verify(text: &str, cipher: &Cipher, tail: &[u8], offset: usize) -> Result<(), HiderError> {
    let mut expected = Digits::new(fold_hash(text, cipher.seed()));
    let mut consumed = 0;

    for &found in tail {
        match expected.next() {
            Some(digit) if cipher.hide_keyed(digit) == found => consumed += 1,
            _ => {
                return Err(HiderError::ChecksumMismatch {
                    position: offset + consumed,
                });
            }
        }
    }

    if expected.next().is_some() {
        return Err(HiderError::ChecksumMismatch {
            position: offset + consumed,
        });
    }
    Ok(())
}

/// Little-endian decimal digits of a value; zero yields nothing.
struct Digits(u32);

impl Digits {
    fn new(value: u32) -> Self {
        Digits(value)
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let digit = (self.0 % 10) as u8;
        self.0 /= 10;
        Some(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::Seed;

    fn tail_of(text: &str, cipher: &Cipher) -> Vec<u8> {
        let mut out = String::new();
        append(text, cipher, &mut out);
        out.bytes().map(|b| b - b'A').collect()
    }

    #[test]
    fn test_digits_little_endian() {
        assert_eq!(Digits::new(20216).collect::<Vec<_>>(), vec![6, 1, 2, 0, 2]);
        assert_eq!(Digits::new(0).count(), 0);
    }

    #[test]
    fn test_append_known_tail() {
        let cipher = Cipher::new(Seed::new(10).unwrap(), None);
        // fold_hash("AB", 10) = 20216 -> digits 6,1,2,0,2 shifted by 10
        let mut out = String::new();
        append("AB", &cipher, &mut out);
        assert_eq!(out, "QLMKM");
    }

    #[test]
    fn test_verify_accepts_own_tail() {
        let cipher = Cipher::new(Seed::new(55).unwrap(), Some("key"));
        let tail = tail_of("hello world", &cipher);
        assert!(!tail.is_empty());
        assert_eq!(verify("hello world", &cipher, &tail, 0), Ok(()));
    }

    #[test]
    fn test_verify_rejects_altered_tail() {
        let cipher = Cipher::new(Seed::new(55).unwrap(), None);
        let mut tail = tail_of("hello world", &cipher);
        tail[1] = (tail[1] + 1) % 23;
        assert_eq!(
            verify("hello world", &cipher, &tail, 10),
            Err(HiderError::ChecksumMismatch { position: 11 })
        );
    }

    #[test]
    fn test_verify_rejects_short_and_long_tails() {
        let cipher = Cipher::new(Seed::new(31).unwrap(), None);
        let tail = tail_of("checksum", &cipher);

        let short = &tail[..tail.len() - 1];
        assert!(verify("checksum", &cipher, short, 0).is_err());

        let mut long = tail.clone();
        long.push(tail[0]);
        assert!(verify("checksum", &cipher, &long, 0).is_err());
    }
}
