//! Framing of hidden sequences.
//!
//! Layout of a sequence, in letters:
//!
//! ```text
//! [digit count] [length digits...] [body runs ... (seed token) ... body runs] [checksum...]
//! ```
//!
//! The length prefix is written verbatim (`A` + digit) because the seed is not
//! known until the prefix has been read. The two-letter seed token is spliced
//! into the body at `1 + digit count + text length / 2`; the parser never
//! moves letters around, it maps logical positions past the token instead.

use serde::Serialize;

use super::checksum;
use super::cipher::{Cipher, letter};
use super::errors::HiderError;
use super::unit;
use crate::core::seed::Seed;

/// Letters taken by the embedded seed token.
pub const SEED_LETTERS: usize = 2;

/// Hides `text` under an explicit seed.
///
/// The declared length is the UTF-16 length of `text` plus that of `key`.
/// An empty text hides to an empty sequence.
pub fn hide(text: &str, key: Option<&str>, add_checksum: bool, seed: Seed) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cipher = Cipher::new(seed, key);
    let text_length = text.encode_utf16().count();
    let key_length = key.map_or(0, |k| k.encode_utf16().count());
    let length_digits = (text_length + key_length).to_string();
    let digit_count = length_digits.len();

    let mut out = String::with_capacity(digit_count + 1 + text_length * 4 + SEED_LETTERS);
    out.push(letter(digit_count as u8));
    for digit in length_digits.bytes() {
        out.push(letter(digit - b'0'));
    }

    for code_unit in text.encode_utf16() {
        unit::encode_unit(code_unit, &cipher, &mut out);
    }

    let seed_position = 1 + digit_count + text_length / 2;
    let token: String = [letter(seed.tens()), letter(seed.ones())].iter().collect();
    out.insert_str(seed_position, &token);

    if add_checksum {
        checksum::append(text, &cipher, &mut out);
    }
    out
}

/// Recovers the text hidden in `sequence`.
///
/// A trailing checksum is verified when letters remain after the body; a
/// sequence whose body ends exactly at its last letter carries no checksum.
pub fn recover(sequence: &str, key: Option<&str>) -> Result<String, HiderError> {
    if sequence.is_empty() {
        return Ok(String::new());
    }

    let letters = to_letters(sequence)?;
    let header = FrameHeader::parse(&letters, key_length(key))?;
    let cipher = Cipher::new(header.seed, key);
    let mut cursor = header.cursor(&letters);

    let mut units = Vec::with_capacity(header.text_length);
    while units.len() < header.text_length {
        units.push(unit::decode_unit(&mut cursor, &cipher)?);
    }
    let text = String::from_utf16(&units).map_err(HiderError::codec)?;

    if cursor.remaining() > 0 {
        let offset = cursor.position();
        let tail = cursor.drain();
        checksum::verify(&text, &cipher, &tail, offset)?;
    }
    Ok(text)
}

/// Reads the frame header of `sequence` without decoding its body.
///
/// `key_length` is the UTF-16 length of the key the sequence was hidden with
/// (0 when hidden without a key).
pub fn inspect(sequence: &str, key_length: usize) -> Result<FrameHeader, HiderError> {
    let letters = to_letters(sequence)?;
    FrameHeader::parse(&letters, key_length)
}

fn key_length(key: Option<&str>) -> usize {
    key.map_or(0, |k| k.encode_utf16().count())
}

/// Validates the alphabet and converts letters to indexes `0..=25`.
fn to_letters(sequence: &str) -> Result<Vec<u8>, HiderError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, c)| {
            if c.is_ascii_uppercase() {
                Ok(c as u8 - b'A')
            } else {
                Err(HiderError::InvalidAlphabet { found: c, position })
            }
        })
        .collect()
}

/// Everything the parser learns before touching the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    /// Number of decimal digits in the length prefix
    pub digit_count: usize,
    /// Length written in the prefix (text plus key)
    pub declared_length: usize,
    /// Length of the hidden text in UTF-16 code units
    pub text_length: usize,
    pub seed: Seed,
    /// Letter offset of the seed token within the sequence
    pub seed_position: usize,
    /// Letters in the whole sequence, seed token included
    pub total_letters: usize,
}

impl FrameHeader {
    fn parse(letters: &[u8], key_length: usize) -> Result<Self, HiderError> {
        let digit_count = usize::from(
            *letters
                .first()
                .ok_or(HiderError::frame(0, "sequence is empty"))?,
        );
        if digit_count == 0 {
            return Err(HiderError::frame(0, "length marker is zero"));
        }

        let body_start = 1 + digit_count;
        let digits = letters
            .get(1..body_start)
            .ok_or(HiderError::frame(letters.len(), "sequence ends inside the length prefix"))?;

        let mut declared_length = 0usize;
        for (offset, &digit) in digits.iter().enumerate() {
            if digit > 9 {
                return Err(HiderError::frame(1 + offset, "length digit out of range"));
            }
            declared_length = declared_length
                .checked_mul(10)
                .and_then(|length| length.checked_add(usize::from(digit)))
                .ok_or(HiderError::frame(1 + offset, "declared length overflows"))?;
        }

        let text_length = declared_length
            .checked_sub(key_length)
            .ok_or(HiderError::frame(1, "declared length is shorter than the key"))?;
        if text_length == 0 {
            return Err(HiderError::frame(1, "declared length leaves no text"));
        }

        let seed_position = body_start + text_length / 2;
        let token = letters
            .get(seed_position..seed_position + SEED_LETTERS)
            .ok_or(HiderError::frame(seed_position, "seed token lies past the end"))?;
        let seed = Seed::from_digits(token[0], token[1])
            .ok_or(HiderError::frame(seed_position, "seed token out of range"))?;

        Ok(FrameHeader {
            digit_count,
            declared_length,
            text_length,
            seed,
            seed_position,
            total_letters: letters.len(),
        })
    }

    fn cursor<'a>(&self, letters: &'a [u8]) -> Cursor<'a> {
        Cursor::new(letters, 1 + self.digit_count, Some(self.seed_position))
    }
}

/// Forward reader over the letters of a sequence with the seed token excised.
///
/// Positions are logical: once past the token, logical position `p` reads
/// physical letter `p + 2`.
pub struct Cursor<'a> {
    letters: &'a [u8],
    next: usize,
    seed_position: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(letters: &'a [u8], start: usize, seed_position: Option<usize>) -> Self {
        Cursor {
            letters,
            next: start,
            seed_position,
        }
    }

    /// Logical position of the next letter.
    pub fn position(&self) -> usize {
        self.next
    }

    fn logical_len(&self) -> usize {
        match self.seed_position {
            Some(_) => self.letters.len().saturating_sub(SEED_LETTERS),
            None => self.letters.len(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.logical_len().saturating_sub(self.next)
    }

    fn physical(&self, logical: usize) -> usize {
        match self.seed_position {
            Some(seed) if logical >= seed => logical + SEED_LETTERS,
            _ => logical,
        }
    }

    pub fn next_letter(&mut self) -> Result<u8, HiderError> {
        if self.next >= self.logical_len() {
            return Err(HiderError::frame(self.next, "sequence ends inside the body"));
        }
        let found = self
            .letters
            .get(self.physical(self.next))
            .copied()
            .ok_or(HiderError::frame(self.next, "sequence ends inside the body"))?;
        self.next += 1;
        Ok(found)
    }

    /// Consumes and returns every remaining letter.
    pub fn drain(&mut self) -> Vec<u8> {
        let mut rest = Vec::with_capacity(self.remaining());
        while let Ok(found) = self.next_letter() {
            rest.push(found);
        }
        rest
    }
}
