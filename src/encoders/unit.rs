//! Character codec over UTF-16 code units.
//!
//! Each code unit becomes one run of letters:
//!
//! - ASCII digit: one keyed digit letter, no marker.
//! - Half-width unit (`0x00..=0xFF`): `Z`, digit count, keyed digits of
//!   `unit * factor`.
//! - Full-width unit: `Y`, two digit counts, then the keyed digits of
//!   `high * factor` followed by those of `low * factor`.
//!
//! Digit counts are ciphered with the seed only; every value digit also
//! carries the key offset.

use super::cipher::{Cipher, FULL_WIDTH_MARKER, HALF_WIDTH_MARKER, letter};
use super::errors::HiderError;
use super::frame::Cursor;

/// Largest number of decimal digits a scaled byte can have (`255 * 10`).
const MAX_VALUE_DIGITS: u8 = 4;

/// How a UTF-16 code unit is laid out in a hidden sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// `'0'..='9'`, carried as its digit value
    Digit(u8),
    /// Any other unit that fits in one byte
    HalfWidth(u8),
    /// A unit that needs both bytes, including surrogate halves
    FullWidth { high: u8, low: u8 },
}

impl UnitClass {
    pub fn of(unit: u16) -> Self {
        let [high, low] = unit.to_be_bytes();
        match (high, low) {
            (0, b'0'..=b'9') => UnitClass::Digit(low - b'0'),
            (0, _) => UnitClass::HalfWidth(low),
            _ => UnitClass::FullWidth { high, low },
        }
    }
}

/// Appends the letter run for one code unit.
pub fn encode_unit(unit: u16, cipher: &Cipher, out: &mut String) {
    match UnitClass::of(unit) {
        UnitClass::Digit(digit) => out.push(letter(cipher.hide_keyed(digit))),
        UnitClass::HalfWidth(byte) => {
            let digits = scaled_digits(byte, cipher);
            out.push(letter(HALF_WIDTH_MARKER));
            out.push(letter(cipher.hide_digit(digits.len() as u8)));
            push_keyed(&digits, cipher, out);
        }
        UnitClass::FullWidth { high, low } => {
            let high_digits = scaled_digits(high, cipher);
            let low_digits = scaled_digits(low, cipher);
            out.push(letter(FULL_WIDTH_MARKER));
            out.push(letter(cipher.hide_digit(high_digits.len() as u8)));
            out.push(letter(cipher.hide_digit(low_digits.len() as u8)));
            push_keyed(&high_digits, cipher, out);
            push_keyed(&low_digits, cipher, out);
        }
    }
}

/// Reads one letter run from `cursor` and rebuilds its code unit.
pub fn decode_unit(cursor: &mut Cursor<'_>, cipher: &Cipher) -> Result<u16, HiderError> {
    let start = cursor.position();
    match cursor.next_letter()? {
        HALF_WIDTH_MARKER => {
            let count = read_count(cursor, cipher)?;
            let byte = read_value(cursor, cipher, count)?;
            Ok(u16::from(byte))
        }
        FULL_WIDTH_MARKER => {
            let high_count = read_count(cursor, cipher)?;
            let low_count = read_count(cursor, cipher)?;
            let high = read_value(cursor, cipher, high_count)?;
            let low = read_value(cursor, cipher, low_count)?;
            Ok(u16::from_be_bytes([high, low]))
        }
        found => {
            let digit = cipher
                .recover_keyed(found)
                .ok_or(HiderError::frame(start, "letter is not a ciphered digit"))?;
            Ok(u16::from(b'0' + digit))
        }
    }
}

fn scaled_digits(byte: u8, cipher: &Cipher) -> Vec<u8> {
    let scaled = u32::from(byte) * cipher.seed().factor();
    scaled
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

fn push_keyed(digits: &[u8], cipher: &Cipher, out: &mut String) {
    for &digit in digits {
        out.push(letter(cipher.hide_keyed(digit)));
    }
}

fn read_count(cursor: &mut Cursor<'_>, cipher: &Cipher) -> Result<u8, HiderError> {
    let position = cursor.position();
    match cipher.recover_digit(cursor.next_letter()?) {
        Some(count) if (1..=MAX_VALUE_DIGITS).contains(&count) => Ok(count),
        _ => Err(HiderError::frame(position, "digit count out of range")),
    }
}

fn read_value(cursor: &mut Cursor<'_>, cipher: &Cipher, count: u8) -> Result<u8, HiderError> {
    let start = cursor.position();
    let mut scaled = 0u32;
    for _ in 0..count {
        let position = cursor.position();
        let digit = cipher
            .recover_keyed(cursor.next_letter()?)
            .ok_or(HiderError::frame(position, "letter is not a ciphered digit"))?;
        scaled = scaled * 10 + u32::from(digit);
    }

    let factor = cipher.seed().factor();
    if scaled % factor != 0 {
        return Err(HiderError::frame(start, "value is not a multiple of the seed factor"));
    }
    u8::try_from(scaled / factor)
        .map_err(|_| HiderError::frame(start, "value does not fit in a byte"))
}
