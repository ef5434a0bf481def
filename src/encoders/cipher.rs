//! Digit and key ciphers.
//!
//! Letters are handled as indexes `0..=25` (`A`..=`Z`). Both ciphers work
//! modulo 23, so a ciphered digit never lands on `X`, `Y` or `Z`; those three
//! letters stay free for structural markers. Rounding the modulus up to 26
//! would make markers and digits collide.

use crate::core::seed::Seed;

/// Modulus shared by the digit cipher and the key cipher.
pub const MODULUS: u8 = 23;

/// Marker letter index opening a half-width run (`Z`).
pub const HALF_WIDTH_MARKER: u8 = 25;

/// Marker letter index opening a full-width run (`Y`).
pub const FULL_WIDTH_MARKER: u8 = 24;

pub fn letter(index: u8) -> char {
    char::from(b'A' + index)
}

/// Folds the UTF-16 code units of `text` into a seed-dependent hash.
///
/// Uses 32-bit wrapping arithmetic: `hash = 31 * seed * hash + unit`. The
/// magnitude of the result is returned; a positive multiple of 23 is nudged
/// down by one so a non-empty key never yields a zero key offset.
pub fn fold_hash(text: &str, seed: Seed) -> u32 {
    let multiplier = 31 * i32::from(seed.value());
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        multiplier.wrapping_mul(hash).wrapping_add(i32::from(unit))
    });

    let mut hash = hash.unsigned_abs();
    if hash > 0 && hash % u32::from(MODULUS) == 0 {
        hash -= 1;
    }
    hash
}

/// The cipher state of one hidden sequence: its seed plus the key offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    seed: Seed,
    key_offset: u8,
}

impl Cipher {
    /// Builds the cipher for `seed`. An empty key behaves like no key.
    pub fn new(seed: Seed, key: Option<&str>) -> Self {
        let key_offset = match key {
            Some(key) if !key.is_empty() => (fold_hash(key, seed) % u32::from(MODULUS)) as u8,
            _ => 0,
        };
        Cipher { seed, key_offset }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Digit cipher: `(digit + seed) mod 23`.
    pub fn hide_digit(&self, digit: u8) -> u8 {
        (digit + self.seed.value()) % MODULUS
    }

    /// Inverse of [`hide_digit`](Self::hide_digit).
    ///
    /// Returns `None` for letters the digit cipher never produces: `X`, `Y`
    /// and `Z`, and letters that would decode above 9.
    pub fn recover_digit(&self, letter: u8) -> Option<u8> {
        if letter >= MODULUS {
            return None;
        }
        let digit =
            (i16::from(letter) - i16::from(self.seed.value())).rem_euclid(i16::from(MODULUS)) as u8;
        (digit <= 9).then_some(digit)
    }

    /// Digit cipher followed by the key cipher.
    pub fn hide_keyed(&self, digit: u8) -> u8 {
        (self.hide_digit(digit) + self.key_offset) % MODULUS
    }

    /// Removes the key offset, then reverses the digit cipher.
    pub fn recover_keyed(&self, letter: u8) -> Option<u8> {
        if letter >= MODULUS {
            return None;
        }
        let unkeyed = (i16::from(letter) - i16::from(self.key_offset))
            .rem_euclid(i16::from(MODULUS)) as u8;
        self.recover_digit(unkeyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: u8) -> Seed {
        Seed::new(value).unwrap()
    }

    #[test]
    fn test_digit_cipher_known_values() {
        let cipher = Cipher::new(seed(10), None);
        assert_eq!(cipher.hide_digit(0), 10);
        assert_eq!(cipher.hide_digit(9), 19);

        let cipher = Cipher::new(seed(99), None);
        // 99 mod 23 = 7
        assert_eq!(cipher.hide_digit(0), 7);
        assert_eq!(cipher.hide_digit(9), 16);
    }

    #[test]
    fn test_digit_cipher_inverts_for_every_seed() {
        for s in Seed::all() {
            let cipher = Cipher::new(s, None);
            for digit in 0..=9 {
                let hidden = cipher.hide_digit(digit);
                assert!(hidden < MODULUS);
                assert_eq!(cipher.recover_digit(hidden), Some(digit));
            }
        }
    }

    #[test]
    fn test_markers_unreachable() {
        for s in Seed::all() {
            let cipher = Cipher::new(s, Some("marker check"));
            for digit in 0..=9 {
                let hidden = cipher.hide_keyed(digit);
                assert_ne!(hidden, HALF_WIDTH_MARKER);
                assert_ne!(hidden, FULL_WIDTH_MARKER);
                assert_ne!(hidden, 23);
            }
        }
    }

    #[test]
    fn test_key_cipher_inverts() {
        for key in ["k", "secret", "鍵", "a much longer key with spaces"] {
            for s in Seed::all() {
                let cipher = Cipher::new(s, Some(key));
                for digit in 0..=9 {
                    assert_eq!(cipher.recover_keyed(cipher.hide_keyed(digit)), Some(digit));
                }
            }
        }
    }

    #[test]
    fn test_letters_outside_modulus_rejected() {
        for s in Seed::all() {
            let cipher = Cipher::new(s, Some("k"));
            for letter in MODULUS..26 {
                assert_eq!(cipher.recover_digit(letter), None);
                assert_eq!(cipher.recover_keyed(letter), None);
            }
        }
    }

    #[test]
    fn test_recover_rejects_non_digit_letters() {
        let cipher = Cipher::new(seed(10), None);
        // 10..=19 are the digits under seed 10
        assert_eq!(cipher.recover_digit(9), None);
        assert_eq!(cipher.recover_digit(20), None);
        assert_eq!(cipher.recover_digit(10), Some(0));
        assert_eq!(cipher.recover_digit(19), Some(9));
    }

    #[test]
    fn test_fold_hash_values() {
        assert_eq!(fold_hash("", seed(10)), 0);
        // 'A' = 65
        assert_eq!(fold_hash("A", seed(10)), 65);
        // 31 * 10 * 65 + 66 = 20216
        assert_eq!(fold_hash("AB", seed(10)), 20216);
    }

    #[test]
    fn test_fold_hash_avoids_multiples_of_modulus() {
        // '.' = 46 = 2 * 23
        assert_eq!(fold_hash(".", seed(10)), 45);
    }

    #[test]
    fn test_non_empty_key_always_shifts() {
        for key in ["k", "secret", ".", "\u{17}"] {
            for s in Seed::all() {
                let hash = fold_hash(key, s);
                if hash > 0 {
                    assert_ne!(Cipher::new(s, Some(key)), Cipher::new(s, None));
                }
            }
        }
    }

    #[test]
    fn test_empty_key_is_no_key() {
        assert_eq!(Cipher::new(seed(42), Some("")), Cipher::new(seed(42), None));
    }

    #[test]
    fn test_letter() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(HALF_WIDTH_MARKER), 'Z');
        assert_eq!(letter(FULL_WIDTH_MARKER), 'Y');
    }
}
