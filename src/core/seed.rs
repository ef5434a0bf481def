use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Smallest seed a hidden sequence can carry.
pub const MIN_SEED: u8 = 10;
/// Largest seed a hidden sequence can carry.
pub const MAX_SEED: u8 = 99;

/// Per-sequence parameter that drives every cipher step of one hidden sequence.
///
/// A seed is embedded in the sequence as two letters (tens digit, ones digit),
/// so it is always a two-digit decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Seed(u8);

impl Seed {
    /// Creates a seed, rejecting values outside `10..=99`.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_SEED..=MAX_SEED).contains(&value).then_some(Seed(value))
    }

    /// Rebuilds a seed from the two digits of its embedded token.
    pub fn from_digits(tens: u8, ones: u8) -> Option<Self> {
        if tens > 9 || ones > 9 {
            return None;
        }
        Self::new(tens * 10 + ones)
    }

    /// Draws a seed uniformly from the thread-local generator.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Draws a seed uniformly from a caller-supplied generator.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Seed(rng.random_range(MIN_SEED..=MAX_SEED))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tens(self) -> u8 {
        self.0 / 10
    }

    pub fn ones(self) -> u8 {
        self.0 % 10
    }

    /// Multiplier applied to half-width values before they are split into digits.
    pub fn factor(self) -> u32 {
        u32::from(self.ones()) + 1
    }

    /// Iterates every valid seed in ascending order.
    pub fn all() -> impl Iterator<Item = Seed> {
        (MIN_SEED..=MAX_SEED).map(Seed)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seed_bounds() {
        assert!(Seed::new(9).is_none());
        assert!(Seed::new(100).is_none());
        assert_eq!(Seed::new(10).map(Seed::value), Some(10));
        assert_eq!(Seed::new(99).map(Seed::value), Some(99));
    }

    #[test]
    fn test_seed_digits() {
        let seed = Seed::new(47).unwrap();
        assert_eq!(seed.tens(), 4);
        assert_eq!(seed.ones(), 7);
        assert_eq!(seed.factor(), 8);
        assert_eq!(Seed::from_digits(4, 7), Some(seed));
        assert_eq!(Seed::from_digits(0, 7), None);
        assert_eq!(Seed::from_digits(4, 12), None);
    }

    #[test]
    fn test_seed_from_rng_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let seed = Seed::from_rng(&mut rng);
            assert!((MIN_SEED..=MAX_SEED).contains(&seed.value()));
        }
    }

    #[test]
    fn test_all_seeds() {
        assert_eq!(Seed::all().count(), 90);
        assert_eq!(Seed::all().next(), Seed::new(10));
        assert_eq!(Seed::all().last(), Seed::new(99));
    }
}
