//! Random integer sources.

use rand::Rng;
use rand::rngs::OsRng;

/// Uniformly distributed random integers over `[min, max)`.
///
/// The builder only ever asks for integers in a range, so anything that
/// can answer that - the OS RNG, a seeded PRNG, a deterministic test
/// stub - can drive generation unchanged.
pub trait RandomSource {
    fn int_in(&mut self, min: usize, max: usize) -> usize;
}

/// Operating-system RNG. The default source.
pub struct OsSource(OsRng);

impl OsSource {
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for OsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsSource {
    fn int_in(&mut self, min: usize, max: usize) -> usize {
        self.0.gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let mut source = OsSource::new();
        for _ in 0..1_000 {
            let value = source.int_in(3, 10);
            assert!((3..10).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_has_one_value() {
        let mut source = OsSource::new();
        assert_eq!(source.int_in(5, 6), 5);
    }
}
