//! Deterministic random numbers for particle placement.
//!
//! The browser seeds [`SeededRng`] from the platform entropy source once per
//! mount; tests pass fixed seeds so fields are reproducible.

/// Seed used when no entropy is available.
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic PRNG using xorshift64.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create new RNG with given seed. A zero seed is remapped, xorshift
    /// would otherwise stay at zero forever.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Generate next random u64.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Generate random f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Generate random f32 in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let v = min + (self.next_f64() as f32) * (max - min);
        // f32 rounding can land exactly on `max`
        if v >= max {
            min
        } else {
            v
        }
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_reproducibility() {
        let mut rng1 = SeededRng::new(42);
        let mut rng2 = SeededRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = SeededRng::new(1);
        let mut rng2 = SeededRng::new(2);
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SeededRng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    proptest! {
        #[test]
        fn prop_range_is_half_open(seed: u64, min in -100.0f32..100.0, span in 0.001f32..100.0) {
            let mut rng = SeededRng::new(seed);
            let max = min + span;
            for _ in 0..32 {
                let v = rng.range(min, max);
                prop_assert!(v >= min && v < max, "{v} not in [{min}, {max})");
            }
        }

        #[test]
        fn prop_next_f64_unit_interval(seed: u64) {
            let mut rng = SeededRng::new(seed);
            for _ in 0..32 {
                let v = rng.next_f64();
                prop_assert!((0.0..1.0).contains(&v));
            }
        }
    }
}
