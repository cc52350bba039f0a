//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or
//! scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRngSource(StdRng);

impl StdRngSource {
    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates an RNG with a fixed seed, for reproducible deals.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for StdRngSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_range_stays_within_bounds() {
        let mut rng = StdRngSource::seeded(7);
        for _ in 0..1_000 {
            let value = rng.next_u32_range(3, 9);
            assert!((3..=9).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = StdRngSource::seeded(7);
        assert_eq!(rng.next_u32_range(4, 4), 4);
        assert_eq!(rng.next_u32_range(5, 2), 5);
    }

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = StdRngSource::seeded(42);
        let mut b = StdRngSource::seeded(42);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32_range(0, 1_000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32_range(0, 1_000)).collect();
        assert_eq!(left, right);
    }
}
