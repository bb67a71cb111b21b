//! Seedable random number generator
//!
//! Uses xorshift64 so that a given seed always yields the same picks.
//! Selection has no cryptographic requirement; tests seed it explicitly.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A small, seedable random number generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Ensure non-zero state (xorshift requires this)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the system clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        // Spread the low-entropy clock bits before the first draw
        Self::new(nanos.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Get the current state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform index in `0..len`. Returns None for `len == 0`.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some((self.next_u64() % len as u64) as usize)
        }
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.index(slice.len()).map(|i| &slice[i])
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = GameRng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_index_range() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.index(0), None);
        for _ in 0..100 {
            let i = rng.index(7).unwrap();
            assert!(i < 7);
        }
    }

    #[test]
    fn test_pick_covers_all_elements() {
        let mut rng = GameRng::new(7);
        let items = [1, 2, 3];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = *rng.pick(&items).unwrap();
            seen[v - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(rng.pick::<u8>(&[]).is_none());
    }
}
