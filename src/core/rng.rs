//! Deterministic random number generation for value shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical box assignments
//! - **Entropy fallback**: Unseeded games draw from the OS
//! - **Restorable**: The seed is kept so a game can be replayed
//!
//! ```
//! use papasko::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(9), b.gen_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for the value randomizer.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniformly random index in `[0, upper]` (inclusive).
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
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
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_inclusive_bounds() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let i = rng.gen_index(2);
            assert!(i <= 2);
            seen[i] = true;
        }

        assert!(seen.iter().all(|&s| s), "every index in [0, 2] should be drawn");
    }

    #[test]
    fn test_gen_index_zero() {
        let mut rng = GameRng::new(9);
        for _ in 0..10 {
            assert_eq!(rng.gen_index(0), 0);
        }
    }

    #[test]
    fn test_seed_or_entropy() {
        assert_eq!(GameRng::from_seed_or_entropy(Some(11)).seed(), 11);
        // Entropy seeding just has to produce a usable generator.
        let mut rng = GameRng::from_seed_or_entropy(None);
        assert!(rng.gen_index(5) <= 5);
    }
}
