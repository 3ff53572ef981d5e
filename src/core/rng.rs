//! Deterministic random number generation.
//!
//! Every game owns its own [`GameRng`]. The registry keeps a root RNG and
//! forks a fresh one per game, so a registry built from a fixed seed deals
//! the same libraries in the same order every run.
//!
//! ```
//! use commander_table::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut game_a = root.fork();
//! let game_b = root.fork();
//!
//! assert_ne!(game_a.seed(), game_b.seed());
//!
//! // Forks are deterministic: same root seed, same fork order, same stream.
//! let mut again = GameRng::new(42).fork();
//! let mut a: Vec<u32> = (0..52).collect();
//! let mut b = a.clone();
//! game_a.shuffle(&mut a);
//! again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic, seedable RNG used for library shuffles.
///
/// Uses ChaCha8 for speed while keeping an unbiased stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place.
    ///
    /// This is a Fisher–Yates shuffle: every permutation is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..60).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        // Second fork differs from the first
        let second = rng1.fork();
        assert_ne!(second.seed(), forked1.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = GameRng::new(7);

        let mut empty: Vec<u8> = Vec::new();
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9u8];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }
}
