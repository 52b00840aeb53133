//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a run can be reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng and remembers the seed it was built from so the
/// binary can log it and a player can replay the same graph.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Draw an index in 0..n-1 that differs from `exclude`, retrying on a hit.
    ///
    /// Returns `None` when no such index exists (n < 2 with `exclude` in range).
    pub fn rn2_except(&mut self, n: usize, exclude: usize) -> Option<usize> {
        if n == 0 || (n == 1 && exclude == 0) {
            return None;
        }
        loop {
            let pick = self.rn2(n);
            if pick != exclude {
                return Some(pick);
            }
        }
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i + 1);
            items.swap(i, j);
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
