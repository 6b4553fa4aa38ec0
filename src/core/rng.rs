//! Deterministic random number generation for shoe shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical shuffle sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Pure transitions**: `GameState` carries a `GameRngState`, so a
//!   reshuffle is a function of the previous state alone
//!
//! ```
//! use blackjack_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut shoe: Vec<u32> = (0..10).collect();
//! rng.shuffle(&mut shoe);
//!
//! // Restoring the saved position replays the same permutation.
//! let mut replay = GameRng::new(42);
//! let mut again: Vec<u32> = (0..10).collect();
//! replay.shuffle(&mut again);
//! assert_eq!(shoe, again);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to permute freshly built shoes.
///
/// Uses ChaCha8 for speed while keeping the stream reproducible from
/// `(seed, word_pos)`.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// no matter how many shoes have been shuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl GameRngState {
    /// Position of a generator freshly seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed, word_pos: 0 }
    }
}
