//! Deterministic random number generation for dealing and bots.
//!
//! A seed fixes every deal of a match. The deal stream's position can be
//! saved as a `GameRngState`, which is how a checkpointed table keeps
//! dealing the hands it would have dealt without the interruption.
//!
//! ```
//! use truco_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Dealing and bots draw from separate streams
//! let mut deal = rng.for_context("deal");
//! let mut again = GameRng::new(42).for_context("deal");
//! assert_eq!(deal.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
///
/// Context streams keep deck shuffling and bot choices apart, so a bot
/// drawing an extra number never changes the next deal.
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

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Position of this stream, for checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue a stream from a saved position.
    #[must_use]
    pub fn from_state(saved: &GameRngState) -> Self {
        let mut rng = Self::new(saved.seed);
        rng.inner.set_word_pos(saved.word_pos);
        rng
    }
}

/// Saved position of a `GameRng` stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed of the stream (already mixed with its context)
    pub seed: u64,
    pub word_pos: u128,
}
