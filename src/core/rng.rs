//! Deterministic random number generation for drafting and scoring.
//!
//! Every random decision in a session (page choice, roster shuffle, the
//! opponent's draft, the luck roll) draws from a `DraftRng`. A seeded
//! session therefore replays identically.
//!
//! ```
//! use portal_draft::core::DraftRng;
//!
//! let mut rng = DraftRng::new(42);
//!
//! // Fork a branch for work that runs outside the session
//! let mut branch = rng.fork();
//!
//! // Forks are deterministic: the same parent seed and fork count
//! // always produce the same branch
//! let mut again = DraftRng::new(42).fork();
//! assert_eq!(branch.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Seedable, forkable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DraftRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DraftRng {
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
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic branch.
    ///
    /// The session hands a fork to the roster acquisition so the
    /// asynchronous fetch never needs access to the session itself.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Independent stream for a named concern (e.g. "luck" vs "strategist").
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform usize in the half-open range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform u32 in the inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
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

    /// Capture the current position for later replay.
    #[must_use]
    pub fn state(&self) -> DraftRngState {
        DraftRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a captured position.
    #[must_use]
    pub fn from_state(state: &DraftRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
