//! Deterministic jitter source for the estimator pipeline.
//!
//! Every randomized estimator takes an explicit `&mut impl Rng` instead
//! of reaching for `rand::thread_rng()`, so a fixed seed reproduces the
//! whole dataset bit-for-bit.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Seeded RNG backing all estimator jitter.
///
/// The inner `ChaCha8Rng` is public so callers pass `&mut rng.0` to the
/// estimator functions directly.
#[derive(Debug, Clone)]
pub struct JitterRng(pub ChaCha8Rng);

impl Default for JitterRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl JitterRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
