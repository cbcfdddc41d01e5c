//! Deterministic RNG for Monte Carlo runs.
//!
//! # Determinism strategy
//!
//! A Monte Carlo run owns exactly one `SimRng`, seeded once from the run's
//! seed.  Every trial draws from that single stream in trial order; nothing
//! is reseeded per trial.  This means:
//!
//! - Two runs with the same seed and configuration produce identical draws.
//! - Independent runs in the same process never share state — there is no
//!   process-wide generator.
//! - Trial `i` sees the `i`-th draw of the stream, so any parallel evaluation
//!   must take its draws sequentially before fanning out.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Run-level deterministic RNG.
///
/// Deliberately not `Clone`: duplicating the stream would silently replay
/// draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs not wrapped here.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw one value from distribution `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }
}
