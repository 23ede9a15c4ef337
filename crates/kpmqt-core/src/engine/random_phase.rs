use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Splitmix constant used to decorrelate derived seeds.
const SEED_DECORRELATION: u64 = 0x9E3779B97F4A7C15;

/// A seeded source of uniform random phases over `[0, 2pi)`.
///
/// One generator is owned by the model and drawn from once per atom per
/// realization; its state advances monotonically, so no two realizations in a
/// run reuse the same sub-sequence. Concurrent realizations must not share it:
/// use [`fork`](PhaseGenerator::fork) to derive an independently seeded
/// generator per task instead.
#[derive(Debug, Clone)]
pub struct PhaseGenerator {
    seed: u64,
    rng: StdRng,
    distribution: Uniform<f64>,
}

impl PhaseGenerator {
    /// Creates a generator from a deterministic seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            distribution: Uniform::new(0.0, TAU),
        }
    }

    /// Draws the next phase, advancing the generator state.
    pub fn next_phase(&mut self) -> f64 {
        self.rng.sample(self.distribution)
    }

    /// Derives an independently seeded generator for one realization.
    ///
    /// The derived seed mixes the base seed with the realization index through
    /// a splitmix-style multiply, so per-task generators are decorrelated from
    /// each other and from the model-owned sequence.
    pub fn fork(&self, realization: u64) -> Self {
        Self::from_seed(
            self.seed ^ realization
                .wrapping_add(1)
                .wrapping_mul(SEED_DECORRELATION),
        )
    }
}
