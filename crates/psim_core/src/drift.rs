use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Half-width of the per-tick perturbation band, in meters / radians.
///
/// Each tick draws uniform samples in [0, 2 * DRIFT_HALF_WIDTH) and shifts
/// them down by DRIFT_HALF_WIDTH, yielding a symmetric step in
/// [-DRIFT_HALF_WIDTH, DRIFT_HALF_WIDTH) per field.
pub const DRIFT_HALF_WIDTH: f64 = 0.001;

/// Uniform random-walk model for synthetic odometry error.
///
/// Owns one generator seeded at construction and advanced every tick.
/// Only the bounds of the step distribution are contractual; the
/// generator identity is not.
#[derive(Debug)]
pub struct DriftModel {
    rng: SmallRng,
}

impl DriftModel {
    /// Entropy-seeded model for production use.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic model for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw one perturbation step: three independent samples, one per pose
    /// field (x, y, heading).
    pub fn step(&mut self) -> [f64; 3] {
        let mut out = [0.0; 3];
        for v in &mut out {
            *v = self.rng.gen_range(0.0..2.0 * DRIFT_HALF_WIDTH) - DRIFT_HALF_WIDTH;
        }
        out
    }
}

impl Default for DriftModel {
    fn default() -> Self {
        Self::new()
    }
}
