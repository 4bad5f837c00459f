//! Seedable perturbation source.
//!
//! The only randomness in the generator. `Seeded` derives an independent
//! ChaCha stream per (pass, step, partition lane), so parallel partitions
//! never contend for RNG state and a fixed seed reproduces the same
//! terrain at any thread count. `Zero` switches the perturbation off for
//! deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::fill::Step;

/// Splitmix64 increment; odd, so multiplication permutes the seed space.
const LANE_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random perturbation source for a whole generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jitter {
    /// ChaCha streams derived from this base seed. Same seed = same terrain.
    Seeded { seed: u64 },
    /// Every sample is zero.
    Zero,
}

impl Jitter {
    /// Seeded source with the given base seed.
    pub fn seeded(seed: u64) -> Self {
        Jitter::Seeded { seed }
    }

    /// Independent sampling lane for one partition of one step.
    pub fn lane(&self, pass: u32, step: Step, lane: u64) -> JitterLane {
        match *self {
            Jitter::Seeded { seed } => {
                let step_bit = match step {
                    Step::Square => 0u64,
                    Step::Diamond => 1u64,
                };
                // Pack (pass, step, lane) into one phase word; lanes stay
                // below 2^36 for any grid the address space can hold.
                let phase = ((pass as u64) << 40) | (step_bit << 36) | lane;
                JitterLane::Rng(ChaCha8Rng::seed_from_u64(
                    seed ^ phase.wrapping_mul(LANE_MIX),
                ))
            }
            Jitter::Zero => JitterLane::Zero,
        }
    }
}

/// One partition's sampling state.
#[derive(Debug, Clone)]
pub enum JitterLane {
    Rng(ChaCha8Rng),
    Zero,
}

impl JitterLane {
    /// Uniform random integer in `[-bound, bound]`, both ends inclusive.
    pub fn sample(&mut self, bound: u32) -> i32 {
        match self {
            JitterLane::Rng(rng) => rng.gen_range(-(bound as i32)..=bound as i32),
            JitterLane::Zero => 0,
        }
    }
}
