//! Probability source contract and the simulated single-qubit sampler

use crate::io::configuration::EQUAL_SUPERPOSITION;
use crate::io::error::{Result, invalid_parameter, source_unavailable};
use crate::source::sample::SampleResult;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::num::NonZeroU32;
use std::sync::Mutex;

/// Supplier of binary measurement counts
///
/// Implementations may block (remote backends, local simulation). The returned
/// [`SampleResult`] must total exactly `shots`.
pub trait ProbabilitySource: Send + Sync {
    /// Draw `shots` independent binary outcomes and return their counts
    ///
    /// # Errors
    ///
    /// Returns [`crate::MementoError::SourceUnavailable`] if the underlying sampler
    /// cannot be reached
    fn sample(&self, shots: NonZeroU32) -> Result<SampleResult>;

    /// Short human-readable name for diagnostics
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// One qubit prepared by a Hadamard gate and measured in the computational basis
///
/// Each shot reads 1 with probability `bias`, which is 0.5 for the equal
/// superposition. Other biases stand in for a rotated preparation.
pub struct SimulatedQubit {
    bias: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedQubit {
    /// Equal-superposition qubit seeded from the operating system
    pub fn hadamard() -> Self {
        Self {
            bias: EQUAL_SUPERPOSITION,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Qubit with an explicit bias and optional seed for reproducible draws
    ///
    /// # Errors
    ///
    /// Returns an error if `bias` is not within [0, 1]
    pub fn with_bias(bias: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&bias) {
            return Err(invalid_parameter(
                "bias",
                &bias,
                &"must lie within [0, 1]",
            ));
        }
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self {
            bias,
            rng: Mutex::new(rng),
        })
    }

    /// Probability that a single shot measures 1
    pub const fn bias(&self) -> f64 {
        self.bias
    }
}

impl Default for SimulatedQubit {
    fn default() -> Self {
        Self::hadamard()
    }
}

impl ProbabilitySource for SimulatedQubit {
    fn sample(&self, shots: NonZeroU32) -> Result<SampleResult> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_poisoned| source_unavailable(&"simulator state poisoned by a panic"))?;

        let mut count_one = 0u64;
        for _ in 0..shots.get() {
            if rng.random_bool(self.bias) {
                count_one += 1;
            }
        }

        SampleResult::new(u64::from(shots.get()) - count_one, count_one)
    }

    fn name(&self) -> &'static str {
        "simulated-qubit"
    }
}
