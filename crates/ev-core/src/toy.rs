//! Deterministic toy event generation for demos, tests, and benches.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp, Normal, Poisson};

use crate::dataset::{Dataset, EventRecord};
use crate::error::{Error, Result};

/// Parameters of the toy generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyConfig {
    /// Number of events.
    pub events: usize,
    /// RNG seed; the same seed always produces the same dataset.
    pub seed: u64,
    /// Mean candidate multiplicity per event (Poisson).
    pub mean_candidates: f64,
    /// Mean candidate energy (exponential).
    pub energy_mean: f64,
    /// Momentum component spread (normal, centered at zero).
    pub momentum_sigma: f64,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self {
            events: 1000,
            seed: 42,
            mean_candidates: 4.0,
            energy_mean: 80.0,
            momentum_sigma: 1.5,
        }
    }
}

/// Generate a toy dataset.
pub fn generate(cfg: &ToyConfig) -> Result<Dataset> {
    let multiplicity = Poisson::new(cfg.mean_candidates)
        .map_err(|e| Error::Computation(format!("toy multiplicity: {e}")))?;
    let energy = Exp::new(1.0 / cfg.energy_mean)
        .map_err(|e| Error::Computation(format!("toy energy: {e}")))?;
    let momentum = Normal::new(0.0, cfg.momentum_sigma)
        .map_err(|e| Error::Computation(format!("toy momentum: {e}")))?;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut events = Vec::with_capacity(cfg.events);
    for _ in 0..cfg.events {
        let n = multiplicity.sample(&mut rng) as usize;
        let mut record = EventRecord {
            energy: Vec::with_capacity(n),
            px: Vec::with_capacity(n),
            py: Vec::with_capacity(n),
        };
        for _ in 0..n {
            record.energy.push(energy.sample(&mut rng));
            record.px.push(momentum.sample(&mut rng));
            record.py.push(momentum.sample(&mut rng));
        }
        events.push(record);
    }
    Ok(Dataset { events })
}
