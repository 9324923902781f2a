//! Label sampling — pluggable, trait-based randomness source for evaluations.
//!
//! Default: `ThreadRngSampler` (process-wide thread-local RNG).
//! Tests use `SeededSampler` (deterministic, reproducible) or `FixedSampler`.
//!
//! `AppState` holds an `Arc<dyn LabelSampler>`, swapped at construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// The label sampler trait. Implement this to swap randomness sources
/// without touching the endpoint, handler, or evaluator code.
///
/// Carried in `AppState` as `Arc<dyn LabelSampler>`.
pub trait LabelSampler: Send + Sync {
    /// Picks one label from a fixed, non-empty label set.
    fn pick(&self, labels: &'static [&'static str]) -> &'static str;
}

/// Default sampler backed by the thread-local RNG. Uniform over the set.
pub struct ThreadRngSampler;

impl LabelSampler for ThreadRngSampler {
    fn pick(&self, labels: &'static [&'static str]) -> &'static str {
        let mut rng = rand::thread_rng();
        labels[rng.gen_range(0..labels.len())]
    }
}

/// Deterministic sampler seeded with a fixed value. Two instances with the
/// same seed produce the same pick sequence.
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl LabelSampler for SeededSampler {
    fn pick(&self, labels: &'static [&'static str]) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        labels[rng.gen_range(0..labels.len())]
    }
}

/// Test sampler that always picks the same index (modulo set length).
#[cfg(test)]
pub struct FixedSampler(pub usize);

#[cfg(test)]
impl LabelSampler for FixedSampler {
    fn pick(&self, labels: &'static [&'static str]) -> &'static str {
        labels[self.0 % labels.len()]
    }
}
