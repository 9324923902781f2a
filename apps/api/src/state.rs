use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::sampler::LabelSampler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration; handlers don't read it yet, main uses the port.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable randomness source for label selection.
    /// Default: ThreadRngSampler. Tests swap in a seeded or fixed sampler.
    pub sampler: Arc<dyn LabelSampler>,
}
