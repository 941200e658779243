//! Configuration types for simulation runs.

use serde::{Deserialize, Serialize};

/// Number of draws per simulation unless overridden.
pub const DEFAULT_SAMPLE_SIZE: usize = 5000;

/// Number of histogram bins used for rendering.
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Configuration for simulation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of values drawn before the baseline filter is applied.
    pub sample_size: usize,

    /// Number of equal-width bins when summarising a sample as a histogram.
    pub histogram_bins: usize,

    /// Fixed RNG seed for reproducible runs. `None` uses thread-local entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Creates a config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
