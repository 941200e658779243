//! Service configuration read from the environment.

use std::env;
use std::str::FromStr;

use race_sim::config::SimConfig;

/// Largest number of draws a single simulation may request.
pub const MAX_SAMPLE_SIZE: usize = 100_000;

/// Largest histogram resolution accepted from the environment.
pub const MAX_HISTOGRAM_BINS: usize = 1_000;

/// Runtime configuration for the comparator service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub sim: SimConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            sim: SimConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `SAMPLE_SIZE`, `HISTOGRAM_BINS` and `SIM_SEED`.
    ///
    /// Unset, unparsable or out-of-range values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var("PORT", &lookup).unwrap_or(defaults.port),
            sim: SimConfig {
                sample_size: parse_bounded("SAMPLE_SIZE", MAX_SAMPLE_SIZE, &lookup)
                    .unwrap_or(defaults.sim.sample_size),
                histogram_bins: parse_bounded("HISTOGRAM_BINS", MAX_HISTOGRAM_BINS, &lookup)
                    .unwrap_or(defaults.sim.histogram_bins),
                seed: parse_var("SIM_SEED", &lookup),
            },
        }
    }
}

fn parse_var<T: FromStr>(key: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<T> {
    let value = lookup(key)?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {key}={value}");
            None
        }
    }
}

fn parse_bounded(
    key: &str,
    max: usize,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<usize> {
    let value: usize = parse_var(key, lookup)?;
    if (1..=max).contains(&value) {
        Some(value)
    } else {
        tracing::warn!("Ignoring {key}={value}, expected 1-{max}");
        None
    }
}
