//! Placing a runner's time against a simulated population.
//!
//! These helpers turn a [`SimulationResult`] into render-ready data: where a
//! given time ranks, and an equal-width histogram of the population.

use serde::Serialize;

use crate::simulator::SimulationResult;

/// Where a single time falls within a simulated population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub comparison_seconds: f64,
    /// Number of simulated runners strictly slower than the comparison time.
    pub faster_than: usize,
    /// Share of the population the comparison time beats, 0-100.
    pub percentile: f64,
    /// Whether the time is at or under the age-adjusted elite baseline.
    pub beats_adjusted_baseline: bool,
}

impl SimulationResult {
    /// Ranks `comparison_seconds` against the simulated samples.
    ///
    /// An empty sample ranks every time at the 0th percentile.
    pub fn compare(&self, comparison_seconds: f64) -> Comparison {
        let faster_than = self
            .samples
            .iter()
            .filter(|&&t| t > comparison_seconds)
            .count();
        let percentile = if self.samples.is_empty() {
            0.0
        } else {
            faster_than as f64 / self.samples.len() as f64 * 100.0
        };

        Comparison {
            comparison_seconds,
            faster_than,
            percentile,
            beats_adjusted_baseline: comparison_seconds <= self.baseline_adjusted,
        }
    }

    pub fn histogram(&self, bins: usize) -> Histogram {
        Histogram::from_samples(&self.samples, bins)
    }
}

/// Equal-width histogram over the sample range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending. Empty when there is no data.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width buckets spanning min..=max.
    ///
    /// The last bin is closed on the right so the maximum is counted. When
    /// every sample is identical the range is widened to one second centred
    /// on that value.
    pub fn from_samples(samples: &[f64], bins: usize) -> Self {
        if samples.is_empty() || bins == 0 {
            return Self {
                edges: Vec::new(),
                counts: Vec::new(),
            };
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };
        let width = (hi - lo) / bins as f64;

        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for &t in samples {
            let idx = (((t - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Index of the bin containing `seconds`, if it lies within the range.
    pub fn bin_of(&self, seconds: f64) -> Option<usize> {
        let (first, last) = (*self.edges.first()?, *self.edges.last()?);
        if seconds < first || seconds > last {
            return None;
        }
        let bins = self.counts.len();
        let width = (last - first) / bins as f64;
        Some((((seconds - first) / width) as usize).min(bins - 1))
    }

    /// Tallest bin count, used to scale annotations.
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
