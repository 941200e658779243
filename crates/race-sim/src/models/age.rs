//! Linear age grading curve.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::AgeGrading;
use crate::events::Age;

/// Piecewise-linear age grading.
///
/// Peak performance is assumed across a band of ages (20-30 by default).
/// Below the band the penalty grows steeply (developing athletes); above it
/// the penalty grows gradually (masters decline):
/// - Junior: +4% per year under the band
/// - Masters: +1.5% per year over the band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGradingModel {
    /// First age of the peak band.
    pub peak_start: u32,
    /// Last age of the peak band.
    pub peak_end: u32,
    /// Penalty added per year below `peak_start`.
    pub junior_slope: f64,
    /// Penalty added per year above `peak_end`.
    pub masters_slope: f64,
}

impl Default for AgeGradingModel {
    fn default() -> Self {
        Self {
            peak_start: 20,
            peak_end: 30,
            junior_slope: 0.04,
            masters_slope: 0.015,
        }
    }
}

impl AgeGradingModel {
    pub fn peak_band(&self) -> RangeInclusive<u32> {
        self.peak_start..=self.peak_end
    }
}

impl AgeGrading for AgeGradingModel {
    fn factor(&self, age: Age) -> f64 {
        let years = age.years();
        if self.peak_band().contains(&years) {
            1.0
        } else if years < self.peak_start {
            1.0 + f64::from(self.peak_start - years) * self.junior_slope
        } else {
            1.0 + f64::from(years - self.peak_end) * self.masters_slope
        }
    }
}
