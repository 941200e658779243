//! Population shape heuristics per event class.

use serde::{Deserialize, Serialize};

use crate::events::{Distance, EventClass};

/// Shape of the general participant pool relative to the adjusted baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    /// Pool mean as a multiple of the age-adjusted baseline. Greater than 1.
    pub mean_multiplier: f64,
    /// Pool standard deviation as a fraction of the pool mean. In (0, 1).
    pub std_fraction: f64,
}

impl DistributionParameters {
    pub const fn new(mean_multiplier: f64, std_fraction: f64) -> Self {
        Self {
            mean_multiplier,
            std_fraction,
        }
    }

    /// `(mean, std_dev)` of the pool for a given adjusted baseline.
    pub fn pool(&self, adjusted_baseline: f64) -> (f64, f64) {
        let mean = adjusted_baseline * self.mean_multiplier;
        (mean, mean * self.std_fraction)
    }
}

/// Three-bucket population model.
///
/// Short events cluster tightly around the baseline; longer events spread
/// widely because participation ranges from casual to elite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationModel {
    pub sprint: DistributionParameters,
    pub mid_distance: DistributionParameters,
    pub distance: DistributionParameters,
}

impl Default for PopulationModel {
    fn default() -> Self {
        Self {
            sprint: DistributionParameters::new(1.6, 0.15),
            mid_distance: DistributionParameters::new(1.8, 0.20),
            distance: DistributionParameters::new(2.1, 0.25),
        }
    }
}

impl PopulationModel {
    pub fn for_class(&self, class: EventClass) -> DistributionParameters {
        match class {
            EventClass::Sprint => self.sprint,
            EventClass::MidDistance => self.mid_distance,
            EventClass::Distance => self.distance,
        }
    }

    pub fn parameters(&self, distance: Distance) -> DistributionParameters {
        self.for_class(distance.class())
    }

    /// Parameters for a label.
    ///
    /// Known labels use their class tag. Anything else is classified by
    /// substring: 100m/200m are sprints, 400m/800m are mid-distance, the
    /// rest falls into the distance bucket.
    pub fn parameters_for_label(&self, label: &str) -> DistributionParameters {
        let class = label
            .parse::<Distance>()
            .map(Distance::class)
            .unwrap_or_else(|_| classify_label(label));
        self.for_class(class)
    }
}

// "3200m" contains "200m", so this must never see the closed label set.
fn classify_label(label: &str) -> EventClass {
    if label.contains("100m") || label.contains("200m") {
        EventClass::Sprint
    } else if label.contains("400m") || label.contains("800m") {
        EventClass::MidDistance
    } else {
        EventClass::Distance
    }
}
