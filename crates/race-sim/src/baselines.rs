//! Elite reference times per (sex, distance).

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::SimError;
use crate::events::{Distance, EventClass, EventKey, Sex};

/// A baseline time with the event class tag assigned at table construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub seconds: f64,
    pub class: EventClass,
}

// Approximate world-record-class times in seconds. 1600m/1 Mile and
// 3200m/2 Miles share values; 3 Miles is its own figure.
const STANDARD: [(Distance, f64, f64); 9] = [
    (Distance::M100, 9.58, 10.49),
    (Distance::M200, 19.19, 21.34),
    (Distance::M400, 43.03, 47.60),
    (Distance::M800, 100.91, 113.28),
    (Distance::M1600, 223.13, 247.0),
    (Distance::M3200, 478.0, 530.0),
    (Distance::Mile1, 223.13, 247.0),
    (Distance::Mile2, 478.0, 530.0),
    (Distance::Mile3, 755.0, 845.0),
];

/// Immutable lookup of elite baselines.
///
/// Built once and shared by reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct BaselineTable {
    entries: HashMap<(Sex, Distance), Baseline>,
}

impl BaselineTable {
    /// The standard table covering every sex and distance.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD.iter().flat_map(|&(distance, male, female)| {
            [(Sex::Male, distance, male), (Sex::Female, distance, female)]
        }))
    }

    /// Builds a table from explicit `(sex, distance, seconds)` rows.
    ///
    /// The class tag comes from the distance. Later rows win on duplicates.
    pub fn from_entries(rows: impl IntoIterator<Item = (Sex, Distance, f64)>) -> Self {
        let entries = rows
            .into_iter()
            .map(|(sex, distance, seconds)| {
                (
                    (sex, distance),
                    Baseline {
                        seconds,
                        class: distance.class(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Baseline seconds for a sex and distance.
    pub fn lookup(&self, sex: Sex, distance: Distance) -> Result<f64, SimError> {
        self.get(sex, distance).map(|b| b.seconds)
    }

    /// Full baseline entry (seconds plus class) for an event key.
    pub fn entry(&self, key: &EventKey) -> Result<Baseline, SimError> {
        self.get(key.sex, key.distance)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, sex: Sex, distance: Distance) -> Result<Baseline, SimError> {
        self.entries
            .get(&(sex, distance))
            .copied()
            .ok_or(SimError::KeyNotFound { sex, distance })
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self::standard()
    }
}
