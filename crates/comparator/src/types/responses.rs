use race_sim::prelude::{Comparison, Distance, EventType, Histogram, SimulationResult};
use serde::Serialize;

/// Distances offered for one event type.
#[derive(Debug, Serialize)]
pub struct EventTypeOptions {
    pub event_type: EventType,
    pub name: String,
    pub distances: Vec<Distance>,
    pub default_distance: Distance,
}

/// Everything an input form needs to offer only valid choices.
#[derive(Debug, Serialize)]
pub struct EventCatalog {
    pub min_age: u32,
    pub max_age: u32,
    pub event_types: Vec<EventTypeOptions>,
}

/// The runner's parsed time and its rank in the population.
#[derive(Debug, Serialize)]
pub struct RunnerComparison {
    /// Time as entered, normalised to `MM:SS`.
    pub label: String,
    #[serde(flatten)]
    pub comparison: Comparison,
    /// Histogram bin the runner's time falls in, if inside the sample range.
    pub bin: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub title: String,
    pub simulation: SimulationResult,
    pub histogram: Histogram,
    pub comparison: Option<RunnerComparison>,
}
