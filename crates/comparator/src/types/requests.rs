use race_sim::events::{Distance, EventType, Sex};
use serde::Deserialize;
use validator::Validate;

/// Runner profile and optional time to compare.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SimulateRequest {
    #[validate(range(min = 10, max = 50, message = "Age must be between 10 and 50"))]
    pub age: u32,
    pub sex: Sex,
    pub event_type: EventType,
    pub distance: Distance,
    /// Runner's time as `MM:SS`.
    #[serde(default)]
    pub time: Option<String>,
    /// Overrides the configured number of draws.
    #[serde(default)]
    #[validate(range(
        min = 1,
        max = 100_000,
        message = "Sample size must be between 1 and 100000"
    ))]
    pub sample_size: Option<usize>,
}
