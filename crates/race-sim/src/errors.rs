use thiserror::Error;

use crate::events::{Distance, EventType, Sex};

/// Errors raised by the simulation core.
///
/// All of these are caller contract violations: the presentation layer is
/// expected to offer only the closed sets of ages, sexes and distances.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Unknown event label: {0}")]
    UnknownEvent(String),

    #[error("No baseline for {sex:?} {distance}")]
    KeyNotFound { sex: Sex, distance: Distance },

    #[error("{distance} is not a {event_type} distance")]
    EventTypeMismatch {
        event_type: EventType,
        distance: Distance,
    },

    #[error("Age {0} is outside the supported range 10-50")]
    AgeOutOfRange(u32),

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(#[from] rand_distr::NormalError),
}
