//! Event identification: sex, event type, distance and event class.
//!
//! Distances are a closed set. Each one knows which event type offers it and
//! which coarse class (sprint / mid-distance / distance) it belongs to, so
//! downstream code never has to classify by string matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

/// Where the race is run. Determines which distance labels are on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Track,
    #[serde(rename = "XC")]
    CrossCountry,
}

impl EventType {
    pub const ALL: [EventType; 2] = [EventType::Track, EventType::CrossCountry];

    /// Distances offered for this event type, in display order.
    pub fn distances(self) -> &'static [Distance] {
        match self {
            EventType::Track => &[
                Distance::M100,
                Distance::M200,
                Distance::M400,
                Distance::M800,
                Distance::M1600,
                Distance::M3200,
            ],
            EventType::CrossCountry => &[Distance::Mile1, Distance::Mile2, Distance::Mile3],
        }
    }

    /// Distance preselected when the event type is chosen.
    pub fn default_distance(self) -> Distance {
        match self {
            EventType::Track => Distance::M1600,
            EventType::CrossCountry => Distance::Mile3,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Track => write!(f, "Track"),
            EventType::CrossCountry => write!(f, "Cross Country"),
        }
    }
}

/// Coarse bucket that drives the population spread heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventClass {
    Sprint,
    MidDistance,
    Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Distance {
    M100,
    M200,
    M400,
    M800,
    M1600,
    M3200,
    Mile1,
    Mile2,
    Mile3,
}

impl Distance {
    pub const ALL: [Distance; 9] = [
        Distance::M100,
        Distance::M200,
        Distance::M400,
        Distance::M800,
        Distance::M1600,
        Distance::M3200,
        Distance::Mile1,
        Distance::Mile2,
        Distance::Mile3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Distance::M100 => "100m",
            Distance::M200 => "200m",
            Distance::M400 => "400m",
            Distance::M800 => "800m",
            Distance::M1600 => "1600m",
            Distance::M3200 => "3200m",
            Distance::Mile1 => "1 Mile",
            Distance::Mile2 => "2 Miles",
            Distance::Mile3 => "3 Miles",
        }
    }

    pub fn event_type(self) -> EventType {
        match self {
            Distance::Mile1 | Distance::Mile2 | Distance::Mile3 => EventType::CrossCountry,
            _ => EventType::Track,
        }
    }

    pub fn class(self) -> EventClass {
        match self {
            Distance::M100 | Distance::M200 => EventClass::Sprint,
            Distance::M400 | Distance::M800 => EventClass::MidDistance,
            _ => EventClass::Distance,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Distance {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distance::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| SimError::UnknownEvent(s.to_string()))
    }
}

impl TryFrom<String> for Distance {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Distance> for String {
    fn from(d: Distance) -> Self {
        d.label().to_string()
    }
}

/// A (sex, distance) pair whose distance is known to belong to the chosen
/// event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKey {
    pub sex: Sex,
    pub distance: Distance,
}

impl EventKey {
    /// Builds a key, rejecting distances the event type does not offer.
    pub fn new(sex: Sex, event_type: EventType, distance: Distance) -> Result<Self, SimError> {
        if distance.event_type() != event_type {
            return Err(SimError::EventTypeMismatch {
                event_type,
                distance,
            });
        }
        Ok(Self { sex, distance })
    }

    pub fn event_type(&self) -> EventType {
        self.distance.event_type()
    }
}

/// Runner age in whole years, restricted to the graded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u32);

impl Age {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 50;

    pub fn new(years: u32) -> Result<Self, SimError> {
        if (Self::MIN..=Self::MAX).contains(&years) {
            Ok(Self(years))
        } else {
            Err(SimError::AgeOutOfRange(years))
        }
    }

    pub fn years(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Age {
    type Error = SimError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        age.0
    }
}
