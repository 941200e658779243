//! Race time population simulation.
//!
//! This crate estimates how a runner's time compares to a synthetic
//! population of runners of the same age, sex and event. The population is
//! anchored to an elite baseline, slowed down by an age grading curve, and
//! spread out by a per-class heuristic before being sampled.
//!
//! # Quick Start
//!
//! ```rust
//! use race_sim::prelude::*;
//! use rand::SeedableRng;
//!
//! let simulator = DistributionSimulator::new();
//! let event = EventKey::new(Sex::Male, EventType::Track, Distance::M1600)?;
//! let request = SimulationRequest::new(event, Age::new(25)?, DEFAULT_SAMPLE_SIZE);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let result = simulator.simulate(&request, &mut rng)?;
//! assert!(result.samples.iter().all(|&t| t > result.baseline_adjusted));
//!
//! let comparison = result.compare(300.0);
//! println!("Faster than {:.1}% of the population", comparison.percentile);
//! # Ok::<(), race_sim::SimError>(())
//! ```

pub mod baselines;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod simulator;

pub use errors::SimError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::baselines::{Baseline, BaselineTable};
    pub use crate::comparison::{Comparison, Histogram};
    pub use crate::config::{DEFAULT_HISTOGRAM_BINS, DEFAULT_SAMPLE_SIZE, SimConfig};
    pub use crate::errors::SimError;
    pub use crate::events::{Age, Distance, EventClass, EventKey, EventType, Sex};
    pub use crate::models::{AgeGrading, AgeGradingModel, DistributionParameters, PopulationModel};
    pub use crate::simulator::{DistributionSimulator, SimulationRequest, SimulationResult};
}
