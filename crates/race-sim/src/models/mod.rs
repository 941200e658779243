//! Heuristic performance models.
//!
//! Models map a runner's attributes onto multipliers used by the simulator:
//! the age grading curve slows the elite baseline down for juniors and
//! masters, and the population model turns the adjusted baseline into the
//! mean and spread of the general participant pool.

mod age;
mod population;

pub use age::AgeGradingModel;
pub use population::{DistributionParameters, PopulationModel};

use crate::events::Age;

/// Trait for age grading curves.
///
/// Implementations return a multiplicative penalty applied to an elite
/// baseline. A value of 1.0 means no penalty; larger values mean slower.
pub trait AgeGrading: Send + Sync {
    /// Penalty factor for the given age. Always >= 1.0.
    fn factor(&self, age: Age) -> f64;
}
