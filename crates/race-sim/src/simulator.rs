//! Synthetic population generation with truncated normal sampling.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::baselines::BaselineTable;
use crate::config::SimConfig;
use crate::errors::SimError;
use crate::events::{Age, EventKey};
use crate::models::{AgeGrading, AgeGradingModel, DistributionParameters, PopulationModel};

/// Inputs for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRequest {
    pub event: EventKey,
    pub age: Age,
    /// Number of draws before filtering.
    pub sample_size: usize,
}

impl SimulationRequest {
    pub fn new(event: EventKey, age: Age, sample_size: usize) -> Self {
        Self {
            event,
            age,
            sample_size,
        }
    }
}

/// Output of a simulation run.
///
/// Every value in `samples` is strictly greater than `baseline_adjusted`.
/// `sample_count` may be lower than `requested_samples`; dropped draws are
/// never replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub event: EventKey,
    pub age: Age,
    /// Elite baseline before age grading.
    pub baseline_seconds: f64,
    pub age_factor: f64,
    /// Elite baseline after age grading; the floor of the population.
    pub baseline_adjusted: f64,
    pub parameters: DistributionParameters,
    pub pool_mean: f64,
    pub pool_std: f64,
    pub requested_samples: usize,
    pub sample_count: usize,
    pub samples: Vec<f64>,
}

/// Generates synthetic performance distributions for a demographic.
///
/// The baseline table is shared read-only, so one simulator can serve any
/// number of concurrent callers, each supplying its own RNG.
#[derive(Debug, Clone)]
pub struct DistributionSimulator<G = AgeGradingModel> {
    baselines: Arc<BaselineTable>,
    grading: G,
    population: PopulationModel,
}

impl DistributionSimulator {
    /// Creates a simulator over the standard tables and default models.
    pub fn new() -> Self {
        Self::with_baselines(Arc::new(BaselineTable::standard()))
    }

    /// Creates a simulator over a shared baseline table with default models.
    pub fn with_baselines(baselines: Arc<BaselineTable>) -> Self {
        Self::with_models(
            baselines,
            AgeGradingModel::default(),
            PopulationModel::default(),
        )
    }
}

impl Default for DistributionSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AgeGrading> DistributionSimulator<G> {
    pub fn with_models(
        baselines: Arc<BaselineTable>,
        grading: G,
        population: PopulationModel,
    ) -> Self {
        Self {
            baselines,
            grading,
            population,
        }
    }

    pub fn baselines(&self) -> &BaselineTable {
        &self.baselines
    }

    pub fn population(&self) -> &PopulationModel {
        &self.population
    }

    /// Age-adjusted elite baseline for an event.
    pub fn adjusted_baseline(&self, event: &EventKey, age: Age) -> Result<f64, SimError> {
        let baseline = self.baselines.entry(event)?;
        Ok(baseline.seconds * self.grading.factor(age))
    }

    /// Runs one simulation.
    ///
    /// Draws `sample_size` values from the pool's normal distribution and
    /// keeps only those strictly slower than the age-adjusted baseline.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        rng: &mut impl Rng,
    ) -> Result<SimulationResult, SimError> {
        let baseline = self.baselines.entry(&request.event)?;
        let age_factor = self.grading.factor(request.age);
        let baseline_adjusted = baseline.seconds * age_factor;

        let parameters = self.population.for_class(baseline.class);
        let (pool_mean, pool_std) = parameters.pool(baseline_adjusted);

        tracing::debug!(
            distance = %request.event.distance,
            sex = ?request.event.sex,
            age = request.age.years(),
            baseline_adjusted,
            pool_mean,
            pool_std,
            "Derived population parameters"
        );

        let normal = Normal::new(pool_mean, pool_std)?;
        let samples: Vec<f64> = normal
            .sample_iter(rng)
            .take(request.sample_size)
            .filter(|&t| t > baseline_adjusted)
            .collect();

        let dropped = request.sample_size - samples.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Discarded draws at or below the adjusted baseline");
        }

        Ok(SimulationResult {
            event: request.event,
            age: request.age,
            baseline_seconds: baseline.seconds,
            age_factor,
            baseline_adjusted,
            parameters,
            pool_mean,
            pool_std,
            requested_samples: request.sample_size,
            sample_count: samples.len(),
            samples,
        })
    }

    /// Runs one simulation with an RNG chosen by the config: seeded when
    /// `config.seed` is set, thread-local otherwise.
    pub fn simulate_with_config(
        &self,
        event: EventKey,
        age: Age,
        config: &SimConfig,
    ) -> Result<SimulationResult, SimError> {
        let request = SimulationRequest::new(event, age, config.sample_size);
        match config.seed {
            Some(seed) => self.simulate(&request, &mut StdRng::seed_from_u64(seed)),
            None => self.simulate(&request, &mut rand::thread_rng()),
        }
    }
}
