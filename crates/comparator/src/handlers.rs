use std::sync::Arc;

use axum::{Extension, extract::rejection::JsonRejection, http::StatusCode, response::Json};
use race_sim::prelude::{
    Age, DistributionSimulator, EventKey, EventType, SimConfig, SimulationResult,
};
use validator::Validate;

use crate::{
    errors::AppError,
    race_time::{format_race_time, parse_race_time},
    types::{
        EventCatalog, EventTypeOptions, RunnerComparison, SimulateRequest, SimulateResponse,
    },
};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<DistributionSimulator>,
    pub config: SimConfig,
}

impl AppState {
    pub fn new(config: SimConfig) -> Self {
        Self {
            simulator: Arc::new(DistributionSimulator::new()),
            config,
        }
    }
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

/// List the event types, their distances, and the accepted age range.
pub async fn list_events() -> Json<EventCatalog> {
    let event_types = EventType::ALL
        .into_iter()
        .map(|event_type| EventTypeOptions {
            event_type,
            name: event_type.to_string(),
            distances: event_type.distances().to_vec(),
            default_distance: event_type.default_distance(),
        })
        .collect();

    Json(EventCatalog {
        min_age: Age::MIN,
        max_age: Age::MAX,
        event_types,
    })
}

/// Simulate the population for a runner profile and place their time in it.
pub async fn simulate(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulateResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    req.validate().map_err(|e| {
        let messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            })
            .collect();
        AppError::InvalidInput(messages.join(", "))
    })?;

    // Parse the time before spending CPU on the simulation.
    let runner_seconds = req.time.as_deref().map(parse_race_time).transpose()?;

    let event = EventKey::new(req.sex, req.event_type, req.distance)?;
    let age = Age::new(req.age)?;
    let config = SimConfig {
        sample_size: req.sample_size.unwrap_or(state.config.sample_size),
        ..state.config.clone()
    };

    tracing::info!(
        distance = %event.distance,
        sex = ?event.sex,
        age = age.years(),
        sample_size = config.sample_size,
        "Simulating population"
    );

    let simulator = Arc::clone(&state.simulator);
    let sim_config = config.clone();
    let simulation: SimulationResult = tokio::task::spawn_blocking(move || {
        simulator.simulate_with_config(event, age, &sim_config)
    })
    .await
    .map_err(|e| {
        tracing::error!("Simulation task failed: {e}");
        AppError::Internal
    })??;

    let histogram = simulation.histogram(config.histogram_bins);
    let comparison = runner_seconds.map(|seconds| {
        let comparison = simulation.compare(f64::from(seconds));
        RunnerComparison {
            label: format_race_time(seconds),
            bin: histogram.bin_of(comparison.comparison_seconds),
            comparison,
        }
    });

    if let Some(c) = &comparison {
        tracing::info!(
            time = %c.label,
            percentile = c.comparison.percentile,
            "Compared runner time"
        );
    }

    Ok(Json(SimulateResponse {
        title: format!(
            "Performance Distribution: {} ({:?}, Age {})",
            event.distance,
            event.sex,
            age.years()
        ),
        simulation,
        histogram,
        comparison,
    }))
}
