use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use race_sim::SimError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimError),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Simulation(SimError::InvalidDistribution(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Simulation(_) | AppError::InvalidTime(_) | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Simulation(SimError::InvalidDistribution(e)) => {
                error!("Distribution error: {e}");
                "Internal server error".to_string()
            }
            AppError::Simulation(e) => e.to_string(),
            AppError::InvalidTime(_) => "Format must be MM:SS (e.g. 04:30)".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound => "Not found".to_string(),
            AppError::Internal => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
