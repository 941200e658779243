pub mod config;
pub mod errors;
pub mod handlers;
pub mod race_time;
pub mod request_id;
pub mod types;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use race_sim::config::SimConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    config::ServerConfig,
    handlers::{AppState, fallback, health_check, list_events, simulate},
    request_id::with_request_tracing,
};

pub fn create_router(config: SimConfig) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events))
        .route("/simulate", post(simulate))
        .fallback(fallback)
        .layer(Extension(state));

    with_request_tracing(router)
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config.sim);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
