//! Day-ahead per-token prediction service.
//!
//! Accepts a history of dated observations per token plus a target date and
//! returns one point forecast per token. The pipeline is a straight line:
//! request handler → prediction orchestrator → forecast engine (one fresh
//! fit-and-predict per token).

pub mod config;
pub mod error;
pub mod forecaster;
pub mod handlers;
pub mod models;
pub mod service;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
use service::PredictionService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/test", get(handlers::diagnostics::smoke_test))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
