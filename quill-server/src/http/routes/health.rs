//! Health check route

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub backend: String,
    pub connected: bool,
}

/// GET /health - round-trips the store
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.store().ping().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        database: DatabaseHealth {
            backend: state.store().backend().to_string(),
            connected: true,
        },
    }))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
