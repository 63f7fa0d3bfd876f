//! Service status handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use marquee_core::SanitizedConfig;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of favorites currently held in memory.
    pub favorites: usize,
}

/// GET /api/v1/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        favorites: state.favorites().len(),
    })
}

/// GET /api/v1/config
///
/// The OMDb API key is reported only as `api_key_configured`.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}
