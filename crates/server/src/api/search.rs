//! Movie search API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use marquee_core::{PagedResult, SearchError};
use serde::Deserialize;
use tracing::warn;

use super::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/movies/search?query=..&page=..&pageSize=..
///
/// `query` must be present and non-empty. `page` defaults to 1 and `pageSize`
/// to the configured default. Both must be
/// integers; out-of-range values are clamped by the paginator.
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<PagedResult>, (StatusCode, Json<ErrorResponse>)> {
    let Query(params) = params.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.body_text())),
        )
    })?;

    // Whitespace-only queries still reach the paginator, which answers them
    // with an empty result.
    let query = match params.query {
        Some(query) if !query.is_empty() => query,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Query parameter is required")),
            ))
        }
    };

    let page = params.page.unwrap_or(1);
    let page_size = params
        .page_size
        .unwrap_or(state.config().search.default_page_size);

    match state.paginator().search(&query, page, page_size).await {
        Ok(result) => Ok(Json(result)),
        Err(SearchError::UpstreamRejected(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))))
        }
        Err(e @ SearchError::Upstream(_)) => {
            warn!("Search for '{}' failed: {}", query, e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}
