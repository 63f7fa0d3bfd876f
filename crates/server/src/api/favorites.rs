//! Favorites API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use marquee_core::{CatalogItem, FavoritesError};
use serde::Serialize;

use super::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoriteStatus {
    pub id: String,
    pub favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogItem>> {
    Json(state.favorites().list())
}

/// POST /api/v1/favorites
///
/// Adds the movie, or replaces the stored one with the same id.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(movie): Json<CatalogItem>,
) -> Result<(StatusCode, Json<CatalogItem>), (StatusCode, Json<ErrorResponse>)> {
    if movie.id.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Movie id is required")),
        ));
    }

    let stored = state.favorites().add(movie);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/favorites/{id}
pub async fn get_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<FavoriteStatus> {
    let favorite = state.favorites().contains(&id);
    Json(FavoriteStatus { id, favorite })
}

/// DELETE /api/v1/favorites/{id}
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.favorites().remove(&id) {
        Ok(()) => Ok(Json(SuccessResponse {
            message: "Movie removed from favorites".to_string(),
        })),
        Err(FavoritesError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Movie with id {} not found", id))),
        )),
    }
}
