use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::state::AppState;

use super::{catalog_error, ApiResult, ErrorResponse, MessageResponse};

// ── Types ────────────────────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
pub struct RatingRequest {
    pub rating: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageRatingResponse {
    /// Mean of all ratings, formatted to two decimals.
    pub average_rating: String,
}

// ── Handlers ─────────────────────────────────────────────────────

/// Record a rating for a movie.
#[utoipa::path(
    post,
    path = "/movies/{id}/rating",
    tag = "Ratings",
    params(("id" = String, Path, description = "Movie id")),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Rating recorded", body = MessageResponse),
        (status = 400, description = "Rating outside [1, 5]", body = ErrorResponse),
        (status = 404, description = "No movie with this id", body = ErrorResponse)
    )
)]
pub async fn ratings_add(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RatingRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let mut catalog = state.catalog.write().await;
    catalog.add_rating(&id, req.rating).map_err(catalog_error)?;
    info!(id = %id, rating = req.rating, "rating recorded");
    Ok(Json(MessageResponse {
        message: "Rating added successfully",
    }))
}

/// Mean rating of a movie; 204 while the movie is unrated.
#[utoipa::path(
    get,
    path = "/movies/{id}/rating",
    tag = "Ratings",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Mean rating", body = AverageRatingResponse),
        (status = 204, description = "Movie exists but has no ratings yet"),
        (status = 404, description = "No movie with this id", body = ErrorResponse)
    )
)]
pub async fn ratings_average(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let catalog = state.catalog.read().await;
    match catalog.average_rating(&id) {
        Ok(Some(mean)) => Ok(Json(AverageRatingResponse {
            average_rating: format!("{mean:.2}"),
        })
        .into_response()),
        Ok(None) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => Err(catalog_error(err)),
    }
}
