//! Movie record CRUD endpoints.
//!
//! SRP: create, read, update, and delete catalog entries.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use flick_catalog::{Movie, MovieUpdate, NewMovie};

use crate::state::AppState;

use super::{catalog_error, not_found, ApiResult, ErrorResponse, MessageResponse};

/// Add a movie to the catalog.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = NewMovie,
    responses(
        (status = 201, description = "Movie added", body = MessageResponse),
        (status = 400, description = "Required fields missing or empty", body = ErrorResponse)
    )
)]
pub async fn movies_create(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewMovie>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let mut catalog = state.catalog.write().await;
    catalog.add(new).map_err(catalog_error)?;
    info!(total = catalog.len(), "movie added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "successfully added",
        }),
    ))
}

/// Full catalog in insertion order.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses((status = 200, description = "All movies", body = [Movie]))
)]
pub async fn movies_list(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    let catalog = state.catalog.read().await;
    Json(catalog.all().to_vec())
}

/// Look up a single movie by id.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "No movie with this id", body = ErrorResponse)
    )
)]
pub async fn movies_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let catalog = state.catalog.read().await;
    catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Movie not found"))
}

/// Overwrite the supplied fields on an existing movie.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie id")),
    request_body = MovieUpdate,
    responses(
        (status = 200, description = "Merged movie", body = Movie),
        (status = 404, description = "No movie with this id", body = ErrorResponse)
    )
)]
pub async fn movies_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<MovieUpdate>,
) -> ApiResult<Json<Movie>> {
    let mut catalog = state.catalog.write().await;
    match catalog.update(&id, update) {
        Some(movie) => {
            info!(id = %id, "movie updated");
            Ok(Json(movie))
        }
        None => Err(not_found("Movie not found")),
    }
}

/// Remove a movie from the catalog.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie removed", body = MessageResponse),
        (status = 404, description = "No movie with this id", body = ErrorResponse)
    )
)]
pub async fn movies_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let mut catalog = state.catalog.write().await;
    if catalog.remove(&id) {
        info!(id = %id, "movie deleted");
        Ok(Json(MessageResponse {
            message: "Movie deleted successfully",
        }))
    } else {
        Err(not_found("Movie not found"))
    }
}
