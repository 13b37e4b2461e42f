//! Catalog discovery endpoints: top-rated ranking, title search,
//! and genre/director filters.
//!
//! SRP: read-only queries across the whole catalog.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use flick_catalog::Movie;

use crate::state::AppState;

use super::{bad_request, not_found, ApiResult, ErrorResponse};

#[derive(Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// Rated movies ranked by descending mean rating.
#[utoipa::path(
    get,
    path = "/movies/top-rated",
    tag = "Browse",
    responses(
        (status = 200, description = "Rated movies, best first", body = [Movie]),
        (status = 404, description = "No movie has a rating yet", body = ErrorResponse)
    )
)]
pub async fn top_rated(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Movie>>> {
    let catalog = state.catalog.read().await;
    let ranked = catalog.top_rated();
    if ranked.is_empty() {
        return Err(not_found("No movies found"));
    }
    Ok(Json(ranked))
}

/// Movies in a genre (case-insensitive exact match).
#[utoipa::path(
    get,
    path = "/movies/genre/{genre}",
    tag = "Browse",
    params(("genre" = String, Path, description = "Genre to match")),
    responses(
        (status = 200, description = "Movies in this genre", body = [Movie]),
        (status = 404, description = "No movie in this genre", body = ErrorResponse)
    )
)]
pub async fn by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> ApiResult<Json<Vec<Movie>>> {
    let catalog = state.catalog.read().await;
    let movies = catalog.by_genre(&genre);
    if movies.is_empty() {
        return Err(not_found("No movies found"));
    }
    Ok(Json(movies))
}

/// Movies by a director (case-insensitive exact match).
#[utoipa::path(
    get,
    path = "/movies/director/{director}",
    tag = "Browse",
    params(("director" = String, Path, description = "Director to match")),
    responses(
        (status = 200, description = "Movies by this director", body = [Movie]),
        (status = 404, description = "No movie by this director", body = ErrorResponse)
    )
)]
pub async fn by_director(
    State(state): State<Arc<AppState>>,
    Path(director): Path<String>,
) -> ApiResult<Json<Vec<Movie>>> {
    let catalog = state.catalog.read().await;
    let movies = catalog.by_director(&director);
    if movies.is_empty() {
        return Err(not_found("No movies found"));
    }
    Ok(Json(movies))
}

/// Title search (case-insensitive substring).
#[utoipa::path(
    get,
    path = "/movies/search",
    tag = "Browse",
    params(("keyword" = Option<String>, Query, description = "Title substring to match")),
    responses(
        (status = 200, description = "Movies whose title matches", body = [Movie]),
        (status = 400, description = "Keyword missing or empty", body = ErrorResponse),
        (status = 404, description = "Nothing matched", body = ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Movie>>> {
    let keyword = params
        .keyword
        .filter(|k| !k.is_empty())
        .ok_or_else(|| bad_request("Keyword is required"))?;
    let catalog = state.catalog.read().await;
    let movies = catalog.search(&keyword);
    if movies.is_empty() {
        return Err(not_found("No movies match the search"));
    }
    Ok(Json(movies))
}
