//! Welcome and health endpoints.
//!
//! SRP: server liveness and the API root greeting.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

use super::MessageResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub movie_count: usize,
}

/// Greeting at the API root.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the movie API",
    })
}

/// Liveness check with the current catalog size.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog = state.catalog.read().await;
    Json(HealthResponse {
        status: "ok",
        version: "0.1.0",
        movie_count: catalog.len(),
    })
}
