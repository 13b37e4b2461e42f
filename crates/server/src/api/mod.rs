//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! Shared response types and error constructors live here in mod.rs.

mod browse;
pub mod doc;
mod health;
mod movies;
mod ratings;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use flick_catalog::CatalogError;

// ── Shared types ─────────────────────────────────────────────────

/// Error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Confirmation body for mutations that do not return a record.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub(crate) type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

// ── Error constructors ───────────────────────────────────────────

pub(crate) fn not_found(msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

pub(crate) fn bad_request(msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

/// Map a catalog failure onto its status code. The display string is
/// already the client-facing message.
pub(crate) fn catalog_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        CatalogError::MovieNotFound => StatusCode::NOT_FOUND,
        CatalogError::MissingFields | CatalogError::RatingOutOfRange => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by route registration.

pub use browse::{by_director, by_genre, search, top_rated};
pub use health::{health, welcome};
pub use movies::{movies_create, movies_delete, movies_get, movies_list, movies_update};
pub use ratings::{ratings_add, ratings_average};
