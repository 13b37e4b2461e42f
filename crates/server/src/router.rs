//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::welcome))
        .route("/health", get(api::health))
        .route("/movies", get(api::movies_list).post(api::movies_create))
        // Literal segments win over the {id} capture in Axum's router,
        // so /movies/top-rated and /movies/search are never swallowed
        // by the lookup route below.
        .route("/movies/top-rated", get(api::top_rated))
        .route("/movies/search", get(api::search))
        .route("/movies/genre/{genre}", get(api::by_genre))
        .route("/movies/director/{director}", get(api::by_director))
        .route(
            "/movies/{id}",
            get(api::movies_get)
                .patch(api::movies_update)
                .delete(api::movies_delete),
        )
        .route(
            "/movies/{id}/rating",
            get(api::ratings_average).post(api::ratings_add),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
