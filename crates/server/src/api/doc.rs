//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI document, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "flickdb API",
        version = "0.1.0",
        description = "In-memory movie catalog with ratings, discovery, and title search.",
    ),
    tags(
        (name = "Health", description = "Welcome message and liveness"),
        (name = "Movies", description = "Movie record CRUD"),
        (name = "Ratings", description = "Per-movie rating capture and averages"),
        (name = "Browse", description = "Top-rated ranking, genre/director filters, title search"),
    ),
    paths(
        // Health
        crate::api::health::welcome,
        crate::api::health::health,
        // Movies
        crate::api::movies::movies_create,
        crate::api::movies::movies_list,
        crate::api::movies::movies_get,
        crate::api::movies::movies_update,
        crate::api::movies::movies_delete,
        // Ratings
        crate::api::ratings::ratings_add,
        crate::api::ratings::ratings_average,
        // Browse
        crate::api::browse::top_rated,
        crate::api::browse::by_genre,
        crate::api::browse::by_director,
        crate::api::browse::search,
    ),
    components(schemas(
        flick_catalog::Movie,
        flick_catalog::NewMovie,
        flick_catalog::MovieUpdate,
        crate::api::ratings::RatingRequest,
        crate::api::ratings::AverageRatingResponse,
        crate::api::health::HealthResponse,
        crate::api::MessageResponse,
        crate::api::ErrorResponse,
    ))
)]
pub struct ApiDoc;
