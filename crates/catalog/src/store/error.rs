use thiserror::Error;

/// Failures surfaced by catalog operations. The display strings are
/// the exact messages returned to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Movie not found")]
    MovieNotFound,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}
