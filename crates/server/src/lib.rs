//! Movie catalog API server library.
//!
//! Exposes the building blocks (config, state, router, endpoint
//! handlers) so integration tests and the binary entrypoint can both
//! access them.

pub mod api;
pub mod config;
pub mod router;
pub mod state;
