pub mod movie;
pub mod store;

pub use movie::{Movie, MovieUpdate, NewMovie};
pub use store::{CatalogError, MovieStore};
