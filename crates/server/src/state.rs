use std::sync::Arc;

use tokio::sync::RwLock;

use flick_catalog::MovieStore;

pub type SharedCatalog = Arc<RwLock<MovieStore>>;

pub struct AppState {
    pub catalog: SharedCatalog,
}

impl AppState {
    /// State over an empty catalog.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(MovieStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
