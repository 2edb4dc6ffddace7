//! Application state shared by the route builders.

use domain_items::{ItemService, JsonFileStore, StatsCache};
use std::sync::Arc;

/// Cheap to clone; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Arc<JsonFileStore>,
    pub items: ItemService<JsonFileStore>,
    pub stats: Arc<StatsCache<JsonFileStore>>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data.path.clone()));

        Self {
            items: ItemService::new(store.clone()),
            stats: Arc::new(StatsCache::new(store.clone())),
            store,
            config,
        }
    }
}
