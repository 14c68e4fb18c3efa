//! Application state shared across handlers

use crate::config::Settings;
use crate::search::{Search, SearchCache};
use crate::store::CatalogStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Catalog store
    pub store: Arc<dyn CatalogStore>,
    /// Search orchestrator
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state, wiring the search orchestrator with
    /// its own cache per the configured TTL, capacity, and match mode
    pub fn new(settings: Settings, store: Arc<dyn CatalogStore>) -> Self {
        let settings = Arc::new(settings);
        let cache = SearchCache::new(
            settings.search.cache_ttl_seconds,
            settings.search.cache_capacity,
        );
        let search = Arc::new(
            Search::new(store.clone())
                .with_cache(cache)
                .with_match_mode(settings.search.match_mode),
        );

        Self {
            settings,
            store,
            search,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
