use std::sync::Arc;
use std::time::Duration;

use cinestream_core::{Catalog, Config, SearchEngine};
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<Catalog>,
    engine: Mutex<SearchEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: SearchEngine) -> Self {
        Self {
            config,
            catalog: Arc::clone(engine.catalog()),
            engine: Mutex::new(engine),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The catalog, readable without locking the engine.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Exclusive access to the search engine and its history.
    pub async fn engine(&self) -> MutexGuard<'_, SearchEngine> {
        self.engine.lock().await
    }

    /// Keystroke quiet period for live search.
    pub fn debounce(&self) -> Duration {
        self.config.search.debounce()
    }

    /// Number of history entries shown for blank input.
    pub fn history_view_limit(&self) -> usize {
        self.config.search.history_view_limit
    }
}
