//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::store::MemoryStore;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// The canonical workout record set.
    pub store: Arc<MemoryStore>,
}

impl AppState {
    /// Build state for `config`, seeding the store when configured to.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_sample {
            MemoryStore::with_records([MemoryStore::sample_record()])
        } else {
            MemoryStore::new()
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: MemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
