//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::JsonStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the JSON store
/// handle. There is no other server-side state: no sessions, no caches.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: JsonStore,
}

impl AppState {
    /// Create a new application state rooted at the configured data dir.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = JsonStore::new(config.data_dir.clone());
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the JSON store.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }
}
