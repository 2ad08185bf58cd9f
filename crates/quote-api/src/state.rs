//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Holds the quote store handle and the
//! configuration the service was started with.

use quote_core::QuoteStore;

use crate::config::AppConfig;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide quote collection.
    pub store: QuoteStore,
    /// Startup configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create state around an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_store(QuoteStore::new(), AppConfig::default())
    }

    /// Create state around an existing store.
    pub fn with_store(store: QuoteStore, config: AppConfig) -> Self {
        Self { store, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
