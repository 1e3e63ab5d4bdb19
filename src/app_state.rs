//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::service::CatalogService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog service for all business logic.
    pub catalog_service: Arc<CatalogService>,
    /// Loaded configuration.
    pub config: Arc<CatalogConfig>,
}

impl AppState {
    /// Creates the state from a service and configuration.
    #[must_use]
    pub fn new(catalog_service: CatalogService, config: CatalogConfig) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            config: Arc::new(config),
        }
    }
}
