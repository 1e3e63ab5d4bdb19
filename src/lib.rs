//! # athlos-events
//!
//! Sporting event catalog service. Visitors search a remote catalog of
//! events by title, location, sport, month and year, page through the
//! results eight at a time, inspect the services bundled with an event and
//! send registration inquiries.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/) ── one ListingSession per connection
//!     │
//!     ├── CatalogService (service/)
//!     ├── CriteriaBus (domain/)
//!     │
//!     ├── filter / pagination / presenter (catalog/)
//!     │
//!     └── EventSource (source/): Supabase or in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod source;
pub mod ws;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::source::{EventSource, MemorySource, SupabaseSource};

/// Builds the full application router: REST, WebSocket and system routes.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws::handler::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Selects the data source described by `config`.
///
/// Supabase when it is configured, otherwise an in-memory source loaded
/// from the seed file, otherwise an empty in-memory source.
///
/// # Errors
///
/// Returns [`CatalogError`] if the Supabase client cannot be built or the
/// seed file cannot be loaded.
pub async fn build_source(config: &CatalogConfig) -> Result<Arc<dyn EventSource>, CatalogError> {
    if let Some(supabase) = &config.supabase {
        tracing::info!(url = %supabase.url, "using supabase event source");
        let source =
            SupabaseSource::new(&supabase.url, &supabase.anon_key, config.fetch_timeout())?;
        return Ok(Arc::new(source));
    }

    if let Some(path) = &config.events_seed_file {
        return Ok(Arc::new(MemorySource::from_file(path).await?));
    }

    tracing::warn!("no event source configured, serving an empty catalog");
    Ok(Arc::new(MemorySource::default()))
}
