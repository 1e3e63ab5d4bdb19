//! Data source layer: where event and service records come from.
//!
//! The catalog never owns event data. It reads complete snapshots through
//! the [`EventSource`] trait; [`SupabaseSource`] talks to the managed
//! backend over its REST interface and [`MemorySource`] serves a fixed
//! snapshot for tests and offline runs.

pub mod memory;
pub mod supabase;

use async_trait::async_trait;

use crate::domain::{Event, EventId, EventService};
use crate::error::CatalogError;

pub use memory::MemorySource;
pub use supabase::SupabaseSource;

/// Read access to the remote catalog.
///
/// Calls are single-shot: timeouts and retries, if any, belong to the
/// implementation.
#[async_trait]
pub trait EventSource: Send + Sync + std::fmt::Debug {
    /// Fetches every event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FetchFailure`] if the source is unreachable
    /// or answers with an error.
    async fn fetch_all_events(&self) -> Result<Vec<Event>, CatalogError>;

    /// Fetches the services bundled with one event, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FetchFailure`] if the source is unreachable
    /// or answers with an error.
    async fn fetch_services_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<EventService>, CatalogError>;

    /// Fetches a single event, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FetchFailure`] if the source is unreachable
    /// or answers with an error.
    async fn fetch_event(&self, event_id: &EventId) -> Result<Option<Event>, CatalogError> {
        let events = self.fetch_all_events().await?;
        Ok(events.into_iter().find(|event| &event.id == event_id))
    }
}
