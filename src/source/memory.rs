//! In-memory event source.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::EventSource;
use crate::domain::{Event, EventId, EventService};
use crate::error::CatalogError;

/// Seed file layout: `{ "events": [...], "services": [...] }`.
#[derive(Debug, Default, Deserialize)]
struct Seed {
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    services: Vec<EventService>,
}

/// Event source backed by a snapshot held in memory.
///
/// The snapshot can be replaced at any time and the source can be told to
/// fail, which makes it the collaborator of choice in tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    events: RwLock<Vec<Event>>,
    services: RwLock<Vec<EventService>>,
    failing: AtomicBool,
}

impl MemorySource {
    /// Creates a source serving the given records.
    #[must_use]
    pub fn new(events: Vec<Event>, services: Vec<EventService>) -> Self {
        Self {
            events: RwLock::new(events),
            services: RwLock::new(services),
            failing: AtomicBool::new(false),
        }
    }

    /// Loads a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Internal`] if the file cannot be read and
    /// [`CatalogError::FetchFailure`] if it is not valid seed JSON.
    pub async fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Internal(format!("{}: {e}", path.display())))?;
        let seed: Seed = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            events = seed.events.len(),
            services = seed.services.len(),
            "loaded event seed"
        );
        Ok(Self::new(seed.events, seed.services))
    }

    /// Replaces the event snapshot.
    pub async fn replace_events(&self, events: Vec<Event>) {
        *self.events.write().await = events;
    }

    /// Makes every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), CatalogError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::FetchFailure(
                "memory source set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl EventSource for MemorySource {
    async fn fetch_all_events(&self) -> Result<Vec<Event>, CatalogError> {
        self.check_available()?;
        Ok(self.events.read().await.clone())
    }

    async fn fetch_services_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<EventService>, CatalogError> {
        self.check_available()?;
        let mut services: Vec<EventService> = self
            .services
            .read()
            .await
            .iter()
            .filter(|service| &service.event_id == event_id)
            .cloned()
            .collect();
        services.sort_by_key(|service| service.created_at);
        Ok(services)
    }
}
