//! Per-connection listing session.
//!
//! Each WebSocket client gets its own criteria bus and listing task, so
//! one client's filters and page never leak into another's view.

use tokio::sync::watch;

use super::messages::WsCommand;
use crate::catalog::{ListingHandle, ListingView};
use crate::domain::{CriteriaBus, FilterCriteria};
use crate::error::CatalogError;
use crate::service::CatalogService;

/// Listing state owned by a single WebSocket connection.
#[derive(Debug)]
pub struct ListingSession {
    bus: CriteriaBus,
    listing: ListingHandle,
}

impl ListingSession {
    /// Starts a listing for the current year with no other filters.
    #[must_use]
    pub fn start(service: &CatalogService, bus_capacity: usize) -> Self {
        let bus = CriteriaBus::new(bus_capacity);
        let listing = service.spawn_listing(&bus, FilterCriteria::default());
        Self { bus, listing }
    }

    /// Receiver notified whenever the listing view changes.
    #[must_use]
    pub fn views(&self) -> watch::Receiver<ListingView> {
        self.listing.subscribe()
    }

    /// Applies a client command and returns the response payload.
    ///
    /// The resulting view is delivered separately through [`Self::views`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] for invalid criteria and
    /// [`CatalogError::Internal`] if the listing task has stopped.
    pub async fn execute(&self, command: WsCommand) -> Result<serde_json::Value, CatalogError> {
        match command {
            WsCommand::SetCriteria { criteria } => {
                self.bus.publish(criteria)?;
                Ok(serde_json::json!({ "accepted": "set_criteria" }))
            }
            WsCommand::ChangePage { page, revision } => {
                self.listing.change_page(page, revision).await?;
                Ok(serde_json::json!({ "accepted": "change_page", "page": page }))
            }
            WsCommand::Refresh => {
                self.listing.refresh().await?;
                Ok(serde_json::json!({ "accepted": "refresh" }))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::catalog::ListingPhase;
    use crate::domain::{Event, Sport};
    use crate::source::MemorySource;

    fn make_service() -> CatalogService {
        let year = FilterCriteria::default().selected_year;
        let start = format!("{year}-05-10");
        let events = (0..12)
            .map(|i| {
                Event::new(
                    i.to_string(),
                    format!("Torneo {i}"),
                    if i < 3 { Sport::Baloncesto } else { Sport::Voleibol },
                    start.as_str(),
                    start.as_str(),
                    "Málaga",
                )
            })
            .collect();
        CatalogService::new(Arc::new(MemorySource::new(events, Vec::new())))
    }

    async fn wait_for(
        rx: &mut watch::Receiver<ListingView>,
        predicate: impl FnMut(&ListingView) -> bool,
    ) -> ListingView {
        let waited = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(predicate)).await;
        let Ok(Ok(view)) = waited else {
            panic!("listing never reached the expected view");
        };
        view.clone()
    }

    #[tokio::test]
    async fn set_criteria_updates_view() {
        let session = ListingSession::start(&make_service(), 8);
        let mut views = session.views();
        let ready = wait_for(&mut views, |v| v.phase == ListingPhase::Ready).await;
        assert_eq!(ready.total_matches, 12);

        let criteria = FilterCriteria::default().with_sports([Sport::Baloncesto]);
        let Ok(_) = session.execute(WsCommand::SetCriteria { criteria }).await else {
            panic!("command rejected");
        };
        let view = wait_for(&mut views, |v| v.revision > ready.revision).await;
        assert_eq!(view.total_matches, 3);
    }

    #[tokio::test]
    async fn invalid_criteria_are_rejected() {
        let session = ListingSession::start(&make_service(), 8);
        let criteria = FilterCriteria::default().with_month(Some(12));
        let result = session.execute(WsCommand::SetCriteria { criteria }).await;
        assert!(matches!(result, Err(CatalogError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn change_page_moves_listing() {
        let session = ListingSession::start(&make_service(), 8);
        let mut views = session.views();
        let ready = wait_for(&mut views, |v| v.phase == ListingPhase::Ready).await;

        let command = WsCommand::ChangePage {
            page: 2,
            revision: Some(ready.revision),
        };
        let Ok(_) = session.execute(command).await else {
            panic!("command rejected");
        };
        let view = wait_for(&mut views, |v| v.current_page == 2).await;
        assert_eq!(view.visible.len(), 4);
    }
}
