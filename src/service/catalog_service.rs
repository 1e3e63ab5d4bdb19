//! Catalog service: one-shot queries and listing sessions over a source.

use std::sync::Arc;

use chrono::Utc;

use crate::catalog::{
    ListingHandle, PAGE_SIZE, filter_events, paginate, spawn_listing, total_pages,
};
use crate::domain::{
    CriteriaBus, Event, EventId, EventRegistration, FilterCriteria, RegistrationReceipt,
    RegistrationRequest, ServiceListing,
};
use crate::error::CatalogError;
use crate::source::EventSource;

/// One page of a search over the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Events on the requested page.
    pub events: Vec<Event>,
    /// Page actually served, clamped to `[1, total_pages]`.
    pub page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Number of events matching the criteria.
    pub total_matches: usize,
}

/// Coordinates reads against the [`EventSource`] and starts listing
/// sessions bound to it.
#[derive(Debug, Clone)]
pub struct CatalogService {
    source: Arc<dyn EventSource>,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self { source }
    }

    /// Fetches the catalog, filters it and returns the requested page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] for out-of-range criteria
    /// and [`CatalogError::FetchFailure`] if the source fails.
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        page: usize,
    ) -> Result<SearchPage, CatalogError> {
        criteria.validate()?;
        let events = self.source.fetch_all_events().await?;
        let filtered = filter_events(&events, criteria);

        let total_matches = filtered.len();
        let total_pages = total_pages(total_matches, PAGE_SIZE);
        let page = page.clamp(1, total_pages);
        let visible = paginate(&filtered, page, PAGE_SIZE).visible;

        tracing::debug!(
            fetched = events.len(),
            total_matches,
            page,
            "catalog search"
        );

        Ok(SearchPage {
            events: visible,
            page,
            total_pages,
            total_matches,
        })
    }

    /// Looks up a single event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] if the source does not know
    /// the id, or [`CatalogError::FetchFailure`] if the source fails.
    pub async fn get_event(&self, event_id: &EventId) -> Result<Event, CatalogError> {
        self.source
            .fetch_event(event_id)
            .await?
            .ok_or_else(|| CatalogError::EventNotFound(event_id.to_string()))
    }

    /// Returns the services bundled with an event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] for unknown events and
    /// [`CatalogError::FetchFailure`] if the source fails.
    pub async fn services_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<ServiceListing, CatalogError> {
        let event = self.get_event(event_id).await?;
        let services = self.source.fetch_services_for_event(&event.id).await?;
        let listing = ServiceListing::from_services(services);
        tracing::debug!(%event_id, status = listing.status_str(), "services loaded");
        Ok(listing)
    }

    /// Accepts a registration inquiry for an event.
    ///
    /// The inquiry is validated, combined with the event details and
    /// logged. It is not forwarded to any external system.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] if the request is
    /// incomplete, [`CatalogError::EventNotFound`] for unknown events and
    /// [`CatalogError::FetchFailure`] if the source fails.
    pub async fn submit_registration(
        &self,
        event_id: &EventId,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, CatalogError> {
        request.validate()?;
        let event = self.get_event(event_id).await?;
        let registration = EventRegistration::new(&event, request);

        let receipt = RegistrationReceipt {
            registration_id: uuid::Uuid::new_v4(),
            event_id: registration.event_id.clone(),
            status: "received".to_string(),
            submitted_at: Utc::now(),
        };

        tracing::info!(
            registration_id = %receipt.registration_id,
            event_id = %registration.event_id,
            event_name = %registration.event_name,
            sport = %registration.register_sport,
            club = %registration.register_club_name,
            "registration received"
        );

        Ok(receipt)
    }

    /// Starts a listing session that follows the criteria published on
    /// `bus`.
    #[must_use]
    pub fn spawn_listing(&self, bus: &CriteriaBus, initial: FilterCriteria) -> ListingHandle {
        spawn_listing(Arc::clone(&self.source), bus.subscribe(), initial)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::ListingPhase;
    use crate::domain::{EventService, ServiceKind, Sport};
    use crate::source::MemorySource;

    fn make_events() -> Vec<Event> {
        let mut events: Vec<Event> = (0..10)
            .map(|i| {
                Event::new(
                    format!("n{i}"),
                    format!("Travesía {i}"),
                    Sport::Natacion,
                    "2025-08-02",
                    "2025-08-02",
                    "Barcelona",
                )
            })
            .collect();
        let mut open = Event::new(
            "t1",
            "Mutua Madrid Open",
            Sport::Tenis,
            "2025-04-24",
            "2025-05-04",
            "Madrid",
        );
        open.city = Some("Madrid".to_string());
        events.push(open);
        events
    }

    fn make_service(source: MemorySource) -> CatalogService {
        CatalogService::new(Arc::new(source))
    }

    fn tennis_services() -> Vec<EventService> {
        vec![EventService {
            id: EventId::new("s1"),
            created_at: Utc::now(),
            event_id: EventId::new("t1"),
            kind: ServiceKind::Transport,
            image: None,
            title: "Traslado aeropuerto".to_string(),
            description_es: String::new(),
            description_en: String::new(),
            price_text: None,
        }]
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            register_user_name: "Marta Gil".to_string(),
            register_user_email: "marta@club.es".to_string(),
            register_user_phone: "600123123".to_string(),
            register_club_name: "CT Chamartín".to_string(),
        }
    }

    #[tokio::test]
    async fn search_filters_and_paginates() {
        let service = make_service(MemorySource::new(make_events(), Vec::new()));
        let criteria = FilterCriteria::for_year(2025).with_sports([Sport::Natacion]);

        let Ok(first) = service.search(&criteria, 1).await else {
            panic!("search failed");
        };
        assert_eq!(first.total_matches, 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.events.len(), 8);

        let Ok(last) = service.search(&criteria, 7).await else {
            panic!("search failed");
        };
        assert_eq!(last.page, 2);
        assert_eq!(last.events.len(), 2);
    }

    #[tokio::test]
    async fn search_rejects_invalid_month() {
        let service = make_service(MemorySource::new(make_events(), Vec::new()));
        let criteria = FilterCriteria::for_year(2025).with_month(Some(12));
        let result = service.search(&criteria, 1).await;
        assert!(matches!(result, Err(CatalogError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn search_propagates_fetch_failure() {
        let source = MemorySource::new(make_events(), Vec::new());
        source.set_failing(true);
        let service = make_service(source);
        let result = service.search(&FilterCriteria::for_year(2025), 1).await;
        assert!(matches!(result, Err(CatalogError::FetchFailure(_))));
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let service = make_service(MemorySource::new(make_events(), Vec::new()));
        let result = service.get_event(&EventId::new("missing")).await;
        assert_eq!(
            result.err(),
            Some(CatalogError::EventNotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn services_distinguish_none_offered() {
        let service = make_service(MemorySource::new(make_events(), tennis_services()));

        let Ok(tennis) = service.services_for_event(&EventId::new("t1")).await else {
            panic!("lookup failed");
        };
        assert_eq!(tennis.services().len(), 1);

        let Ok(swim) = service.services_for_event(&EventId::new("n0")).await else {
            panic!("lookup failed");
        };
        assert_eq!(swim, ServiceListing::NoneOffered);
    }

    #[tokio::test]
    async fn registration_returns_receipt() {
        let service = make_service(MemorySource::new(make_events(), Vec::new()));
        let Ok(receipt) = service
            .submit_registration(&EventId::new("t1"), request())
            .await
        else {
            panic!("registration failed");
        };
        assert_eq!(receipt.event_id, EventId::new("t1"));
        assert_eq!(receipt.status, "received");
    }

    #[tokio::test]
    async fn invalid_registration_is_rejected_before_lookup() {
        let source = MemorySource::new(make_events(), Vec::new());
        source.set_failing(true);
        let service = make_service(source);

        let mut req = request();
        req.register_user_email = "not-an-email".to_string();
        let result = service.submit_registration(&EventId::new("t1"), req).await;
        assert!(matches!(result, Err(CatalogError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn spawned_listing_follows_bus() {
        let service = make_service(MemorySource::new(make_events(), Vec::new()));
        let bus = CriteriaBus::new(16);
        let handle = service.spawn_listing(&bus, FilterCriteria::for_year(2025));
        let mut rx = handle.subscribe();

        let ready = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            rx.wait_for(|v| v.phase == ListingPhase::Ready),
        )
        .await;
        let Ok(Ok(ready)) = ready else {
            panic!("listing never became ready");
        };
        assert_eq!(ready.total_matches, 11);
    }
}
