//! Event, service and search DTOs.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common_dto::PaginationMeta;
use crate::domain::{Event, EventService, FilterCriteria, ServiceListing, Sport};
use crate::error::CatalogError;

/// Query parameters for `GET /events`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEventsQuery {
    /// Free-text search over titles (case-insensitive substring).
    #[serde(default)]
    pub q: Option<String>,
    /// Free-text location filter (case-insensitive substring).
    #[serde(default)]
    pub location: Option<String>,
    /// Comma-separated sport ids (e.g. `tenis,golf`).
    #[serde(default)]
    pub sports: Option<String>,
    /// Zero-based month (0 = January, 11 = December).
    #[serde(default)]
    pub month: Option<u8>,
    /// Calendar year. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
    /// 1-based page. Defaults to 1.
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListEventsQuery {
    /// Builds the filter criteria described by the query.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] for unknown sport ids or a
    /// month outside `0..=11`.
    pub fn to_criteria(&self) -> Result<FilterCriteria, CatalogError> {
        let mut criteria = FilterCriteria::default();
        if let Some(year) = self.year {
            criteria = criteria.with_year(year);
        }
        if let Some(q) = &self.q {
            criteria = criteria.with_search_term(q.as_str());
        }
        if let Some(location) = &self.location {
            criteria = criteria.with_location(location.as_str());
        }
        criteria = criteria
            .with_sports(parse_sports(self.sports.as_deref())?)
            .with_month(self.month);
        criteria.validate()?;
        Ok(criteria)
    }

    /// Requested page, defaulting to 1.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

/// Parses a comma-separated list of sport ids. Blank entries are skipped.
fn parse_sports(raw: Option<&str>) -> Result<BTreeSet<Sport>, CatalogError> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(Sport::from_str)
        .collect()
}

/// Event as exposed by the REST API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDto {
    /// Event identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Sport id (e.g. `"futbol-sala"`).
    pub sport: String,
    /// Sport display name.
    pub sport_name: String,
    /// Primary image reference.
    pub image: String,
    /// First day, as listed.
    pub start_date: String,
    /// Last day, as listed.
    pub end_date: String,
    /// City or venue.
    pub location: String,
    /// Spanish description.
    pub description_es: String,
    /// English description.
    pub description_en: String,
    /// Promotional video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Secondary image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_2: Option<String>,
    /// Competition identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<String>,
    /// Content management identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cms_id: Option<String>,
    /// City for the registration form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Map coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            sport: event.sport.id().to_string(),
            sport_name: event.sport.display_name().to_string(),
            image: event.image,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            description_es: event.description_es,
            description_en: event.description_en,
            video_url: event.video_url,
            image_2: event.image_2,
            competition_id: event.competition_id,
            cms_id: event.cms_id,
            city: event.city,
            address: event.address,
            coordinates: event.coordinates,
        }
    }
}

/// Response body for `GET /events`.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    /// Events on the requested page.
    pub data: Vec<EventDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Bundled service as exposed by the REST API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceDto {
    /// Service identifier.
    pub id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Category: `accommodation`, `transport`, `tour` or `other`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display title.
    pub title: String,
    /// Illustration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Spanish description.
    pub description_es: String,
    /// English description.
    pub description_en: String,
    /// Free-text price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
}

impl From<EventService> for ServiceDto {
    fn from(service: EventService) -> Self {
        Self {
            id: service.id.to_string(),
            created_at: service.created_at,
            kind: service.kind.as_str().to_string(),
            title: service.title,
            image: service.image,
            description_es: service.description_es,
            description_en: service.description_en,
            price_text: service.price_text,
        }
    }
}

/// Response body for `GET /events/{id}/services`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServicesResponse {
    /// Event the services belong to.
    pub event_id: String,
    /// `available` or `none_offered`.
    pub status: String,
    /// Services, oldest first. Empty when none are offered.
    pub services: Vec<ServiceDto>,
}

impl ServicesResponse {
    /// Builds the response for one event.
    #[must_use]
    pub fn new(event_id: String, listing: ServiceListing) -> Self {
        let status = listing.status_str().to_string();
        let services = match listing {
            ServiceListing::Available(services) => {
                services.into_iter().map(ServiceDto::from).collect()
            }
            ServiceListing::NoneOffered => Vec::new(),
        };
        Self {
            event_id,
            status,
            services,
        }
    }
}

/// Entry of the sport catalog returned by `GET /sports`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SportDto {
    /// Sport id used in filters.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}
