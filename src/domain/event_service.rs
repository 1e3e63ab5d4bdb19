//! Services bundled with an event: accommodation, transport, tours.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EventId;

/// Category of an [`EventService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Hotel or apartment stay.
    Accommodation,
    /// Transfers and travel.
    Transport,
    /// Guided visits.
    Tour,
    /// Anything else, including kinds the catalog does not know.
    #[serde(other)]
    Other,
}

impl ServiceKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Transport => "transport",
            Self::Tour => "tour",
            Self::Other => "other",
        }
    }
}

/// A bookable service attached to one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventService {
    /// Service identifier.
    pub id: EventId,
    /// Creation timestamp; services are listed in ascending order of it.
    pub created_at: DateTime<Utc>,
    /// Event the service belongs to.
    pub event_id: EventId,
    /// Service category.
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    /// Optional illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display title.
    pub title: String,
    /// Spanish description.
    #[serde(default)]
    pub description_es: String,
    /// English description.
    #[serde(default)]
    pub description_en: String,
    /// Free-text price (e.g. `"Desde 150€/noche"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
}

/// Outcome of looking up the services of an event.
///
/// An event without services is a valid, loaded state and is never
/// replaced by sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceListing {
    /// The data source returned at least one service.
    Available(Vec<EventService>),
    /// The data source answered and the event offers no services.
    NoneOffered,
}

impl ServiceListing {
    /// Builds a listing from a source response, sorting by creation time.
    #[must_use]
    pub fn from_services(mut services: Vec<EventService>) -> Self {
        if services.is_empty() {
            return Self::NoneOffered;
        }
        services.sort_by_key(|s| s.created_at);
        Self::Available(services)
    }

    /// Returns the services, empty for [`ServiceListing::NoneOffered`].
    #[must_use]
    pub fn services(&self) -> &[EventService] {
        match self {
            Self::Available(services) => services,
            Self::NoneOffered => &[],
        }
    }

    /// Wire label for the listing state.
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Available(_) => "available",
            Self::NoneOffered => "none_offered",
        }
    }
}
