//! Sporting event records as delivered by the data source.
//!
//! Dates are kept exactly as received and parsed on demand, so a single
//! malformed record never prevents the rest of the catalog from loading.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::Sport;
use crate::error::CatalogError;

/// Identifier of an [`Event`].
///
/// Upstream ids are opaque strings (numeric ids are accepted and kept in
/// their decimal form); uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

impl EventId {
    /// Wraps an upstream identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A sporting event available for travel-package booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Sport category.
    pub sport: Sport,
    /// Primary image reference.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub image: String,
    /// First day of the event, as received.
    pub start_date: String,
    /// Last day of the event, as received. Equal to `start_date` for
    /// single-day events.
    pub end_date: String,
    /// Free-text city or venue.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub location: String,
    /// Spanish description.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description_es: String,
    /// English description.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description_en: String,
    /// Optional promotional video.
    #[serde(default, rename = "vide_url", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Optional secondary image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_2: Option<String>,
    /// Competition identifier on the registration platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<String>,
    /// Content management identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cms_id: Option<String>,
    /// City used for the registration form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street address for mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Coordinates for mapping, as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl Event {
    /// Creates an event with the required attributes; the rest are empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        sport: Sport,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(id),
            title: title.into(),
            sport,
            image: String::new(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            location: location.into(),
            description_es: String::new(),
            description_en: String::new(),
            video_url: None,
            image_2: None,
            competition_id: None,
            cms_id: None,
            city: None,
            address: None,
            coordinates: None,
        }
    }

    /// Parses the start date.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEventDate`] if the stored value is
    /// not a recognised date.
    pub fn start(&self) -> Result<NaiveDate, CatalogError> {
        parse_event_date(&self.start_date).ok_or_else(|| CatalogError::MalformedEventDate {
            event_id: self.id.to_string(),
            value: self.start_date.clone(),
        })
    }
}

/// Upstream rows carry `null` for missing text columns.
fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_plain_dates() {
        let event = Event::new(
            "1",
            "Wimbledon 2025",
            Sport::Tenis,
            "2025-07-01",
            "2025-07-14",
            "Londres",
        );
        let Ok(start) = event.start() else {
            panic!("expected a valid start date");
        };
        assert_eq!((start.year(), start.month0()), (2025, 6));
    }

    #[test]
    fn parses_timestamps() {
        assert_eq!(
            parse_event_date("2025-03-09T18:00:00+01:00"),
            NaiveDate::from_ymd_opt(2025, 3, 9)
        );
        assert_eq!(
            parse_event_date("2025-03-09T18:00:00"),
            NaiveDate::from_ymd_opt(2025, 3, 9)
        );
    }

    #[test]
    fn malformed_date_is_reported() {
        let event = Event::new("7", "Open", Sport::Golf, "soon", "soon", "Madrid");
        let Err(err) = event.start() else {
            panic!("expected a malformed date error");
        };
        assert!(matches!(err, CatalogError::MalformedEventDate { .. }));
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let id: Option<EventId> = serde_json::from_str("17").ok();
        assert_eq!(id, Some(EventId::new("17")));
    }

    #[test]
    fn deserializes_upstream_row() {
        let json = r#"{
            "id": "42",
            "title": "Copa Mundial",
            "sport": "futbol",
            "image": "https://img/1.png",
            "start_date": "2025-06-10",
            "end_date": "2025-07-10",
            "location": "Nueva York",
            "description_es": null,
            "description_en": "Final",
            "vide_url": "https://video",
            "city": "New York",
            "address": null
        }"#;
        let Ok(event) = serde_json::from_str::<Event>(json) else {
            panic!("row should deserialize");
        };
        assert_eq!(event.id.as_str(), "42");
        assert_eq!(event.sport, Sport::Futbol);
        assert_eq!(event.video_url.as_deref(), Some("https://video"));
        assert!(event.address.is_none());
        assert!(event.description_es.is_empty());
    }
}
