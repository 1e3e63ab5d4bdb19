//! Registration inquiries submitted from an event page.
//!
//! The visitor supplies contact details; everything describing the event
//! is copied from the [`Event`] itself so the inquiry cannot disagree with
//! the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Event, EventId, Sport};
use crate::error::CatalogError;

/// Contact details entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Full name.
    pub register_user_name: String,
    /// Contact email.
    pub register_user_email: String,
    /// Contact phone.
    pub register_user_phone: String,
    /// Sports club the participant belongs to.
    pub register_club_name: String,
}

impl RegistrationRequest {
    /// Checks that every field is filled in and the email looks valid.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let required = [
            ("registerUserName", &self.register_user_name),
            ("registerUserEmail", &self.register_user_email),
            ("registerUserPhone", &self.register_user_phone),
            ("registerClubName", &self.register_club_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::InvalidRequest(format!("{field} is required")));
            }
        }

        let email = self.register_user_email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(CatalogError::InvalidRequest(format!(
                "registerUserEmail is not a valid address: {email}"
            )));
        }

        let digits = self
            .register_user_phone
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digits < 6 {
            return Err(CatalogError::InvalidRequest(
                "registerUserPhone must contain at least 6 digits".to_string(),
            ));
        }
        Ok(())
    }
}

/// A complete inquiry: visitor details plus the event they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    /// Event the inquiry refers to.
    pub event_id: EventId,
    /// Sport of the event.
    pub register_sport: Sport,
    /// Club name.
    pub register_club_name: String,
    /// Participant name.
    pub register_user_name: String,
    /// Participant email.
    pub register_user_email: String,
    /// Participant phone.
    pub register_user_phone: String,
    /// Event title.
    pub event_name: String,
    /// Event city, empty when unknown.
    pub event_city: String,
    /// Event address, empty when unknown.
    pub event_address: String,
    /// Event coordinates, empty when unknown.
    pub event_coordinates: String,
    /// Start date as listed.
    pub start_date: String,
    /// End date as listed.
    pub end_date: String,
    /// Competition identifier, if the event has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<String>,
}

impl EventRegistration {
    /// Combines a validated request with the event it targets.
    #[must_use]
    pub fn new(event: &Event, request: RegistrationRequest) -> Self {
        Self {
            event_id: event.id.clone(),
            register_sport: event.sport,
            register_club_name: request.register_club_name.trim().to_string(),
            register_user_name: request.register_user_name.trim().to_string(),
            register_user_email: request.register_user_email.trim().to_string(),
            register_user_phone: request.register_user_phone.trim().to_string(),
            event_name: event.title.clone(),
            event_city: event.city.clone().unwrap_or_default(),
            event_address: event.address.clone().unwrap_or_default(),
            event_coordinates: event.coordinates.clone().unwrap_or_default(),
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
            competition_id: event.competition_id.clone(),
        }
    }
}

/// Acknowledgement returned once an inquiry has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    /// Identifier assigned to the inquiry.
    pub registration_id: uuid::Uuid,
    /// Event the inquiry refers to.
    pub event_id: EventId,
    /// Always `"received"`; inquiries are not yet forwarded anywhere.
    pub status: String,
    /// Acceptance time.
    pub submitted_at: DateTime<Utc>,
}
