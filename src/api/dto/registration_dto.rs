//! Registration inquiry DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{RegistrationReceipt, RegistrationRequest};

/// Request body for `POST /events/{id}/registrations`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBody {
    /// Participant full name.
    pub register_user_name: String,
    /// Contact email.
    pub register_user_email: String,
    /// Contact phone.
    pub register_user_phone: String,
    /// Sports club name.
    pub register_club_name: String,
}

impl From<RegistrationBody> for RegistrationRequest {
    fn from(body: RegistrationBody) -> Self {
        Self {
            register_user_name: body.register_user_name,
            register_user_email: body.register_user_email,
            register_user_phone: body.register_user_phone,
            register_club_name: body.register_club_name,
        }
    }
}

/// Response body for an accepted inquiry (202 Accepted).
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    /// Identifier assigned to the inquiry.
    pub registration_id: uuid::Uuid,
    /// Event the inquiry refers to.
    pub event_id: String,
    /// Processing status.
    pub status: String,
    /// Acceptance time.
    pub submitted_at: DateTime<Utc>,
}

impl From<RegistrationReceipt> for RegistrationResponse {
    fn from(receipt: RegistrationReceipt) -> Self {
        Self {
            registration_id: receipt.registration_id,
            event_id: receipt.event_id.to_string(),
            status: receipt.status,
            submitted_at: receipt.submitted_at,
        }
    }
}
