//! Registration inquiry handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{RegistrationBody, RegistrationResponse};
use crate::app_state::AppState;
use crate::domain::EventId;
use crate::error::{CatalogError, ErrorResponse};

/// `POST /events/{id}/registrations`: Submit a registration inquiry.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] for incomplete contact details
/// and [`CatalogError::EventNotFound`] for unknown events.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/registrations",
    tag = "Registrations",
    summary = "Submit a registration inquiry",
    description = "Validates the visitor's contact details, attaches the event details and accepts the inquiry.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    request_body = RegistrationBody,
    responses(
        (status = 202, description = "Inquiry accepted", body = RegistrationResponse),
        (status = 400, description = "Invalid contact details", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RegistrationBody>,
) -> Result<impl IntoResponse, CatalogError> {
    let receipt = state
        .catalog_service
        .submit_registration(&EventId::new(id), body.into())
        .await?;
    Ok((StatusCode::ACCEPTED, Json(RegistrationResponse::from(receipt))))
}

/// Registration routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/events/{id}/registrations", post(submit_registration))
}
