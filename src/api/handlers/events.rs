//! Event handlers: search, detail and bundled services.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    EventDto, EventListResponse, ListEventsQuery, PaginationMeta, ServicesResponse,
};
use crate::app_state::AppState;
use crate::catalog::PAGE_SIZE;
use crate::domain::EventId;
use crate::error::{CatalogError, ErrorResponse};

/// `GET /events`: Search the catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] on invalid criteria or when the data source
/// cannot be reached.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "Search events",
    description = "Filters the catalog by title, location, sports, month and year (all combined with AND) and returns one page of eight events. Out-of-range pages are clamped.",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "One page of matching events", body = EventListResponse),
        (status = 400, description = "Invalid criteria", body = ErrorResponse),
        (status = 502, description = "Data source unavailable", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<impl IntoResponse, CatalogError> {
    let criteria = query.to_criteria()?;
    let result = state
        .catalog_service
        .search(&criteria, query.page())
        .await?;

    Ok(Json(EventListResponse {
        data: result.events.into_iter().map(EventDto::from).collect(),
        pagination: PaginationMeta {
            page: result.page,
            per_page: PAGE_SIZE,
            total: result.total_matches,
            total_pages: result.total_pages,
        },
    }))
}

/// `GET /events/{id}`: Event details.
///
/// # Errors
///
/// Returns [`CatalogError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event details",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Event details", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let event = state.catalog_service.get_event(&EventId::new(id)).await?;
    Ok(Json(EventDto::from(event)))
}

/// `GET /events/{id}/services`: Services bundled with an event.
///
/// # Errors
///
/// Returns [`CatalogError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/services",
    tag = "Events",
    summary = "List event services",
    description = "Returns accommodation, transport and tour services for the event, oldest first. `status` is `none_offered` when the event has no services.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Services of the event", body = ServicesResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn list_event_services(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let event_id = EventId::new(id);
    let listing = state.catalog_service.services_for_event(&event_id).await?;
    Ok(Json(ServicesResponse::new(event_id.to_string(), listing)))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/services", get(list_event_services))
}
