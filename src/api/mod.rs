//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the REST surface.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "athlos-events",
        description = "Sporting event catalog: search, event details, services and registration inquiries."
    ),
    paths(
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::events::list_event_services,
        handlers::registration::submit_registration,
        handlers::sports::list_sports,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::EventDto,
        dto::EventListResponse,
        dto::PaginationMeta,
        dto::ServiceDto,
        dto::ServicesResponse,
        dto::SportDto,
        dto::RegistrationBody,
        dto::RegistrationResponse,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Events", description = "Catalog search and event details"),
        (name = "Registrations", description = "Registration inquiries"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/events",
            "/api/v1/events/{id}",
            "/api/v1/events/{id}/services",
            "/api/v1/events/{id}/registrations",
            "/api/v1/sports",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
