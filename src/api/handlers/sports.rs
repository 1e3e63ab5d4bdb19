//! Sport catalog handler.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::SportDto;
use crate::app_state::AppState;
use crate::domain::Sport;

/// `GET /sports`: List selectable sports.
#[utoipa::path(
    get,
    path = "/api/v1/sports",
    tag = "Events",
    summary = "List sports",
    description = "Returns every sport id accepted by the `sports` filter, with its display name.",
    responses(
        (status = 200, description = "Sport catalog", body = Vec<SportDto>),
    )
)]
pub async fn list_sports() -> impl IntoResponse {
    let sports: Vec<SportDto> = Sport::ALL
        .iter()
        .map(|sport| SportDto {
            id: sport.id(),
            name: sport.display_name(),
        })
        .collect();
    Json(sports)
}

/// Sport catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sports", get(list_sports))
}
