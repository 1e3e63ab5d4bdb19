//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use super::session::ListingSession;
use crate::app_state::AppState;

/// `GET /ws`: Upgrade HTTP connection to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let capacity = state.config.criteria_bus_capacity;
    let service = std::sync::Arc::clone(&state.catalog_service);

    ws.on_upgrade(move |socket| async move {
        let session = ListingSession::start(&service, capacity);
        run_connection(socket, session).await;
    })
}
