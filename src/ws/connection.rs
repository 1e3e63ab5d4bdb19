//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands to the connection's listing and pushing
//! every new listing view to the client.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::session::ListingSession;
use crate::catalog::ListingView;
use crate::error::CatalogError;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Sends the current view right away.
/// - Reads commands from the client and dispatches them to `session`.
/// - Pushes a `listing` event whenever the view changes.
pub async fn run_connection(socket: WebSocket, session: ListingSession) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut views = session.views();

    let initial = listing_event(&views.borrow_and_update());
    if ws_tx.send(Message::text(initial)).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(&text, &session).await;
                        if ws_tx.send(Message::text(response)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // New listing view
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let event = listing_event(&views.borrow_and_update());
                if ws_tx.send(Message::text(event)).await.is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Wraps a view in a `listing` event message.
fn listing_event(view: &ListingView) -> String {
    WsMessage::new(
        uuid::Uuid::new_v4().to_string(),
        WsMessageType::Event,
        serde_json::json!({
            "event": "listing",
            "view": view,
        }),
    )
    .to_json()
}

/// Handles a text message from the client, returning the JSON response.
async fn handle_text_message(text: &str, session: &ListingSession) -> String {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        let err = CatalogError::InvalidRequest("malformed JSON".to_string());
        return WsMessage::error(String::new(), &err).to_json();
    };

    if msg.msg_type != WsMessageType::Command {
        let err = CatalogError::InvalidRequest("expected a command message".to_string());
        return WsMessage::error(msg.id, &err).to_json();
    }

    let command = match serde_json::from_value::<WsCommand>(msg.payload) {
        Ok(command) => command,
        Err(e) => {
            let err = CatalogError::InvalidRequest(format!("unknown command: {e}"));
            return WsMessage::error(msg.id, &err).to_json();
        }
    };

    tracing::debug!(id = %msg.id, ?command, "ws command");
    match session.execute(command).await {
        Ok(payload) => WsMessage::new(msg.id, WsMessageType::Response, payload).to_json(),
        Err(err) => WsMessage::error(msg.id, &err).to_json(),
    }
}
