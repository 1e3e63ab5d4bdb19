//! WebSocket layer: connection handling, message routing, listing sessions.
//!
//! The WebSocket endpoint at `/ws` gives each client a live listing: the
//! client sends criteria and page commands, the server pushes the updated
//! view after every change.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod session;
