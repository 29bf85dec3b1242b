//! HTTP API for the browser frontend.
//!
//! Exposes every store operation and every view model as JSON under
//! `/api/`, plus a WebSocket at `/ws/events` that pushes store change
//! events. The router is composable: `api_router()` returns a `Router`
//! that can be mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;
pub mod websocket;

pub use router::api_router;
pub use server::{start_server_on, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
