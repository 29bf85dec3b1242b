//! WebSocket event stream for the browser frontend.
//!
//! Every connected client receives store events as they happen, so open
//! tabs can refetch the affected view instead of polling.
//!
//! Connection lifecycle:
//! 1. Browser opens `GET /ws/events`
//! 2. Server subscribes to the event channel, then sends Welcome
//! 3. Each store event is forwarded as an `Event` message
//! 4. Ping every 30s; 3 unanswered pings = disconnect

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;

use crate::api::types::ApiContext;
use crate::core_state::CoreState;
use crate::store::StoreEvent;

/// Heartbeat interval: server pings every 30 seconds.
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Disconnect after this many unanswered pings (3 × 30s = 90s).
const MAX_MISSED_HEARTBEATS: u32 = 3;

/// Messages sent to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WsOutgoing {
    Welcome {
        session_id: String,
        version: &'static str,
        profile_count: usize,
    },
    Event {
        event: StoreEvent,
    },
    /// The client fell behind and missed events; it should refetch.
    Resync {
        skipped: u64,
    },
}

// ═══════════════════════════════════════════════════════════
// HeartbeatState
// ═══════════════════════════════════════════════════════════

#[derive(Debug, PartialEq)]
pub(crate) enum HeartbeatAction {
    SendPing,
    Timeout,
}

/// Tracks unanswered pings for one connection.
#[derive(Debug, Default)]
pub(crate) struct HeartbeatState {
    missed: u32,
}

impl HeartbeatState {
    fn on_pong(&mut self) {
        self.missed = 0;
    }

    fn on_tick(&mut self) -> HeartbeatAction {
        if self.missed >= MAX_MISSED_HEARTBEATS {
            return HeartbeatAction::Timeout;
        }
        self.missed += 1;
        HeartbeatAction::SendPing
    }
}

/// WebSocket upgrade handler. No authentication: the event stream carries
/// only ids and counts.
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(ctx): State<ApiContext>) -> impl IntoResponse {
    let core = ctx.core.clone();
    ws.on_upgrade(move |socket| handle_ws(socket, core))
}

async fn send_json(
    sink: &mut futures_util::stream::SplitSink<WebSocket, Message>,
    msg: &WsOutgoing,
) -> bool {
    let json = match serde_json::to_string(msg) {
        Ok(j) => j,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize WS message");
            return true;
        }
    };
    sink.send(Message::Text(json)).await.is_ok()
}

/// Main connection loop: forwards store events and runs the heartbeat
/// until the client goes away.
async fn handle_ws(socket: WebSocket, core: Arc<CoreState>) {
    let (mut sink, mut stream) = socket.split();

    // Subscribe before Welcome so nothing after it is missed.
    let mut events = core.subscribe_events();
    let session_id = uuid::Uuid::new_v4().to_string();

    let profile_count = core.read_store().map(|store| store.profiles().len());
    let profile_count = match profile_count {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(error = %e, "WebSocket closed: store unavailable");
            let _ = sink.close().await;
            return;
        }
    };

    tracing::info!(session_id = %session_id, "WebSocket connected");

    let welcome = WsOutgoing::Welcome {
        session_id: session_id.clone(),
        version: crate::config::APP_VERSION,
        profile_count,
    };
    if !send_json(&mut sink, &welcome).await {
        return;
    }

    let mut heartbeat_state = HeartbeatState::default();
    let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);
    heartbeat.tick().await; // Consume initial immediate tick

    loop {
        tokio::select! {
            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Pong(_))) => heartbeat_state.on_pong(),
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(_)) => break,
                    _ => {} // Incoming text is ignored
                }
            }
            event = events.recv() => {
                let outgoing = match event {
                    Ok(event) => WsOutgoing::Event { event },
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(session_id = %session_id, skipped, "WebSocket client lagging");
                        WsOutgoing::Resync { skipped }
                    }
                    Err(RecvError::Closed) => break,
                };
                if !send_json(&mut sink, &outgoing).await {
                    break;
                }
            }
            _ = heartbeat.tick() => {
                match heartbeat_state.on_tick() {
                    HeartbeatAction::SendPing => {
                        if sink.send(Message::Ping(Vec::new())).await.is_err() {
                            break;
                        }
                    }
                    HeartbeatAction::Timeout => {
                        tracing::info!(
                            session_id = %session_id,
                            "{MAX_MISSED_HEARTBEATS} missed heartbeats, disconnecting"
                        );
                        break;
                    }
                }
            }
        }
    }

    let _ = sink.close().await;
    tracing::info!(session_id = %session_id, "WebSocket disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_times_out_after_missed_pings() {
        let mut state = HeartbeatState::default();
        for _ in 0..MAX_MISSED_HEARTBEATS {
            assert_eq!(state.on_tick(), HeartbeatAction::SendPing);
        }
        assert_eq!(state.on_tick(), HeartbeatAction::Timeout);
    }

    #[test]
    fn pong_resets_missed_count() {
        let mut state = HeartbeatState::default();
        state.on_tick();
        state.on_tick();
        state.on_pong();
        for _ in 0..MAX_MISSED_HEARTBEATS {
            assert_eq!(state.on_tick(), HeartbeatAction::SendPing);
        }
    }

    #[test]
    fn event_message_shape() {
        let msg = WsOutgoing::Event {
            event: StoreEvent::ProfileDeleted { id: "2".into() },
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "Event");
        assert_eq!(json["event"]["type"], "profile_deleted");
        assert_eq!(json["event"]["id"], "2");
    }

    // ═══════════════════════════════════════════════════════════
    // Integration tests: full WebSocket connection lifecycle
    // ═══════════════════════════════════════════════════════════

    use crate::api::router::api_router;
    use tokio::net::TcpListener;
    use tokio_tungstenite::tungstenite;

    async fn setup_ws_server() -> (String, Arc<CoreState>, tokio::task::JoinHandle<()>) {
        let core = Arc::new(CoreState::new());
        let app = api_router(core.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = format!("ws://127.0.0.1:{}/ws/events", addr.port());
        (url, core, handle)
    }

    async fn next_json<S>(ws: &mut S) -> serde_json::Value
    where
        S: futures_util::Stream<Item = Result<tungstenite::Message, tungstenite::Error>> + Unpin,
    {
        loop {
            let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
                .await
                .expect("timeout waiting for message")
                .expect("stream ended")
                .expect("WS error");
            if let tungstenite::Message::Text(text) = msg {
                return serde_json::from_str(&text).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn ws_connect_receives_welcome_message() {
        let (url, _core, server) = setup_ws_server().await;

        let (mut ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("WS connect failed");

        let parsed = next_json(&mut ws).await;
        assert_eq!(parsed["type"], "Welcome");
        assert!(parsed["session_id"].is_string());
        assert_eq!(parsed["profile_count"], 2);

        let _ = ws.close(None).await;
        server.abort();
    }

    #[tokio::test]
    async fn ws_forwards_store_events() {
        let (url, core, server) = setup_ws_server().await;

        let (mut ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("WS connect failed");
        let welcome = next_json(&mut ws).await;
        assert_eq!(welcome["type"], "Welcome");

        core.write_store().unwrap().delete("2");

        let parsed = next_json(&mut ws).await;
        assert_eq!(parsed["type"], "Event");
        assert_eq!(parsed["event"]["type"], "profile_deleted");
        assert_eq!(parsed["event"]["id"], "2");

        core.write_store().unwrap().set_admin_mode(true);
        let parsed = next_json(&mut ws).await;
        assert_eq!(parsed["event"]["type"], "admin_mode_changed");
        assert_eq!(parsed["event"]["enabled"], true);

        let _ = ws.close(None).await;
        server.abort();
    }

    #[tokio::test]
    async fn ws_disconnect_drops_subscription() {
        let (url, core, server) = setup_ws_server().await;

        let (mut ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("WS connect failed");
        next_json(&mut ws).await;
        assert_eq!(core.event_subscriber_count(), 1);

        let _ = ws.close(None).await;
        drop(ws);

        let mut dropped = false;
        for _ in 0..50 {
            if core.event_subscriber_count() == 0 {
                dropped = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(dropped, "subscription should be released after close");
        server.abort();
    }
}
