//! Process-wide application state shared by every HTTP handler.
//!
//! `CoreState` owns the profile store behind a `RwLock`. All mutations
//! take the write lock for the length of one store operation, so there is
//! a single writer and operations apply in the order requests acquire it.
//! Store events are re-published on a broadcast channel for WebSocket
//! subscribers.
//!
//! Panel controller state (search text, filter form, admin form) sits in a
//! second lock. Handlers that need both take the store lock first.

use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::store::{ProfileStore, StoreEvent, StoreObserver};
use crate::views::{MapStatus, Panels};

/// Events buffered per WebSocket subscriber before it starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    store: RwLock<ProfileStore>,
    panels: RwLock<Panels>,
    /// Mapping service availability, judged once at startup.
    map_status: MapStatus,
    events: broadcast::Sender<StoreEvent>,
    /// Browser frontend assets, if served by this process.
    pub static_dir: Option<PathBuf>,
}

impl CoreState {
    /// Seeded store, no map credential.
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let map_status = MapStatus::from_api_key(config.map_api_key.as_deref());
        if let MapStatus::Unavailable { reason } = &map_status {
            tracing::warn!(reason = %reason, "Map unavailable, serving without it");
        }
        let mut state = Self::with_store(ProfileStore::seeded(), map_status);
        state.static_dir = config.static_dir.clone();
        state
    }

    /// Wrap `store` and bridge its events onto the broadcast channel.
    pub fn with_store(mut store: ProfileStore, map_status: MapStatus) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        store.subscribe(Arc::new(BroadcastObserver {
            tx: events.clone(),
        }));
        Self {
            store: RwLock::new(store),
            panels: RwLock::new(Panels::default()),
            map_status,
            events,
            static_dir: None,
        }
    }

    // ── Store access ────────────────────────────────────────

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, ProfileStore>, CoreError> {
        self.store.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, ProfileStore>, CoreError> {
        self.store.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_panels(&self) -> Result<RwLockReadGuard<'_, Panels>, CoreError> {
        self.panels.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_panels(&self) -> Result<RwLockWriteGuard<'_, Panels>, CoreError> {
        self.panels.write().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Map and events ──────────────────────────────────────

    pub fn map_status(&self) -> &MapStatus {
        &self.map_status
    }

    /// New receiver for store events published from now on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn event_subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards store events to the broadcast channel. Sending never blocks;
/// with no receivers the event is dropped.
struct BroadcastObserver {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreObserver for BroadcastObserver {
    fn on_change(&self, event: &StoreEvent) {
        let _ = self.tx.send(event.clone());
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
