//! Map panel: markers for the displayed profiles and the info window for
//! the selection. Tiles, pan/zoom and marker clicks are handled by the
//! external mapping service in the browser.

use serde::Serialize;

use crate::store::ProfileStore;

/// Shown in place of the map when the mapping service cannot load.
pub const MAP_UNAVAILABLE_MESSAGE: &str = "Error loading maps";

pub const DEFAULT_ZOOM: u8 = 4;

pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.006,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Whether the mapping service credential is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    Available { api_key: String },
    Unavailable { reason: String },
}

impl MapStatus {
    /// Judge a configured credential. Missing, blank, or whitespace-bearing
    /// keys are unusable.
    pub fn from_api_key(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            None => Self::Unavailable {
                reason: "map API key not configured".into(),
            },
            Some("") => Self::Unavailable {
                reason: "map API key is empty".into(),
            },
            Some(k) if k.chars().any(char::is_whitespace) => Self::Unavailable {
                reason: "map API key contains whitespace".into(),
            },
            Some(k) => Self::Available {
                api_key: k.to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoWindow {
    pub id: String,
    pub position: LatLng,
    pub name: String,
    pub photo: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapView {
    Ready {
        api_key: String,
        center: LatLng,
        zoom: u8,
        markers: Vec<Marker>,
        info_window: Option<InfoWindow>,
    },
    Unavailable {
        message: &'static str,
        reason: String,
    },
}

pub fn render(store: &ProfileStore, status: &MapStatus) -> MapView {
    let api_key = match status {
        MapStatus::Available { api_key } => api_key.clone(),
        MapStatus::Unavailable { reason } => {
            return MapView::Unavailable {
                message: MAP_UNAVAILABLE_MESSAGE,
                reason: reason.clone(),
            }
        }
    };

    let markers = store
        .displayed()
        .iter()
        .map(|p| Marker {
            id: p.id.clone(),
            lat: p.lat,
            lng: p.lng,
        })
        .collect();

    let info_window = store.selected().map(|p| InfoWindow {
        id: p.id.clone(),
        position: LatLng {
            lat: p.lat,
            lng: p.lng,
        },
        name: p.name.clone(),
        photo: p.photo.clone(),
        description: p.description.clone(),
    });

    let center = info_window
        .as_ref()
        .map(|w| w.position)
        .unwrap_or(DEFAULT_CENTER);

    MapView::Ready {
        api_key,
        center,
        zoom: DEFAULT_ZOOM,
        markers,
        info_window,
    }
}

/// Marker click callback from the mapping service.
pub fn on_marker_click(store: &mut ProfileStore, id: &str) -> bool {
    store.select_by_id(id)
}
