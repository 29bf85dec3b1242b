//! Page shell: header, admin toggle and the composed main page.

use serde::Serialize;

use super::card::{self, ProfileCard};
use super::detail::{self, DetailView};
use super::map::{self, MapStatus, MapView};
use crate::config;
use crate::store::ProfileStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub is_admin: bool,
    pub admin_toggle_label: &'static str,
    pub nav: NavLink,
}

pub fn header(store: &ProfileStore) -> Header {
    let is_admin = store.is_admin();
    let (admin_toggle_label, nav) = if is_admin {
        (
            "Admin Mode",
            NavLink {
                label: "View Profiles",
                href: "/",
            },
        )
    } else {
        (
            "User Mode",
            NavLink {
                label: "Manage Profiles",
                href: "/admin",
            },
        )
    };
    Header {
        title: config::APP_NAME,
        is_admin,
        admin_toggle_label,
        nav,
    }
}

/// Header toggle button. Returns the new flag.
pub fn toggle_admin(store: &mut ProfileStore) -> bool {
    let enabled = !store.is_admin();
    store.set_admin_mode(enabled);
    enabled
}

/// Everything the main route renders in one fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainView {
    pub header: Header,
    pub cards: Vec<ProfileCard>,
    pub map: MapView,
    pub detail: Option<DetailView>,
}

impl MainView {
    pub fn compose(store: &ProfileStore, map_status: &MapStatus) -> Self {
        Self {
            header: header(store),
            cards: card::cards(store),
            map: map::render(store, map_status),
            detail: detail::detail(store),
        }
    }
}
