//! Shared types for the API layer.

use std::sync::Arc;

use serde::Deserialize;

use crate::core_state::CoreState;
use crate::models::ExperienceTier;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// Which collection `GET /api/profiles` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListScope {
    /// The displayed collection (after search/filter).
    #[default]
    Displayed,
    /// The canonical collection.
    All,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub scope: ListScope,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminModeRequest {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub location: String,
}

/// `{"tier": null}` selects "Any".
#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub tier: Option<ExperienceTier>,
}
