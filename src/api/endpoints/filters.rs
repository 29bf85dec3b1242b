//! Filter form endpoints. Edits change the form only; `apply` and `clear`
//! reach the store.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ExperienceRequest, LocationRequest, SkillRequest};
use crate::models::Profile;
use crate::views::{FilterOptions, FilterPanel};

/// Apply `edit` to the shared form and return its options.
fn edit_form(
    ctx: &ApiContext,
    edit: impl FnOnce(&mut FilterPanel),
) -> Result<Json<FilterOptions>, ApiError> {
    let store = ctx.core.read_store()?;
    let mut panels = ctx.core.write_panels()?;
    edit(&mut panels.filter);
    Ok(Json(panels.filter.options(&store)))
}

/// `GET /api/filters`
pub async fn options(State(ctx): State<ApiContext>) -> Result<Json<FilterOptions>, ApiError> {
    let store = ctx.core.read_store()?;
    let panels = ctx.core.read_panels()?;
    Ok(Json(panels.filter.options(&store)))
}

/// `POST /api/filters/toggle`: show or hide the panel.
pub async fn toggle_open(State(ctx): State<ApiContext>) -> Result<Json<FilterOptions>, ApiError> {
    edit_form(&ctx, FilterPanel::toggle_open)
}

/// `POST /api/filters/skills`
pub async fn toggle_skill(
    State(ctx): State<ApiContext>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<FilterOptions>, ApiError> {
    edit_form(&ctx, |panel| panel.toggle_skill(&req.skill))
}

/// `PUT /api/filters/location`
pub async fn set_location(
    State(ctx): State<ApiContext>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<FilterOptions>, ApiError> {
    edit_form(&ctx, |panel| panel.set_location(&req.location))
}

/// `PUT /api/filters/experience`
pub async fn set_experience(
    State(ctx): State<ApiContext>,
    Json(req): Json<ExperienceRequest>,
) -> Result<Json<FilterOptions>, ApiError> {
    edit_form(&ctx, |panel| panel.set_experience(req.tier))
}

/// `POST /api/filters/apply`
pub async fn apply(State(ctx): State<ApiContext>) -> Result<Json<Vec<Profile>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panels = ctx.core.write_panels()?;
    panels.filter.apply(&mut store);
    Ok(Json(store.displayed().to_vec()))
}

/// `POST /api/filters/clear`
pub async fn clear(State(ctx): State<ApiContext>) -> Result<Json<Vec<Profile>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panels = ctx.core.write_panels()?;
    panels.filter.clear(&mut store);
    Ok(Json(store.displayed().to_vec()))
}
