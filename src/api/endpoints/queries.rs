//! Search and filter endpoints. Each mutation returns the new displayed
//! collection.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SearchRequest};
use crate::models::{FilterCriteria, Profile};
use crate::views::SearchView;

/// `GET /api/search`: current search text and placeholder.
pub async fn search_view(State(ctx): State<ApiContext>) -> Result<Json<SearchView>, ApiError> {
    let panels = ctx.core.read_panels()?;
    Ok(Json(panels.search.view()))
}

/// `POST /api/search`: a search input event.
pub async fn search(
    State(ctx): State<ApiContext>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panels = ctx.core.write_panels()?;
    panels.search.on_input(&mut store, &req.query);
    Ok(Json(store.displayed().to_vec()))
}

/// `POST /api/filter`: filter with explicit criteria, bypassing the form.
pub async fn filter(
    State(ctx): State<ApiContext>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    Ok(Json(store.filter(&criteria).to_vec()))
}

/// `POST /api/refresh`: re-apply the last search or filter.
pub async fn refresh(State(ctx): State<ApiContext>) -> Result<Json<Vec<Profile>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    Ok(Json(store.refresh().to_vec()))
}
