//! Composite page endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::views::shell::{self, Header};
use crate::views::MainView;

/// `GET /api/view`: header, cards, map and detail in one response.
pub async fn main_view(State(ctx): State<ApiContext>) -> Result<Json<MainView>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(MainView::compose(&store, ctx.core.map_status())))
}

/// `GET /api/header`
pub async fn header(State(ctx): State<ApiContext>) -> Result<Json<Header>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(shell::header(&store)))
}

/// `POST /api/header/admin-toggle`: the header's mode switch.
pub async fn toggle_admin(State(ctx): State<ApiContext>) -> Result<Json<Header>, ApiError> {
    let mut store = ctx.core.write_store()?;
    shell::toggle_admin(&mut store);
    Ok(Json(shell::header(&store)))
}
