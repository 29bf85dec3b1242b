//! Selection endpoints backing the detail overlay.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SelectRequest};
use crate::views::detail::{self, DetailView};

/// `GET /api/selection`: detail view, or `null` with no selection.
pub async fn current(
    State(ctx): State<ApiContext>,
) -> Result<Json<Option<DetailView>>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(detail::detail(&store)))
}

/// `PUT /api/selection`: select a canonical profile by id.
pub async fn select(
    State(ctx): State<ApiContext>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<Option<DetailView>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    if !store.select_by_id(&req.id) {
        return Err(ApiError::NotFound(format!("Profile not found: {}", req.id)));
    }
    Ok(Json(detail::detail(&store)))
}

/// `DELETE /api/selection`: close the overlay.
pub async fn clear(State(ctx): State<ApiContext>) -> Result<StatusCode, ApiError> {
    let mut store = ctx.core.write_store()?;
    detail::close(&mut store);
    Ok(StatusCode::NO_CONTENT)
}
