//! Map panel endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::views::map::{self, MapView};

/// `GET /api/map`
pub async fn view(State(ctx): State<ApiContext>) -> Result<Json<MapView>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(map::render(&store, ctx.core.map_status())))
}

/// `POST /api/map/markers/:id/select`: marker click callback.
pub async fn marker_click(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<MapView>, ApiError> {
    let mut store = ctx.core.write_store()?;
    if !map::on_marker_click(&mut store, &id) {
        return Err(ApiError::NotFound(format!("Profile not found: {id}")));
    }
    Ok(Json(map::render(&store, ctx.core.map_status())))
}
