//! Profile card grid endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::views::card::{self, ProfileCard};
use crate::views::detail::{self, DetailView};

/// `GET /api/cards`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<ProfileCard>>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(card::cards(&store)))
}

/// `POST /api/cards/:id/summary`: the card's "View Summary" button. Only
/// displayed profiles can be picked this way.
pub async fn view_summary(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Option<DetailView>>, ApiError> {
    let mut store = ctx.core.write_store()?;
    if !card::on_view_summary(&mut store, &id) {
        return Err(ApiError::NotFound(format!("Profile not displayed: {id}")));
    }
    Ok(Json(detail::detail(&store)))
}
