//! Profile CRUD endpoints.
//!
//! These call the store directly and, like the store, perform no field
//! validation and ignore the admin flag. Validated create/edit goes
//! through `/api/admin/profiles`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListQuery, ListScope};
use crate::models::Profile;

/// `GET /api/profiles?scope=displayed|all`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let store = ctx.core.read_store()?;
    let profiles = match query.scope {
        ListScope::Displayed => store.displayed().to_vec(),
        ListScope::All => store.profiles().to_vec(),
    };
    Ok(Json(profiles))
}

/// `GET /api/profiles/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let store = ctx.core.read_store()?;
    store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Profile not found: {id}")))
}

/// `POST /api/profiles`: any `id` in the body is replaced.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(profile): Json<Profile>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let stored = ctx.core.write_store()?.create(profile);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `PUT /api/profiles/:id`: the path id wins over the body id.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(mut profile): Json<Profile>,
) -> Result<Json<Profile>, ApiError> {
    profile.id = id.clone();
    let mut store = ctx.core.write_store()?;
    store.update(profile)?;
    let updated = store
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::Internal(format!("updated profile {id} vanished")))?;
    Ok(Json(updated))
}

/// `DELETE /api/profiles/:id`: idempotent.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ctx.core.write_store()?.delete(&id);
    Ok(StatusCode::NO_CONTENT)
}
