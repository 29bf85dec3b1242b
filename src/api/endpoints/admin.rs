//! Admin panel endpoints.
//!
//! The admin flag only changes what `GET /api/admin` shows. It is not
//! checked by the form endpoints below or by any other route.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AdminModeRequest, ApiContext};
use crate::models::Profile;
use crate::views::{AdminPanel, AdminView, FormError, OpenForm, ProfileForm};

/// `GET /api/admin`: management list with the open form, or the access
/// message.
pub async fn panel(State(ctx): State<ApiContext>) -> Result<Json<AdminView>, ApiError> {
    let store = ctx.core.read_store()?;
    let panels = ctx.core.read_panels()?;
    Ok(Json(panels.admin.view(&store)))
}

/// `PUT /api/admin`: set admin mode.
pub async fn set_mode(
    State(ctx): State<ApiContext>,
    Json(req): Json<AdminModeRequest>,
) -> Result<Json<AdminView>, ApiError> {
    let mut store = ctx.core.write_store()?;
    store.set_admin_mode(req.enabled);
    let panels = ctx.core.read_panels()?;
    Ok(Json(panels.admin.view(&store)))
}

// ═══════════════════════════════════════════════════════════
// Shared form
// ═══════════════════════════════════════════════════════════

/// `GET /api/admin/form`: the open form, or `null`.
pub async fn form(State(ctx): State<ApiContext>) -> Result<Json<Option<OpenForm>>, ApiError> {
    let panels = ctx.core.read_panels()?;
    Ok(Json(panels.admin.open_form().cloned()))
}

/// `POST /api/admin/form`: "Add New Profile".
pub async fn begin_create(State(ctx): State<ApiContext>) -> Result<Json<Option<OpenForm>>, ApiError> {
    let mut panels = ctx.core.write_panels()?;
    panels.admin.begin_create();
    Ok(Json(panels.admin.open_form().cloned()))
}

/// `POST /api/admin/profiles/:id/edit`: "Edit" on a row.
pub async fn begin_edit(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Option<OpenForm>>, ApiError> {
    let store = ctx.core.read_store()?;
    let profile = store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Profile not found: {id}")))?;
    let mut panels = ctx.core.write_panels()?;
    panels.admin.begin_edit(profile);
    Ok(Json(panels.admin.open_form().cloned()))
}

/// `PATCH /api/admin/form`: field edits on the open form.
pub async fn edit_fields(
    State(ctx): State<ApiContext>,
    Json(edits): Json<ProfileForm>,
) -> Result<Json<Option<OpenForm>>, ApiError> {
    let mut panels = ctx.core.write_panels()?;
    panels
        .admin
        .fields_mut()
        .ok_or(FormError::NoOpenForm)?
        .merge_edits(edits);
    Ok(Json(panels.admin.open_form().cloned()))
}

/// `DELETE /api/admin/form`: "Cancel".
pub async fn cancel(State(ctx): State<ApiContext>) -> Result<StatusCode, ApiError> {
    let mut panels = ctx.core.write_panels()?;
    panels.admin.cancel();
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/admin/form/submit`: save the open form. Invalid input keeps
/// the form open.
pub async fn submit(State(ctx): State<ApiContext>) -> Result<Json<Profile>, ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panels = ctx.core.write_panels()?;
    Ok(Json(panels.admin.submit(&mut store)?))
}

/// `DELETE /api/admin/profiles/:id`: "Delete" on a row. Closes the form if
/// it was editing that profile.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panels = ctx.core.write_panels()?;
    panels.admin.delete(&mut store, &id);
    Ok(StatusCode::NO_CONTENT)
}

// ═══════════════════════════════════════════════════════════
// One-shot form submissions
// ═══════════════════════════════════════════════════════════

/// `POST /api/admin/profiles`: validated create in one request. Leaves the
/// shared form alone.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(form): Json<ProfileForm>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let mut store = ctx.core.write_store()?;
    let mut panel = AdminPanel::new();
    panel.begin_create();
    panel
        .fields_mut()
        .ok_or(FormError::NoOpenForm)?
        .merge_edits(form);
    let stored = panel.submit(&mut store)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `PUT /api/admin/profiles/:id`: validated edit in one request. Details
/// the form does not carry are kept from the stored profile.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Profile>, ApiError> {
    let mut store = ctx.core.write_store()?;
    let existing = store
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Profile not found: {id}")))?;

    let mut panel = AdminPanel::new();
    panel.begin_edit(&existing);
    panel
        .fields_mut()
        .ok_or(FormError::NoOpenForm)?
        .merge_edits(form);
    Ok(Json(panel.submit(&mut store)?))
}
