//! HTTP router for the browser frontend.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! JSON routes are nested under `/api/`, the event stream lives at
//! `/ws/events`, and the frontend bundle (when configured) is served as
//! the fallback.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. Access log

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::api::websocket;
use crate::core_state::CoreState;

/// Build the application router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/view", get(endpoints::view::main_view))
        .route("/header", get(endpoints::view::header))
        .route("/header/admin-toggle", post(endpoints::view::toggle_admin))
        .route("/cards", get(endpoints::cards::list))
        .route("/cards/:id/summary", post(endpoints::cards::view_summary))
        .route(
            "/profiles",
            get(endpoints::profiles::list).post(endpoints::profiles::create),
        )
        .route(
            "/profiles/:id",
            get(endpoints::profiles::detail)
                .put(endpoints::profiles::update)
                .delete(endpoints::profiles::delete),
        )
        .route(
            "/search",
            get(endpoints::queries::search_view).post(endpoints::queries::search),
        )
        .route("/filter", post(endpoints::queries::filter))
        .route("/refresh", post(endpoints::queries::refresh))
        .route("/filters", get(endpoints::filters::options))
        .route("/filters/toggle", post(endpoints::filters::toggle_open))
        .route("/filters/skills", post(endpoints::filters::toggle_skill))
        .route("/filters/location", put(endpoints::filters::set_location))
        .route("/filters/experience", put(endpoints::filters::set_experience))
        .route("/filters/apply", post(endpoints::filters::apply))
        .route("/filters/clear", post(endpoints::filters::clear))
        .route(
            "/selection",
            get(endpoints::selection::current)
                .put(endpoints::selection::select)
                .delete(endpoints::selection::clear),
        )
        .route(
            "/admin",
            get(endpoints::admin::panel).put(endpoints::admin::set_mode),
        )
        .route(
            "/admin/form",
            get(endpoints::admin::form)
                .post(endpoints::admin::begin_create)
                .patch(endpoints::admin::edit_fields)
                .delete(endpoints::admin::cancel),
        )
        .route("/admin/form/submit", post(endpoints::admin::submit))
        .route("/admin/profiles", post(endpoints::admin::create))
        .route(
            "/admin/profiles/:id",
            put(endpoints::admin::update).delete(endpoints::admin::delete),
        )
        .route("/admin/profiles/:id/edit", post(endpoints::admin::begin_edit))
        .route("/map", get(endpoints::map::view))
        .route(
            "/map/markers/:id/select",
            post(endpoints::map::marker_click),
        )
        .with_state(ctx.clone());

    let ws_routes = Router::new()
        .route("/ws/events", get(websocket::ws_upgrade))
        .with_state(ctx.clone());

    let mut router = Router::new().nest("/api", api).merge(ws_routes);

    if let Some(dir) = ctx.core.static_dir.clone() {
        tracing::info!(dir = %dir.display(), "Serving frontend assets");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum::middleware::from_fn(middleware::access_log::log_access))
        .layer(CorsLayer::permissive())
}
