/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Architecture routes (`/architectures`, `/architectures/`, `/architectures/{id}`)
 * 2. Static assets under `/static/`, served from the static directory
 * 3. Fallback: the viewer's HTML pages, served from `<static>/html`
 *
 * Every request passes through a tracing layer.
 */

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::routes::architecture_routes::configure_architecture_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the store and index
/// * `static_dir` - Directory with the viewer's assets
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router<()> {
    let router = configure_architecture_routes(Router::new());

    // Viewer assets
    let router = router.nest_service("/static", ServeDir::new(static_dir));

    // Viewer pages, and 404 for anything not found there
    let router = router.fallback_service(ServeDir::new(static_dir.join("html")));

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
