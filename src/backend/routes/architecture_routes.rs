/**
 * Architecture Route Handlers
 *
 * This module wires the architecture handlers into the router.
 *
 * # Routes
 *
 * - `GET /architectures/` - List saved architectures
 * - `PUT /architectures/` - Save an architecture
 * - `GET /architectures/{id}` - Load an architecture
 *
 * The collection is reachable with and without the trailing slash. Every
 * other method on these paths answers 405 with a plain-text body.
 *
 * Request bodies on the collection are capped at
 * [`MAX_ARCHITECTURE_BYTES`]; larger documents get 413 Payload Too Large.
 */

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::backend::architectures::handlers::{
    get_architecture, list_architectures, method_not_allowed, put_architecture,
};
use crate::backend::server::state::AppState;

/// Path prefix of the architecture collection
pub const ARCHITECTURES_PATH: &str = "/architectures";

/// Largest architecture document accepted by `PUT`, in bytes
pub const MAX_ARCHITECTURE_BYTES: usize = 16 * 1024 * 1024;

/// Configure architecture routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with architecture routes configured
pub fn configure_architecture_routes(router: Router<AppState>) -> Router<AppState> {
    let collection = || {
        get(list_architectures)
            .put(put_architecture)
            .fallback(method_not_allowed)
            .layer(DefaultBodyLimit::max(MAX_ARCHITECTURE_BYTES))
    };

    router
        .route(ARCHITECTURES_PATH, collection())
        .route(&format!("{}/", ARCHITECTURES_PATH), collection())
        .route(
            &format!("{}/{{id}}", ARCHITECTURES_PATH),
            get(get_architecture).fallback(method_not_allowed),
        )
}
