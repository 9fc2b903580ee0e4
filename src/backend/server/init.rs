/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including storage bootstrap, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Ensure the save root exists
 * 2. Rebuild the architecture index from disk
 * 3. Create the application state
 * 4. Create and configure the router
 *
 * Any failure in steps 1-2 is returned; the binary exits on it.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_storage;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// `BackendError::Startup` if the save root cannot be created or indexed.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Ennoea backend server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state, &config.static_dir);

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the application state for `config` without a router
pub async fn create_state(config: &AppConfig) -> Result<AppState, BackendError> {
    let (store, index) = load_storage(&config.save_dir)
        .await
        .map_err(BackendError::Startup)?;

    tracing::info!(
        "Architecture storage ready at {} ({} saved)",
        store.root().display(),
        index.len()
    );

    Ok(AppState::new(store, index))
}
