/**
 * Architecture Handlers
 *
 * HTTP handlers for saving, listing and loading architectures.
 *
 * # Routes
 *
 * - `GET /architectures/` - List save metadata of every architecture
 * - `GET /architectures/{id}` - Load one architecture document
 * - `PUT /architectures/` - Validate and save an architecture document
 * - anything else on these paths - 405 Method Not Allowed
 *
 * Handlers hold no state of their own: side effects go through the store and
 * the index in `AppState`.
 */

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::backend::error::BackendError;
use crate::backend::server::state::{AppState, SharedIndex};
use crate::shared::architecture::Architecture;
use crate::shared::validation::validate;

/// Body of a successful save
pub const SAVED_MESSAGE: &str = "Architecture saved";

/// Handle `GET /architectures/`
///
/// Returns every entry of the index as a JSON array of
/// `{id, name, lastSaved}`. Order is unspecified.
///
/// # Errors
///
/// * `500 Internal Server Error` - If the list cannot be serialized
pub async fn list_architectures(
    State(index): State<SharedIndex>,
) -> Result<Response, BackendError> {
    let saves = index.read().await.list();
    let body = serde_json::to_vec(&saves)?;

    tracing::debug!("[Architectures] Listing {} architectures", saves.len());

    json_response(body)
}

/// Handle `GET /architectures/{id}`
///
/// The index decides whether the architecture exists; the saved document is
/// then returned byte-for-byte as it was written.
///
/// # Errors
///
/// * `404 Not Found` - If the ID is not in the index
/// * `500 Internal Server Error` - If the document cannot be read
pub async fn get_architecture(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, BackendError> {
    if !app_state.index.read().await.contains(&id) {
        return Err(BackendError::not_found(id));
    }

    let document = app_state
        .store
        .load(&id)
        .await
        .map_err(BackendError::Load)?;

    tracing::info!("[Architectures] Loaded architecture {}", id);

    json_response(document)
}

/// Handle `PUT /architectures/`
///
/// Decodes the body as an architecture, validates it, saves it (assigning an
/// ID if it has none) and records it in the index.
///
/// # Returns
///
/// `200 OK` with a plain-text confirmation and a `Location` header pointing
/// at the saved architecture.
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not JSON, is not an architecture, or
///   fails validation
/// * `500 Internal Server Error` - If the document cannot be written
///
/// # Example Request
///
/// ```http
/// PUT /architectures/ HTTP/1.1
/// Content-Type: application/json
///
/// {"info":{"name":"A","description":"d"},"scene":{...},"components":[],"connections":[]}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Location: /architectures/18c3a9f2e1d04b7a
///
/// Architecture saved
/// ```
pub async fn put_architecture(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Response, BackendError> {
    let mut arch: Architecture = serde_json::from_slice(&body).map_err(BackendError::decode)?;

    validate(&arch)?;

    let info = {
        let _guard = app_state.save_lock.lock().await;
        let info = app_state
            .store
            .persist(&mut arch)
            .await
            .map_err(BackendError::Save)?;

        let previous = app_state.index.write().await.upsert(info.clone());
        if previous.is_none() {
            tracing::info!("[Architectures] Registered new architecture {}", info.id);
        }
        info
    };

    let location = format!("/architectures/{}", info.id);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::LOCATION, location),
        ],
        SAVED_MESSAGE,
    )
        .into_response())
}

/// Fallback for unsupported methods on the architecture routes
pub async fn method_not_allowed() -> BackendError {
    BackendError::MethodNotAllowed
}

fn json_response(body: impl Into<Body>) -> Result<Response, BackendError> {
    Ok(([(header::CONTENT_TYPE, "application/json")], body.into()).into_response())
}
