/**
 * Backend Error Types
 *
 * This module defines the errors raised while serving the `/architectures`
 * routes and while bootstrapping the server.
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * `StoreError` covers everything that can go wrong on disk: creating an
 * architecture directory, writing or reading one of its two files, decoding
 * `saveInfo.json`, or scanning the save root. Each variant carries the path
 * (or ID) involved so failures can be told apart.
 *
 * ## Backend Errors
 *
 * `BackendError` is what handlers return. It knows its HTTP status code and
 * its plain-text explanation:
 * - invalid or undecodable documents are the client's fault (400)
 * - unknown architecture IDs are 404
 * - unsupported methods are 405
 * - storage failures are the server's fault (500)
 */

use std::io;
use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors raised by the on-disk architecture store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The directory for an architecture could not be created
    #[error("failed to create architecture directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One of an architecture's files could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One of an architecture's files exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No saved architecture has this ID
    #[error("architecture not found: {id}")]
    NotFound { id: String },

    /// The ID cannot name a save directory
    #[error("invalid architecture id: {id}")]
    InvalidId { id: String },

    /// A document or its save metadata could not be serialized
    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A `saveInfo.json` file is not valid save metadata
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The save root could not be listed
    #[error("failed to scan save directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every freshly generated ID was already taken
    #[error("could not allocate a unique architecture id after {0} attempts")]
    IdExhausted(usize),
}

/// Backend-specific error types
///
/// Handlers return this directly; the `IntoResponse` implementation in
/// `conversion` turns it into a status code and a plain-text body.
///
/// # Usage
///
/// ```rust
/// use ennoea::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("18c3a9f2e1d04b7a");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request body is not a valid architecture document
    ///
    /// Covers both undecodable JSON and documents that break a schema rule.
    #[error("Failed to load architecture: {0}")]
    InvalidDocument(#[from] SharedError),

    /// The requested architecture is not in the index
    #[error("Architecture not found")]
    NotFound { id: String },

    /// The route does not support the request method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Persisting a document failed
    #[error("Failed to save architecture: {0}")]
    Save(#[source] StoreError),

    /// Reading a saved document failed
    #[error("Failed to read architecture file: {0}")]
    Load(#[source] StoreError),

    /// The save root could not be prepared or indexed at startup
    #[error("Failed to initialize architecture storage: {0}")]
    Startup(#[source] StoreError),

    /// Serializing a response body failed
    #[error("Failed to marshal architectures: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Wrap a body that could not be decoded as an architecture
    pub fn decode(err: serde_json::Error) -> Self {
        Self::InvalidDocument(SharedError::from(err))
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidDocument` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `Save` - 400 for an unusable ID, otherwise 500
    /// - `Load` - 404 if the file is gone, otherwise 500
    /// - `Startup`, `Serialization` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDocument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Save(StoreError::InvalidId { .. }) => StatusCode::BAD_REQUEST,
            Self::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Load(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// # Returns
    ///
    /// The plain-text explanation sent as the response body
    pub fn message(&self) -> String {
        match self {
            Self::Load(StoreError::NotFound { .. }) => "Architecture not found".to_string(),
            other => other.to_string(),
        }
    }
}
