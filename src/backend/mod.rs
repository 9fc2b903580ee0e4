//! Backend Module
//!
//! This module contains all server-side code for Ennoea: an Axum HTTP server
//! that saves, lists and loads architecture documents and serves the viewer's
//! static files.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, storage bootstrap
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`architectures`** - Store, index and handlers for architecture documents
//! - **`error`** - Backend-specific error types and their HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── architectures/  - Architecture persistence
//! └── error/          - Error types
//! ```
//!
//! # Endpoints
//!
//! - `GET /architectures/` - List `{id, name, lastSaved}` of every save
//! - `PUT /architectures/` - Validate and save a document
//! - `GET /architectures/{id}` - Return a saved document
//! - `GET /static/*` - Viewer assets
//! - anything else - Viewer HTML pages
//!
//! # Error Handling
//!
//! Handlers return `Result<Response, BackendError>`. `BackendError` carries the
//! status code and plain-text body of every failure the API can report.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Architecture storage, index and handlers
#[cfg(feature = "ssr")]
pub mod architectures;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use error::{BackendError, StoreError};
