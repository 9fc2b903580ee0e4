//! Ennoea - Main Library
//!
//! Ennoea is a 3D software-architecture viewer. This library holds its
//! persistence service: architecture documents are validated, saved under a
//! directory on disk, indexed in memory and served back over HTTP next to the
//! viewer's static files.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Architecture document model and hex color parsing
//!   - Validation rules
//!   - Save metadata, configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - On-disk architecture store and in-memory index
//!   - Error to HTTP response mapping
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `ennoea-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use ennoea::backend::server::init::create_app;
//! use ennoea::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&AppConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The index lives behind `Arc<RwLock<>>`; saves are serialized by a mutex so
//! the files and the index entry of an architecture never disagree.
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for decoding and validation failures
//! - `backend::error::StoreError` for filesystem failures
//! - `backend::error::BackendError` for everything that becomes an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
