//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - `StoreError`, `BackendError` and their status mapping
//! - **`conversion`** - `IntoResponse` for `BackendError`
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Propagation
//!
//! Every error is handled at the handler boundary and becomes a status code
//! plus a plain-text explanation. Nothing is retried. Only `Startup` errors
//! stop the process, because the server cannot run without its save root.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, StoreError};
