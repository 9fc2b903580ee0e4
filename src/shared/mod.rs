//! Shared Module
//!
//! This module contains the types used on both sides of the
//! `/architectures` API: the architecture document, its save metadata, the
//! validation rules, and configuration. None of it performs I/O, so it can be
//! compiled without the `ssr` feature.

/// Architecture document model
pub mod architecture;

/// Document validation rules
pub mod validation;

/// Save metadata
pub mod save;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use architecture::{Architecture, Component, ComponentKind, Connection, Geometry, Group};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use save::SaveInfo;
pub use validation::validate;
