//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, static assets and tracing
//! - **`architecture_routes`** - The `/architectures` collection
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs                  - Module exports and documentation
//! ├── router.rs               - Main router creation
//! └── architecture_routes.rs  - Architecture endpoints
//! ```

/// Main router creation
pub mod router;

/// Architecture endpoints
pub mod architecture_routes;

// Re-export commonly used functions
pub use router::create_router;
