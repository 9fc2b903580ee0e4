//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Save root bootstrap and index loading
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Storage bootstrap
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Storage Bootstrap**: Creates the save root if it does not exist
//! 2. **Index Rebuild**: Reads every `saveInfo.json` under the save root
//! 3. **State Creation**: Wraps store and index in `AppState`
//! 4. **Router Creation**: Configures architecture and static routes
//!
//! # Example
//!
//! ```rust,no_run
//! use ennoea::backend::server::create_app;
//! use ennoea::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().save_dir("saves").build()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Storage bootstrap
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_state};
pub use state::{AppState, SharedIndex};
