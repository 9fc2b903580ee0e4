//! Architecture Persistence
//!
//! Saving, indexing and serving architecture documents.
//!
//! - **`store`** - On-disk layout: one directory per ID holding
//!   `architecture.json` and `saveInfo.json`
//! - **`index`** - In-memory `id -> SaveInfo` map rebuilt at startup
//! - **`handlers`** - `GET`/`PUT` handlers for `/architectures`
//!
//! # Data Flow
//!
//! A `PUT` decodes the body into an `Architecture`, validates it, persists it
//! through the store (which assigns an ID if needed) and upserts the returned
//! `SaveInfo` into the index. A `GET` of the collection reads only the index;
//! a `GET` of one ID checks the index and streams the stored bytes back.

/// On-disk architecture storage
pub mod store;

/// In-memory index of saved architectures
pub mod index;

/// HTTP handlers
pub mod handlers;

pub use index::ArchitectureIndex;
pub use store::ArchitectureStore;
