/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is constructed once at startup and handed to the
 * router. It holds:
 * - The architecture store (save root on disk)
 * - The architecture index (in-memory save metadata)
 * - A save lock that serializes writes
 *
 * # Thread Safety
 *
 * - `Arc<RwLock<ArchitectureIndex>>` lets list/get requests read
 *   concurrently while an upsert holds the write lock
 * - `Arc<Mutex<()>>` is held across persist + upsert, so the files and the
 *   index entry of an architecture always come from the same save
 * - `ArchitectureStore` is immutable after construction
 *
 * # Example
 *
 * ```rust,no_run
 * use ennoea::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let index = state.index.read().await;
 *     let count = index.len();
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::{Mutex, RwLock};

use crate::backend::architectures::index::ArchitectureIndex;
use crate::backend::architectures::store::ArchitectureStore;

/// Shared handle to the architecture index
pub type SharedIndex = Arc<RwLock<ArchitectureIndex>>;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// On-disk storage for architecture documents
    pub store: Arc<ArchitectureStore>,

    /// In-memory save metadata, keyed by architecture ID
    pub index: SharedIndex,

    /// Held for the duration of a save
    pub save_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: ArchitectureStore, index: ArchitectureIndex) -> Self {
        Self {
            store: Arc::new(store),
            index: Arc::new(RwLock::new(index)),
            save_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Implement FromRef for the architecture index
///
/// This allows Axum handlers that only read the index to extract it
/// directly using `State(SharedIndex)`.
impl FromRef<AppState> for SharedIndex {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.index.clone()
    }
}

/// Implement FromRef for the architecture store
impl FromRef<AppState> for Arc<ArchitectureStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
