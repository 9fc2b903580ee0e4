/**
 * Server Storage Bootstrap
 *
 * This module prepares the save root before the architecture handler is
 * constructed: the directory is created if missing and the index is rebuilt
 * from whatever is already saved there.
 *
 * # Error Handling
 *
 * Unlike optional services, storage is required. Any failure here is
 * returned to the caller and aborts startup.
 */

use std::io;
use std::path::Path;

use tokio::fs;

use crate::backend::architectures::index::ArchitectureIndex;
use crate::backend::architectures::store::ArchitectureStore;
use crate::backend::error::StoreError;

/// Make sure the save root exists, creating it (and any parents) if needed.
///
/// # Errors
///
/// `StoreError::CreateDir` if the directory cannot be created, or if the
/// path exists but is not a directory.
pub async fn ensure_save_dir(path: &Path) -> Result<(), StoreError> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!("Save directory {} exists", path.display());
            Ok(())
        }
        Ok(_) => Err(StoreError::CreateDir {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            ),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("Creating save directory {}", path.display());
            fs::create_dir_all(path)
                .await
                .map_err(|source| StoreError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })
        }
        Err(source) => Err(StoreError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Prepare the save root and load its index
///
/// # Returns
///
/// The store over `save_dir` and the index rebuilt from it
pub async fn load_storage(
    save_dir: &Path,
) -> Result<(ArchitectureStore, ArchitectureIndex), StoreError> {
    ensure_save_dir(save_dir).await?;

    let store = ArchitectureStore::new(save_dir);
    let index = ArchitectureIndex::rebuild(&store).await?;

    Ok((store, index))
}
