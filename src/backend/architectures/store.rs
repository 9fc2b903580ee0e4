/**
 * Architecture Store
 *
 * Owns the on-disk layout of saved architectures. Every architecture gets a
 * directory named after its ID under the save root, holding two files:
 *
 * ```text
 * saves/
 * ├── 18c3a9f2e1d04b7a/
 * │   ├── saveInfo.json      {id, name, lastSaved}
 * │   └── architecture.json  the full document
 * └── 18c3aa07c2f95e10/
 *     ├── saveInfo.json
 *     └── architecture.json
 * ```
 *
 * # Writes
 *
 * Each file is written to a uniquely named temp file next to it and renamed
 * into place, so a concurrent reader sees either the old or the new file,
 * never a truncated one. `architecture.json` is written before
 * `saveInfo.json`; a directory without `saveInfo.json` is an interrupted save
 * and is skipped by [`ArchitectureStore::scan`].
 *
 * # IDs
 *
 * New IDs are the current UNIX time in nanoseconds, in lowercase hex. The
 * directory for a new ID is created exclusively, so an ID that is already on
 * disk is never handed out twice.
 */

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use tokio::fs;
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::architecture::Architecture;
use crate::shared::save::SaveInfo;
use crate::shared::validation::is_valid_id;

/// File holding the full architecture document
pub const ARCHITECTURE_FILE: &str = "architecture.json";

/// File holding the save metadata
pub const SAVE_INFO_FILE: &str = "saveInfo.json";

/// How many fresh IDs to try before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// Filesystem-backed storage for architecture documents
#[derive(Debug, Clone)]
pub struct ArchitectureStore {
    root: PathBuf,
}

impl ArchitectureStore {
    /// Create a store over an existing save root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The save root
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// Save a validated document, assigning it an ID if it has none.
    ///
    /// On return `arch.info.id` holds the ID the document was saved under.
    /// Saving under an existing ID overwrites both files in place.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if a supplied ID cannot name a directory
    /// - `CreateDir` / `IdExhausted` if the directory could not be made
    /// - `Encode` / `Write` if either file could not be written
    pub async fn persist(&self, arch: &mut Architecture) -> Result<SaveInfo, StoreError> {
        if arch.is_new() {
            arch.info.id = self.allocate_id().await?;
            tracing::debug!("[Store] Allocated architecture id {}", arch.id());
        } else {
            if !is_valid_id(arch.id()) {
                return Err(StoreError::InvalidId {
                    id: arch.id().to_string(),
                });
            }
            let dir = self.dir(arch.id());
            fs::create_dir_all(&dir)
                .await
                .map_err(|source| StoreError::CreateDir { path: dir, source })?;
        }

        let dir = self.dir(arch.id());

        let document = serde_json::to_vec(arch).map_err(|source| StoreError::Encode {
            what: "architecture",
            source,
        })?;
        write_atomic(&dir, ARCHITECTURE_FILE, &document).await?;

        let info = SaveInfo::now(arch);
        let summary = serde_json::to_vec(&info).map_err(|source| StoreError::Encode {
            what: "save info",
            source,
        })?;
        write_atomic(&dir, SAVE_INFO_FILE, &summary).await?;

        tracing::info!(
            "[Store] Saved architecture {} ({}) at {}",
            info.id,
            info.name,
            info.last_saved
        );
        Ok(info)
    }

    /// Read the raw bytes of a saved document.
    ///
    /// The bytes are returned as written, without decoding.
    pub async fn load(&self, id: &str) -> Result<Bytes, StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        let path = self.dir(id).join(ARCHITECTURE_FILE);
        match fs::read(&path).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound { id: id.to_string() })
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Read the save metadata of one architecture.
    ///
    /// Returns `Ok(None)` if the directory has no `saveInfo.json`.
    pub async fn load_save_info(&self, id: &str) -> Result<Option<SaveInfo>, StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }

        let path = self.dir(id).join(SAVE_INFO_FILE);
        let contents = match fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        serde_json::from_slice(&contents)
            .map(Some)
            .map_err(|source| StoreError::Decode { path, source })
    }

    /// Read the save metadata of every architecture under the save root.
    ///
    /// Files at the top level are ignored. Directories that are not valid
    /// IDs, lack either file, or whose metadata names a different ID are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails if the root cannot be listed or any `saveInfo.json` present
    /// cannot be read or decoded.
    pub async fn scan(&self) -> Result<Vec<SaveInfo>, StoreError> {
        let scan_error = |source| StoreError::Scan {
            path: self.root.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.root).await.map_err(scan_error)?;
        let mut saves = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(scan_error)? {
            let file_type = entry.file_type().await.map_err(scan_error)?;
            if !file_type.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_valid_id(&name) {
                tracing::warn!(
                    "[Store] Skipping directory {:?}: not an architecture id",
                    name
                );
                continue;
            }

            let info = match self.load_save_info(&name).await? {
                Some(info) if info.id == name => info,
                Some(info) => {
                    tracing::warn!(
                        "[Store] Skipping {}: {} names architecture {}",
                        name,
                        SAVE_INFO_FILE,
                        info.id
                    );
                    continue;
                }
                None => {
                    tracing::warn!(
                        "[Store] Skipping {}: no {} (incomplete save)",
                        name,
                        SAVE_INFO_FILE
                    );
                    continue;
                }
            };

            let document = entry.path().join(ARCHITECTURE_FILE);
            if !fs::try_exists(&document).await.map_err(scan_error)? {
                tracing::warn!(
                    "[Store] Skipping {}: no {} next to its {}",
                    name,
                    ARCHITECTURE_FILE,
                    SAVE_INFO_FILE
                );
                continue;
            }

            saves.push(info);
        }

        Ok(saves)
    }

    /// Create the directory for a brand-new architecture and return its ID.
    async fn allocate_id(&self) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_id();
            let dir = self.dir(&id);
            match fs::create_dir(&dir).await {
                Ok(()) => return Ok(id),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!("[Store] Generated id {} already exists, retrying", id);
                }
                Err(source) => return Err(StoreError::CreateDir { path: dir, source }),
            }
        }
        Err(StoreError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

/// A time-derived identifier. Unique, not unguessable.
fn generate_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    format!("{:x}", nanos)
}

/// Write `contents` to `dir/name` via a temp file and a rename.
async fn write_atomic(dir: &Path, name: &str, contents: &[u8]) -> Result<(), StoreError> {
    let target = dir.join(name);
    let tmp = dir.join(format!(".{}.{}.tmp", name, Uuid::new_v4()));

    if let Err(source) = fs::write(&tmp, contents).await {
        // Best effort: a leftover temp file is harmless but untidy
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Write { path: tmp, source });
    }

    if let Err(source) = fs::rename(&tmp, &target).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Write {
            path: target,
            source,
        });
    }

    Ok(())
}
