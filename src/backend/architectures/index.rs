/**
 * Architecture Index
 *
 * In-memory map from architecture ID to its save metadata. It is rebuilt
 * from the save root once at startup and then updated after every successful
 * save, so listing architectures never touches the filesystem.
 *
 * # Consistency
 *
 * Entries are only added after the store has written both files, so every
 * entry has a backing directory. Changes made to the save root by other
 * processes after startup are not picked up.
 *
 * # Thread Safety
 *
 * The index itself is a plain struct. `AppState` shares it as
 * `Arc<RwLock<ArchitectureIndex>>`: list and get take the read lock and run
 * concurrently, upserts take the write lock.
 */

use std::collections::HashMap;

use crate::backend::architectures::store::ArchitectureStore;
use crate::backend::error::StoreError;
use crate::shared::save::SaveInfo;

#[derive(Debug, Clone, Default)]
pub struct ArchitectureIndex {
    saves: HashMap<String, SaveInfo>,
}

impl ArchitectureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from everything saved under the store's root.
    pub async fn rebuild(store: &ArchitectureStore) -> Result<Self, StoreError> {
        let index: Self = store.scan().await?.into_iter().collect();
        tracing::info!(
            "[Index] Loaded {} saved architectures from {}",
            index.len(),
            store.root().display()
        );
        Ok(index)
    }

    /// Insert or replace the entry for `info.id`, returning the old entry.
    pub fn upsert(&mut self, info: SaveInfo) -> Option<SaveInfo> {
        self.saves.insert(info.id.clone(), info)
    }

    /// All entries, in no particular order
    pub fn list(&self) -> Vec<SaveInfo> {
        self.saves.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&SaveInfo> {
        self.saves.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.saves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }
}

impl FromIterator<SaveInfo> for ArchitectureIndex {
    fn from_iter<I: IntoIterator<Item = SaveInfo>>(iter: I) -> Self {
        let mut index = Self::new();
        for info in iter {
            index.upsert(info);
        }
        index
    }
}
