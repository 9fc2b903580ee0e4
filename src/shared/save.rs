/**
 * Save Metadata
 *
 * `SaveInfo` is the lightweight projection of a saved architecture: enough to
 * list saves in the viewer without reading the documents themselves. It is
 * both the body of `saveInfo.json` on disk and an element of the list
 * returned by `GET /architectures/`.
 *
 * ```json
 * { "id": "18c3a9f2e1d04b7a", "name": "shop", "lastSaved": "2026-10-18T10:10:10.123456789Z" }
 * ```
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::architecture::Architecture;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveInfo {
    /// Architecture ID, also the name of its save directory
    pub id: String,

    /// Architecture name at the time of the last save
    pub name: String,

    /// When the architecture was last written to disk (RFC 3339)
    pub last_saved: DateTime<Utc>,
}

impl SaveInfo {
    /// Metadata for a save of `arch` happening now
    pub fn now(arch: &Architecture) -> Self {
        Self::at(arch, Utc::now())
    }

    pub fn at(arch: &Architecture, last_saved: DateTime<Utc>) -> Self {
        Self {
            id: arch.info.id.clone(),
            name: arch.info.name.clone(),
            last_saved,
        }
    }
}
