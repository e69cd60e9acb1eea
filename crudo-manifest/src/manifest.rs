//! The durable manifest.
//!
//! `.crudo/manifest.json` maps entity names to the files generated for
//! them. It is pretty-printed with camelCase keys and sorted entity keys so
//! repeated load/save cycles are byte-stable and diffs stay readable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Directory under the project root holding generator state.
pub const MANIFEST_DIR: &str = ".crudo";

/// Manifest file name inside [`MANIFEST_DIR`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// Generation record for one entity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Entity name (PascalCase, as declared in the schema).
    pub entity: String,
    /// Project-relative '/'-joined paths, in generation order.
    pub files: Vec<String>,
    /// Set on the first generation, preserved afterwards.
    pub generated_at: DateTime<Utc>,
    /// Updated on every commit.
    pub last_modified: DateTime<Utc>,
}

/// Entity name → generation record.
pub type Manifest = BTreeMap<String, ManifestEntry>;

/// Absolute path of the manifest file for a project root.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_DIR).join(MANIFEST_FILE)
}

/// Load a manifest, returning an empty mapping when the file is absent.
pub(crate) fn load_from(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Ok(Manifest::new());
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

/// Persist a manifest, creating the state directory as needed.
pub(crate) fn save_to(path: &Path, manifest: &Manifest) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create", parent, e))?;
    }
    let json = serde_json::to_string_pretty(manifest).map_err(|e| Error::json(path, e))?;
    fs::write(path, format!("{json}\n")).map_err(|e| Error::io("write", path, e))
}
