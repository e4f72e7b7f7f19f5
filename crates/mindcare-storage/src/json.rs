use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::Store;

/// File-backed store: one `<key>.json` document per key under a root
/// directory. Writes are atomic (tmp + rename) so a crash mid-save never
/// leaves a half-written collection behind.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StorageError::Write {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Open the per-user default store (`<data dir>/mindcare`).
    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::open(base.join("mindcare"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are fixed collection names; anything path-like is a bug.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl Store for JsonStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let path = self.path_for(key)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key, "no document on disk, empty collection");
                return Ok(None);
            }
            Err(source) => return Err(StorageError::Read { path, source }),
        };
        let value = serde_json::from_slice(&bytes)?;
        tracing::debug!(key, path = %path.display(), "collection loaded");
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let json = serde_json::to_vec_pretty(value)?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(key, path = %path.display(), "collection saved");
        Ok(())
    }
}
