use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StorageError;
use crate::store::Store;

/// In-memory store for tests and ephemeral sessions. Same whole-collection
/// semantics as [`crate::JsonStore`], nothing touches disk.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a document, e.g. to simulate an existing installation.
    pub fn with_document(self, key: &str, value: serde_json::Value) -> Self {
        self.lock().insert(key.to_string(), value);
        self
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, serde_json::Value>> {
        // A poisoned map is still structurally valid JSON values.
        self.documents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.clone());
        Ok(())
    }
}
