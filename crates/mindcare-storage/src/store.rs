use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Whole-collection key/value storage.
///
/// Every mutation in the session layer writes through the store
/// synchronously; there is one logical writer at a time, so no locking.
pub trait Store {
    /// Load the raw JSON document for a key. `None` means the key has never
    /// been saved — callers treat that as an empty collection.
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Replace the document for a key.
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError>;
}

/// Load and deserialize a typed document.
pub fn load_typed<S: Store + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.load(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and save a typed document.
pub fn save_typed<S: Store + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    store.save(key, &serde_json::to_value(value)?)
}
