//! mindcare-storage
//!
//! Durable key/value persistence for the three MindCare collections.
//! Whole-collection load/save semantics: each key holds one JSON document,
//! an absent key reads as an empty collection.

pub mod error;
pub mod json;
pub mod memory;
pub mod store;

pub use error::StorageError;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use store::Store;
