use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A persisted record failed to match its expected shape or enumeration.
    /// Load paths skip the record and keep going; this is never fatal.
    #[error("corrupt {collection} record: {reason}")]
    CorruptData { collection: String, reason: String },
}
