//! Store key conventions.
//!
//! Canonical names of the persisted collections. Each key maps to one
//! whole-collection JSON document in the store; an absent key reads as an
//! empty collection.

/// Mood journal entries, newest date first.
pub const MOOD_ENTRIES: &str = "mood_entries";

/// Completed assessment results, append-only.
pub const ASSESSMENTS: &str = "assessments";

/// Chat history, a map of persona name to message log.
pub const CHAT_HISTORY: &str = "chat_history";
