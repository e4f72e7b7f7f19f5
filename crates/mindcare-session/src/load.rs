//! Load-time decoding with per-record corruption skipping.
//!
//! A record that fails to match its expected shape (unrecognized mood,
//! malformed date, wrong field type) is dropped with a warning; one bad
//! record never prevents the rest of the collection from loading.

use serde::de::DeserializeOwned;

use mindcare_core::error::CoreError;
use mindcare_core::models::{ChatLogs, ChatMessage};

/// Decode a JSON array element-by-element, skipping corrupt records.
pub(crate) fn decode_records<T: DeserializeOwned>(
    collection: &str,
    value: serde_json::Value,
) -> Vec<T> {
    let records = match value {
        serde_json::Value::Array(records) => records,
        other => {
            let err = CoreError::CorruptData {
                collection: collection.to_string(),
                reason: format!("expected an array, got {other}"),
            };
            tracing::warn!(%err, "dropping entire collection");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(value) => Some(value),
            Err(e) => {
                let err = CoreError::CorruptData {
                    collection: collection.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(%err, "skipping corrupt record");
                None
            }
        })
        .collect()
}

/// Decode the chat collection: a map of persona name to message array, each
/// sub-log decoded record-by-record.
pub(crate) fn decode_chat_logs(value: serde_json::Value) -> ChatLogs {
    let serde_json::Value::Object(mut map) = value else {
        let err = CoreError::CorruptData {
            collection: "chat_history".to_string(),
            reason: "expected an object of persona logs".to_string(),
        };
        tracing::warn!(%err, "dropping entire collection");
        return ChatLogs::default();
    };

    let mut sub_log = |name: &str| -> Vec<ChatMessage> {
        map.remove(name)
            .map(|log| decode_records(&format!("chat_history.{name}"), log))
            .unwrap_or_default()
    };

    ChatLogs {
        peer: sub_log("ai"),
        therapist: sub_log("therapist"),
    }
}
