use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

/// A single persisted chat message. Insertion order is conversation order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
    pub timestamp: jiff::Timestamp,
}

/// The two chat personas. Serialized names match the persisted sub-log
/// keys (`"ai"` for the peer responder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Persona {
    #[serde(rename = "ai")]
    Peer,
    #[serde(rename = "therapist")]
    Therapist,
}

/// The persisted chat collection: one append-only log per persona.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatLogs {
    #[serde(rename = "ai", default)]
    pub peer: Vec<ChatMessage>,
    #[serde(default)]
    pub therapist: Vec<ChatMessage>,
}

impl ChatLogs {
    pub fn log(&self, persona: Persona) -> &[ChatMessage] {
        match persona {
            Persona::Peer => &self.peer,
            Persona::Therapist => &self.therapist,
        }
    }

    pub fn log_mut(&mut self, persona: Persona) -> &mut Vec<ChatMessage> {
        match persona {
            Persona::Peer => &mut self.peer,
            Persona::Therapist => &mut self.therapist,
        }
    }
}
