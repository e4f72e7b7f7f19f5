pub mod assessment;
pub mod chat;
pub mod mood;

pub use assessment::{AssessmentResult, RiskLevel};
pub use chat::{ChatLogs, ChatMessage, Persona, Sender};
pub use mood::{Mood, MoodDraft, MoodEntry};
