use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How the user rated their day. Closed set — anything else read back from
/// the store is corrupt data and gets skipped at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Mood {
    Terrible,
    Low,
    Okay,
    Good,
    Excellent,
}

impl Mood {
    /// Ordinal used by the rolling-average and trend computations.
    pub fn ordinal(self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::Low => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Excellent => 5,
        }
    }
}

/// One journal entry. At most one exists per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub date: jiff::civil::Date,
    pub mood: Mood,
    pub emoji: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub factors: BTreeSet<String>,
    /// Capture instant, distinct from the calendar date the entry is for.
    pub timestamp: jiff::Timestamp,
}

/// What the mood form hands us before validation. `mood` is optional here
/// so "save with nothing selected" is a checked error, not a silent default.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodDraft {
    pub date: jiff::civil::Date,
    pub mood: Option<Mood>,
    pub emoji: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub factors: BTreeSet<String>,
}
