//! Demonstration journal content seeded into fresh installations.

use std::collections::BTreeSet;

use jiff::civil::Date;

use mindcare_core::models::{Mood, MoodEntry};

fn noon_utc(date: Date) -> jiff::Timestamp {
    // Civil noon always exists in UTC (no DST gaps).
    date.at(12, 0, 0, 0)
        .in_tz("UTC")
        .map(|z| z.timestamp())
        .unwrap_or(jiff::Timestamp::UNIX_EPOCH)
}

fn entry(date: Date, mood: Mood, emoji: &str, factors: &[&str], notes: &str) -> MoodEntry {
    MoodEntry {
        date,
        mood,
        emoji: emoji.to_string(),
        notes: notes.to_string(),
        factors: factors.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
        timestamp: noon_utc(date),
    }
}

/// A week of example entries, newest first.
pub fn sample_entries() -> Vec<MoodEntry> {
    use jiff::civil::date;
    vec![
        entry(
            date(2024, 1, 15),
            Mood::Good,
            "😊",
            &["sleep", "work"],
            "Had a productive day at work",
        ),
        entry(
            date(2024, 1, 14),
            Mood::Okay,
            "😐",
            &["relationships"],
            "Some stress from family",
        ),
        entry(
            date(2024, 1, 13),
            Mood::Excellent,
            "😄",
            &["sleep", "health"],
            "Great workout and good sleep",
        ),
        entry(
            date(2024, 1, 12),
            Mood::Low,
            "😔",
            &["work", "finances"],
            "Work pressure is getting high",
        ),
        entry(
            date(2024, 1, 11),
            Mood::Good,
            "😊",
            &["relationships", "sleep"],
            "Nice evening with friends",
        ),
        entry(
            date(2024, 1, 10),
            Mood::Okay,
            "😐",
            &["health"],
            "Feeling a bit tired",
        ),
        entry(
            date(2024, 1, 9),
            Mood::Good,
            "😊",
            &["work"],
            "Completed an important project",
        ),
    ]
}
