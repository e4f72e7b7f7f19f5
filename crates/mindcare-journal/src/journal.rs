use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcare_core::models::{Mood, MoodDraft, MoodEntry};

use crate::error::JournalError;

/// One point of the 7-day trend feed: a calendar date and the mood recorded
/// for it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayPoint {
    pub date: Date,
    pub mood: Option<Mood>,
}

/// The ordered mood collection.
///
/// Invariants, restored after every mutation: at most one entry per calendar
/// date, entries sorted by descending date. Readers never re-sort.
#[derive(Debug, Default)]
pub struct MoodJournal {
    entries: Vec<MoodEntry>,
}

impl MoodJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt entries loaded from the store. Sorts descending and drops any
    /// duplicate dates, keeping the first seen for each.
    pub fn from_entries(mut entries: Vec<MoodEntry>) -> Self {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.dedup_by(|a, b| a.date == b.date);
        Self { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate a draft and insert it, replacing any existing entry for the
    /// same date. Returns the stored entry.
    pub fn upsert(&mut self, draft: MoodDraft) -> Result<MoodEntry, JournalError> {
        let mood = draft.mood.ok_or(JournalError::MissingMood { date: draft.date })?;
        let entry = MoodEntry {
            date: draft.date,
            mood,
            emoji: draft.emoji,
            notes: draft.notes,
            factors: draft.factors,
            timestamp: jiff::Timestamp::now(),
        };

        self.entries.retain(|e| e.date != entry.date);
        self.entries.push(entry.clone());
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(date = %entry.date, mood = ?entry.mood, "mood entry upserted");
        Ok(entry)
    }

    /// The entry for a specific calendar date.
    pub fn entry_for(&self, date: Date) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// The first `n` entries in canonical (newest-first) order. Short
    /// journals return everything.
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Mean mood ordinal over the newest `window` entries (a count window,
    /// not a calendar window), rounded to one decimal. `0.0` when the window
    /// is empty.
    pub fn rolling_average(&self, window: usize) -> f64 {
        let window = self.recent(window);
        if window.is_empty() {
            return 0.0;
        }
        let sum: u32 = window.iter().map(|e| u32::from(e.mood.ordinal())).sum();
        let mean = f64::from(sum) / window.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Exactly 7 day points for the calendar week ending `today`, oldest
    /// first. Dates with no entry yield `mood: None`. Each call returns a
    /// fresh iterator.
    pub fn last_seven_days(&self, today: Date) -> impl Iterator<Item = DayPoint> + '_ {
        let start = today.saturating_sub(jiff::Span::new().days(6));
        (0i64..7).map(move |offset| {
            let date = start.saturating_add(jiff::Span::new().days(offset));
            DayPoint {
                date,
                mood: self.entry_for(date).map(|e| e.mood),
            }
        })
    }
}
