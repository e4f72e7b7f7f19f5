use std::collections::BTreeSet;

use jiff::civil::date;
use mindcare_core::models::{Mood, MoodDraft};
use mindcare_journal::{JournalError, MoodJournal, guidance, samples};

fn draft(d: jiff::civil::Date, mood: Mood) -> MoodDraft {
    MoodDraft {
        date: d,
        mood: Some(mood),
        emoji: "😊".to_string(),
        notes: String::new(),
        factors: BTreeSet::new(),
    }
}

#[test]
fn upsert_without_mood_fails_and_inserts_nothing() {
    let mut journal = MoodJournal::new();
    let mut no_mood = draft(date(2024, 1, 15), Mood::Good);
    no_mood.mood = None;

    let err = journal.upsert(no_mood).unwrap_err();
    assert!(matches!(err, JournalError::MissingMood { .. }));
    assert!(journal.is_empty());
}

#[test]
fn upsert_is_idempotent_per_date() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 15), Mood::Low)).expect("first");
    journal
        .upsert(draft(date(2024, 1, 15), Mood::Excellent))
        .expect("second");

    assert_eq!(journal.len(), 1);
    let entry = journal.entry_for(date(2024, 1, 15)).expect("present");
    assert_eq!(entry.mood, Mood::Excellent);
}

#[test]
fn entries_stay_sorted_newest_first() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 12), Mood::Okay)).expect("upsert");
    journal.upsert(draft(date(2024, 1, 15), Mood::Good)).expect("upsert");
    journal.upsert(draft(date(2024, 1, 13), Mood::Low)).expect("upsert");

    let dates: Vec<_> = journal.entries().iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 15), date(2024, 1, 13), date(2024, 1, 12)]
    );
}

#[test]
fn recent_caps_at_collection_size() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 15), Mood::Good)).expect("upsert");

    assert_eq!(journal.recent(5).len(), 1);
    assert_eq!(journal.recent(0).len(), 0);
}

#[test]
fn rolling_average_matches_reference_window() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 15), Mood::Good)).expect("upsert");
    journal.upsert(draft(date(2024, 1, 14), Mood::Good)).expect("upsert");
    journal
        .upsert(draft(date(2024, 1, 13), Mood::Excellent))
        .expect("upsert");

    // (4 + 4 + 5) / 3 = 4.333... -> 4.3
    assert_eq!(journal.rolling_average(7), 4.3);
}

#[test]
fn rolling_average_on_empty_journal_is_zero() {
    assert_eq!(MoodJournal::new().rolling_average(7), 0.0);
}

#[test]
fn rolling_average_only_covers_the_count_window() {
    let mut journal = MoodJournal::new();
    journal
        .upsert(draft(date(2024, 1, 15), Mood::Terrible))
        .expect("upsert");
    journal
        .upsert(draft(date(2024, 1, 14), Mood::Excellent))
        .expect("upsert");

    // Window of one: only the newest entry counts.
    assert_eq!(journal.rolling_average(1), 1.0);
}

#[test]
fn seven_day_window_is_always_seven_points() {
    let journal = MoodJournal::new();
    let points: Vec<_> = journal.last_seven_days(date(2024, 1, 15)).collect();

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].date, date(2024, 1, 9));
    assert_eq!(points[6].date, date(2024, 1, 15));
    assert!(points.iter().all(|p| p.mood.is_none()));
}

#[test]
fn seven_day_window_fills_in_recorded_moods_oldest_first() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 15), Mood::Good)).expect("upsert");
    journal.upsert(draft(date(2024, 1, 11), Mood::Low)).expect("upsert");
    // An entry outside the window must not appear.
    journal.upsert(draft(date(2024, 1, 1), Mood::Terrible)).expect("upsert");

    let points: Vec<_> = journal.last_seven_days(date(2024, 1, 15)).collect();
    assert_eq!(points[2].date, date(2024, 1, 11));
    assert_eq!(points[2].mood, Some(Mood::Low));
    assert_eq!(points[6].mood, Some(Mood::Good));
    assert_eq!(points[0].mood, None);
}

#[test]
fn seven_day_window_is_restartable() {
    let mut journal = MoodJournal::new();
    journal.upsert(draft(date(2024, 1, 15), Mood::Good)).expect("upsert");

    let first: Vec<_> = journal.last_seven_days(date(2024, 1, 15)).collect();
    let second: Vec<_> = journal.last_seven_days(date(2024, 1, 15)).collect();
    assert_eq!(first, second);
}

#[test]
fn from_entries_restores_order_and_uniqueness() {
    let mut entries = samples::sample_entries();
    entries.reverse();
    // Duplicate a date to simulate a collection written before the
    // one-per-day rule was enforced.
    entries.push(entries[0].clone());

    let journal = MoodJournal::from_entries(entries);
    assert_eq!(journal.len(), 7);
    let dates: Vec<_> = journal.entries().iter().map(|e| e.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[test]
fn guidance_tracks_mood_valence() {
    assert!(guidance::for_mood(Mood::Terrible).is_some());
    assert!(guidance::for_mood(Mood::Low).is_some());
    assert!(guidance::for_mood(Mood::Okay).is_none());

    let positive = guidance::for_mood(Mood::Excellent).expect("guidance");
    assert_eq!(positive.suggestions.len(), 5);
}
