//! mindcare-journal
//!
//! The mood journal: one entry per calendar day, kept in descending-date
//! order, with rolling statistics and the 7-day trend feed the progress
//! chart consumes.

pub mod error;
pub mod guidance;
pub mod journal;
pub mod samples;

pub use error::JournalError;
pub use guidance::MoodGuidance;
pub use journal::{DayPoint, MoodJournal};
