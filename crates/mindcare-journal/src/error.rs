use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("mood entry for {date} has no mood selected")]
    MissingMood { date: jiff::civil::Date },
}
