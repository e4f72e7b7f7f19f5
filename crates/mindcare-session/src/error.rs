use thiserror::Error;

use mindcare_assessment::AssessmentError;
use mindcare_journal::JournalError;
use mindcare_storage::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("unknown therapist: {0:?}")]
    UnknownTherapist(String),
}
