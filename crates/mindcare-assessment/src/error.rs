use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("no assessment run is in progress")]
    NoActiveRun,

    #[error("option {option} is out of range for question {index} ({available} options)")]
    InvalidOption {
        index: usize,
        option: usize,
        available: usize,
    },

    #[error("question {index} needs an answer before advancing")]
    AnswerRequired { index: usize },
}
