//! mindcare-assessment
//!
//! The self-assessment questionnaire: the fixed question catalog, the linear
//! run state machine, score normalization, risk classification, and the
//! per-risk recommendation tables.

pub mod engine;
pub mod error;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;

pub use engine::{Advance, AssessmentEngine, RunState};
pub use error::AssessmentError;
pub use questionnaire::{Question, QuestionCategory, catalog};
