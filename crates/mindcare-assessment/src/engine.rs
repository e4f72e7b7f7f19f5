//! The assessment run state machine.
//!
//! A run walks a fixed question list one index at a time. Forward navigation
//! is gated on the current question having a recorded answer; `next()` from
//! the last question completes the run instead of advancing. `Completed` is
//! terminal until `start()` begins a fresh run.

use std::collections::BTreeMap;

use mindcare_core::models::AssessmentResult;

use crate::error::AssessmentError;
use crate::questionnaire::{self, Question};
use crate::scoring;

/// Where a run currently stands.
#[derive(Debug, Clone)]
pub enum RunState {
    NotStarted,
    InProgress { index: usize },
    Completed { result: AssessmentResult },
}

/// What `next()` did.
#[derive(Debug, Clone)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// The run finished; the caller appends this to the persisted result log.
    Completed(AssessmentResult),
}

pub struct AssessmentEngine {
    questions: Vec<Question>,
    answers: BTreeMap<usize, usize>,
    state: RunState,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentEngine {
    /// An engine over the global question catalog.
    pub fn new() -> Self {
        Self::with_questions(questionnaire::catalog().to_vec())
    }

    /// An engine over an arbitrary question list (tests, alternate forms).
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: BTreeMap::new(),
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Begin a fresh run: index 0, no answers. Discards any prior run.
    pub fn start(&mut self) {
        self.answers.clear();
        self.state = RunState::InProgress { index: 0 };
    }

    fn current_index(&self) -> Result<usize, AssessmentError> {
        match self.state {
            RunState::InProgress { index } => Ok(index),
            _ => Err(AssessmentError::NoActiveRun),
        }
    }

    pub fn current_question(&self) -> Result<&Question, AssessmentError> {
        let index = self.current_index()?;
        self.questions
            .get(index)
            .ok_or(AssessmentError::NoActiveRun)
    }

    /// The previously recorded answer for the current question, if any, so
    /// the UI can pre-select it after back navigation.
    pub fn answer_for_current(&self) -> Result<Option<usize>, AssessmentError> {
        let index = self.current_index()?;
        Ok(self.answers.get(&index).copied())
    }

    /// Record an answer for the current question.
    pub fn select_answer(&mut self, option: usize) -> Result<(), AssessmentError> {
        let index = self.current_index()?;
        let available = self
            .questions
            .get(index)
            .ok_or(AssessmentError::NoActiveRun)?
            .options
            .len();
        if option >= available {
            return Err(AssessmentError::InvalidOption {
                index,
                option,
                available,
            });
        }
        self.answers.insert(index, option);
        Ok(())
    }

    /// Advance past an answered question, or complete the run from the last
    /// one. Fails with `AnswerRequired` (and changes nothing) if the current
    /// question has no recorded answer.
    pub fn next(&mut self) -> Result<Advance, AssessmentError> {
        let index = self.current_index()?;
        if !self.answers.contains_key(&index) {
            return Err(AssessmentError::AnswerRequired { index });
        }

        if index + 1 < self.questions.len() {
            self.state = RunState::InProgress { index: index + 1 };
            return Ok(Advance::Moved(index + 1));
        }

        let result = scoring::score_run(&self.questions, &self.answers, jiff::Timestamp::now());
        tracing::info!(
            score = result.score,
            risk_level = ?result.risk_level,
            "assessment completed"
        );
        self.state = RunState::Completed {
            result: result.clone(),
        };
        Ok(Advance::Completed(result))
    }

    /// Step back one question. Silent no-op at index 0.
    pub fn previous(&mut self) -> Result<(), AssessmentError> {
        let index = self.current_index()?;
        if index > 0 {
            self.state = RunState::InProgress { index: index - 1 };
        }
        Ok(())
    }

    /// UI-facing progress fraction: `(index + 1) / total` while in progress,
    /// 0 before a run starts, 1 once completed.
    pub fn progress(&self) -> f64 {
        match self.state {
            RunState::NotStarted => 0.0,
            RunState::InProgress { index } => (index + 1) as f64 / self.questions.len() as f64,
            RunState::Completed { .. } => 1.0,
        }
    }
}
