//! Score normalization and risk classification.

use std::collections::BTreeMap;

use mindcare_core::models::{AssessmentResult, RiskLevel};

use crate::questionnaire::Question;

/// Normalize a (possibly sparse) answer map to a 0..=100 percentage.
///
/// A missing answer contributes 0 to the total while the question's full
/// option range still widens the maximum, so incomplete runs score lower.
/// That matches the shipped behavior and is kept deliberately.
pub fn percentage_score(questions: &[Question], answers: &BTreeMap<usize, usize>) -> u8 {
    let mut total: usize = 0;
    let mut max: usize = 0;

    for (index, question) in questions.iter().enumerate() {
        if let Some(option) = answers.get(&index) {
            total += option;
        }
        max += question.options.len().saturating_sub(1);
    }

    if max == 0 {
        return 0;
    }
    ((total as f64 / max as f64) * 100.0).round() as u8
}

/// Threshold classification, first match wins.
pub fn classify(score: u8) -> RiskLevel {
    if score > 70 {
        RiskLevel::High
    } else if score > 40 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Build the append-only result record for a finished run.
pub fn score_run(
    questions: &[Question],
    answers: &BTreeMap<usize, usize>,
    timestamp: jiff::Timestamp,
) -> AssessmentResult {
    let score = percentage_score(questions, answers);
    AssessmentResult {
        timestamp,
        score,
        risk_level: classify(score),
        answers: answers.clone(),
    }
}
