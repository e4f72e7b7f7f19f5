//! The fixed screening questionnaire.
//!
//! Ten questions, defined once at first use. Order is significant: a
//! question's position in the catalog is its identity within a run, and the
//! answers map is keyed by that position.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which symptom cluster a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionCategory {
    Depression,
    Anxiety,
    Stress,
    Social,
    General,
}

/// One question with its ordered option labels. Options are ordered from
/// least to most concerning, so the chosen index doubles as the item score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub category: QuestionCategory,
}

const FREQUENCY: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// The global question list, in administration order.
pub fn catalog() -> &'static [Question] {
    static CATALOG: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        let question = |text: &str, options: &[&str], category| Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            category,
        };

        vec![
            question(
                "How often have you been feeling down, depressed, or hopeless in the past two weeks?",
                &FREQUENCY,
                QuestionCategory::Depression,
            ),
            question(
                "How often have you had little interest or pleasure in doing things?",
                &FREQUENCY,
                QuestionCategory::Depression,
            ),
            question(
                "How often have you been feeling nervous, anxious, or on edge?",
                &FREQUENCY,
                QuestionCategory::Anxiety,
            ),
            question(
                "How often have you been unable to stop or control worrying?",
                &FREQUENCY,
                QuestionCategory::Anxiety,
            ),
            question(
                "How would you rate your sleep quality recently?",
                &["Very good", "Good", "Poor", "Very poor"],
                QuestionCategory::General,
            ),
            question(
                "How often do you feel overwhelmed by daily responsibilities?",
                &["Never", "Sometimes", "Often", "Always"],
                QuestionCategory::Stress,
            ),
            question(
                "How satisfied are you with your social relationships?",
                &[
                    "Very satisfied",
                    "Somewhat satisfied",
                    "Somewhat dissatisfied",
                    "Very dissatisfied",
                ],
                QuestionCategory::Social,
            ),
            question(
                "How often do you engage in activities you enjoy?",
                &["Daily", "Several times a week", "Rarely", "Never"],
                QuestionCategory::General,
            ),
            question(
                "How would you rate your overall energy levels?",
                &["Very high", "High", "Low", "Very low"],
                QuestionCategory::General,
            ),
            question(
                "How confident do you feel about managing stress in your life?",
                &[
                    "Very confident",
                    "Somewhat confident",
                    "Not very confident",
                    "Not at all confident",
                ],
                QuestionCategory::Stress,
            ),
        ]
    });
    &CATALOG
}
