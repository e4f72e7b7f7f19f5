use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk classification of a completed assessment.
///
/// Serialized capitalized (`"Low"`, `"Moderate"`, `"High"`) to stay
/// compatible with the result log the web frontend already writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// One completed assessment run. Append-only: created once on completion,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub timestamp: jiff::Timestamp,
    /// Normalized percentage score, 0..=100.
    pub score: u8,
    pub risk_level: RiskLevel,
    /// Sparse question index → chosen option index snapshot.
    pub answers: BTreeMap<usize, usize>,
}
