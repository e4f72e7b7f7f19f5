//! Per-risk recommendation tables.
//!
//! Fixed content keyed by risk level; returned in table order so the UI can
//! render them as-is.

use mindcare_core::models::RiskLevel;

const HIGH: [&str; 5] = [
    "Consider speaking with a mental health professional",
    "Use our crisis support resources if needed",
    "Connect with our therapist chat feature",
    "Practice daily mood tracking",
    "Reach out to trusted friends or family",
];

const MODERATE: [&str; 5] = [
    "Continue using our AI support chatbot",
    "Track your mood daily",
    "Practice stress management techniques",
    "Consider lifestyle changes for better mental health",
    "Connect with our peer support community",
];

const LOW: [&str; 5] = [
    "Keep up the good work!",
    "Continue daily mood tracking",
    "Use our resources for maintaining good mental health",
    "Support others in our community",
    "Practice preventive mental health strategies",
];

/// The ordered recommendation set for a risk level.
pub fn for_risk_level(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => &HIGH,
        RiskLevel::Moderate => &MODERATE,
        RiskLevel::Low => &LOW,
    }
}
