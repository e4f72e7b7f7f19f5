//! Follow-up guidance shown after saving a mood entry.

use mindcare_core::models::Mood;

/// A short message plus concrete suggestions, keyed off how the day went.
#[derive(Debug, Clone, Copy)]
pub struct MoodGuidance {
    pub message: &'static str,
    pub suggestions: &'static [&'static str],
}

const CONCERN: MoodGuidance = MoodGuidance {
    message: "I notice you're going through a difficult time. It's important to take care of yourself.",
    suggestions: &[
        "Consider talking to someone you trust",
        "Try some relaxation techniques like deep breathing",
        "Engage in a small activity you usually enjoy",
        "Make sure you're getting enough sleep and nutrition",
        "Don't hesitate to reach out for professional help if needed",
    ],
};

const POSITIVE: MoodGuidance = MoodGuidance {
    message: "It's wonderful that you're feeling good! Let's maintain this positive momentum.",
    suggestions: &[
        "Take note of what contributed to your good mood",
        "Share your positive energy with others",
        "Continue the activities that make you feel good",
        "Use this time to build resilience for tougher days",
        "Consider how you can support others in your community",
    ],
};

/// Guidance for a just-saved mood. Middling days get none.
pub fn for_mood(mood: Mood) -> Option<MoodGuidance> {
    match mood {
        Mood::Terrible | Mood::Low => Some(CONCERN),
        Mood::Good | Mood::Excellent => Some(POSITIVE),
        Mood::Okay => None,
    }
}
