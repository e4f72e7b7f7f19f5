//! The therapist roster and its opening messages.

/// A therapist the user can start a chat with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Therapist {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
}

pub static ROSTER: [Therapist; 2] = [
    Therapist {
        id: "dr-smith",
        name: "Dr. Sarah Smith",
        specialty: "Anxiety & Depression",
    },
    Therapist {
        id: "dr-johnson",
        name: "Dr. Michael Johnson",
        specialty: "Trauma & PTSD",
    },
];

pub fn by_id(id: &str) -> Option<&'static Therapist> {
    ROSTER.iter().find(|t| t.id == id)
}

impl Therapist {
    /// The message that opens a chat with this therapist.
    pub fn greeting(&self) -> String {
        format!(
            "Hello! I'm {}, specializing in {}. I'm here to provide professional support and guidance. How are you feeling today?",
            self.name, self.specialty
        )
    }
}

/// Opening message for the emergency flow, delivered by the on-call
/// therapist.
pub const CRISIS_GREETING: &str = "I understand you're going through a crisis right now. I'm here to provide immediate support. Please know that you're not alone and that there are people who care about you. Can you tell me what's happening right now?";
