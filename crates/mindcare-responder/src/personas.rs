//! The two persona response tables.
//!
//! Category order matters: classification returns the first match, so e.g.
//! "I'm sad and stressed" lands in `sad` for the peer bot.

use std::time::Duration;

use mindcare_core::models::Persona;

use crate::table::{PersonaTable, ResponseCategory};

/// Table for the given persona.
pub fn table_for(persona: Persona) -> &'static PersonaTable {
    match persona {
        Persona::Peer => &PEER,
        Persona::Therapist => &THERAPIST,
    }
}

pub static PEER: PersonaTable = PersonaTable {
    persona: Persona::Peer,
    typing_delay: Duration::from_secs(1),
    categories: &[
        ResponseCategory {
            name: "greeting",
            keywords: &["hello", "hi", "hey"],
            replies: &[
                "Hello! I'm here to support you. How are you feeling today?",
                "Hi there! It's good to connect with you. What's on your mind?",
                "Welcome! I'm glad you reached out. How can I help you today?",
            ],
        },
        ResponseCategory {
            name: "sad",
            keywords: &["sad", "depressed", "down"],
            replies: &[
                "I hear that you're feeling sad. That's completely valid - sadness is a natural human emotion. Would you like to talk about what's contributing to these feelings?",
                "Thank you for sharing that you're feeling sad. It takes courage to acknowledge difficult emotions. What do you think might help you feel a bit better right now?",
                "I'm sorry you're going through a difficult time. Sadness can feel overwhelming, but you're not alone. What's been the hardest part of your day?",
            ],
        },
        ResponseCategory {
            name: "anxious",
            keywords: &["anxious", "anxiety", "worried", "nervous"],
            replies: &[
                "Anxiety can be really challenging to deal with. You're brave for reaching out. Have you tried any breathing exercises or grounding techniques that help you feel more centered?",
                "I understand that anxiety can feel overwhelming. Let's try a quick grounding exercise: Can you name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste?",
                "Anxiety is your mind's way of trying to protect you, but sometimes it can be too much. What situations or thoughts tend to trigger your anxiety the most?",
            ],
        },
        ResponseCategory {
            name: "stressed",
            keywords: &["stress", "overwhelmed", "pressure"],
            replies: &[
                "Stress is something many people experience, especially in today's world. What are the main sources of stress in your life right now?",
                "It sounds like you're dealing with a lot of pressure. Sometimes breaking things down into smaller, manageable steps can help. What's one small thing you could do today to reduce your stress?",
                "Chronic stress can really impact both your mental and physical health. Have you been able to take any breaks or do activities you enjoy recently?",
            ],
        },
        ResponseCategory {
            name: "sleep",
            keywords: &["sleep", "tired", "insomnia"],
            replies: &[
                "Sleep issues are very common and can significantly impact mental health. How many hours of sleep are you typically getting, and what's your bedtime routine like?",
                "Good sleep is crucial for mental wellness. Have you noticed any patterns in what helps you sleep better or what keeps you awake?",
                "Sleep and mental health are closely connected. Creating a consistent bedtime routine and limiting screen time before bed can really help. What's your biggest sleep challenge?",
            ],
        },
        ResponseCategory {
            name: "help",
            keywords: &["help", "support"],
            replies: &[
                "I'm here to provide support and listen to whatever you're going through. You can talk to me about your feelings, ask for coping strategies, or just share what's on your mind.",
                "There are many ways I can help: we can discuss coping strategies, work through difficult emotions, practice mindfulness exercises, or I can simply listen. What feels most helpful to you right now?",
                "Remember that seeking help is a sign of strength, not weakness. I'm here to support you, and if you need additional resources, I can help connect you with professional services.",
            ],
        },
    ],
    fallback: ResponseCategory {
        name: "default",
        keywords: &[],
        replies: &[
            "Thank you for sharing that with me. Can you tell me more about how you're feeling?",
            "I appreciate you opening up. What emotions are you experiencing right now?",
            "It's important that you're taking time to focus on your mental health. What would be most helpful for you to talk about?",
            "I'm here to listen and support you. How has your day been affecting your mood?",
            "Everyone's mental health journey is unique. What strategies have helped you cope with difficult times in the past?",
        ],
    },
};

pub static THERAPIST: PersonaTable = PersonaTable {
    persona: Persona::Therapist,
    typing_delay: Duration::from_secs(2),
    categories: &[
        ResponseCategory {
            name: "greeting",
            keywords: &["hello", "hi", "good", "fine"],
            replies: &[
                "Thank you for sharing that with me. In therapy, we create a safe space to explore your thoughts and feelings. What brought you here today?",
                "I appreciate you taking this step to seek support. Let's start by understanding what you're experiencing. Can you tell me about your current situation?",
                "It's courageous of you to reach out. I'm here to listen without judgment and help you work through whatever you're facing. What's been on your mind lately?",
            ],
        },
        ResponseCategory {
            name: "emotions",
            keywords: &["feel", "emotion", "sad", "angry", "scared"],
            replies: &[
                "Those are significant feelings you're describing. It's important to acknowledge and validate these emotions rather than dismiss them. Have you been experiencing these feelings for a while?",
                "I hear you expressing some complex emotions. In therapy, we often explore not just what we're feeling, but what might be underneath those feelings. What do you think might be contributing to this?",
                "Thank you for being so open about your emotional experience. These feelings are telling us something important. How are these emotions impacting your daily life?",
            ],
        },
        ResponseCategory {
            name: "coping",
            keywords: &["cope", "help", "manage", "deal"],
            replies: &[
                "It sounds like you're looking for some healthy coping strategies. Let's explore what's worked for you in the past and identify some new tools you might find helpful. What have you tried before?",
                "Developing effective coping mechanisms is a key part of mental wellness. I'd like to help you build a toolkit of strategies that work specifically for you. What situations feel most challenging to handle?",
                "Coping skills are very personal - what works for one person may not work for another. Let's identify your strengths and build from there. How do you typically handle stress?",
            ],
        },
    ],
    fallback: ResponseCategory {
        name: "default",
        keywords: &[],
        replies: &[
            "I want to make sure I understand your perspective fully. Can you help me understand more about what this experience has been like for you?",
            "What you're describing sounds challenging. I'm wondering how this has been affecting different areas of your life - your relationships, work, sleep, or daily activities?",
            "I hear you, and I want you to know that what you're experiencing is valid. Many people face similar challenges. What feels most important for us to focus on today?",
            "That takes strength to share. In our work together, we'll go at your pace and focus on what feels most helpful to you. What would you like to explore further?",
        ],
    },
};
