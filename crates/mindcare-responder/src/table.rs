use std::time::Duration;

use rand::Rng;

use mindcare_core::models::Persona;

/// One response category: a name, the keywords that trigger it, and the
/// canned replies to choose from.
#[derive(Debug, Clone, Copy)]
pub struct ResponseCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub replies: &'static [&'static str],
}

/// A persona's complete response table. Categories are tested in declared
/// order; the fallback answers anything no category matched.
#[derive(Debug, Clone, Copy)]
pub struct PersonaTable {
    pub persona: Persona,
    pub categories: &'static [ResponseCategory],
    pub fallback: ResponseCategory,
    /// Artificial "typing" delay before the reply is shown.
    pub typing_delay: Duration,
}

impl PersonaTable {
    /// Classify free text: lowercase it, return the first category with a
    /// keyword appearing as a substring, or the fallback.
    pub fn classify(&self, text: &str) -> &ResponseCategory {
        let text = text.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.keywords.iter().any(|k| text.contains(k)))
            .unwrap_or(&self.fallback)
    }

    /// Pick a reply uniformly at random from a category. Pure given the
    /// injected random source.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        category: &ResponseCategory,
        rng: &mut R,
    ) -> &'static str {
        category.replies[rng.gen_range(0..category.replies.len())]
    }

    /// Classify and answer in one step.
    pub fn reply_to<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Reply {
        let category = self.classify(text);
        Reply {
            category: category.name,
            message: self.respond(category, rng),
        }
    }
}

/// The chosen reply and the category it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub category: &'static str,
    pub message: &'static str,
}
