use std::time::Duration;

use rand::Rng;

use mindcare_assessment::{Advance, AssessmentEngine, Question, recommendations};
use mindcare_core::models::{
    AssessmentResult, ChatLogs, ChatMessage, MoodDraft, MoodEntry, Persona, Sender,
};
use mindcare_core::store_keys;
use mindcare_journal::{DayPoint, MoodGuidance, MoodJournal, guidance, samples};
use mindcare_responder::personas;
use mindcare_responder::roster::{self, Therapist};
use mindcare_storage::{Store, store};

use crate::error::SessionError;
use crate::load;

/// The outcome of one chat turn: both messages are already persisted; the
/// caller shows the reply after `typing_delay` (see
/// `mindcare_responder::ReplyScheduler`).
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub category: &'static str,
    pub reply: &'static str,
    pub typing_delay: Duration,
}

/// One user's live session over the persisted collections.
///
/// All collections are loaded whole at init and written through whole on
/// every mutation; the in-memory state is the single source of truth in
/// between.
pub struct Session<S: Store> {
    store: S,
    journal: MoodJournal,
    engine: AssessmentEngine,
    results: Vec<AssessmentResult>,
    chats: ChatLogs,
}

impl<S: Store> Session<S> {
    /// Load the three collections from the store. Corrupt records are
    /// skipped, never fatal.
    pub fn init(store: S) -> Result<Self, SessionError> {
        let journal = match store.load(store_keys::MOOD_ENTRIES)? {
            Some(value) => {
                MoodJournal::from_entries(load::decode_records(store_keys::MOOD_ENTRIES, value))
            }
            None => MoodJournal::new(),
        };
        let results = match store.load(store_keys::ASSESSMENTS)? {
            Some(value) => load::decode_records(store_keys::ASSESSMENTS, value),
            None => Vec::new(),
        };
        let chats = match store.load(store_keys::CHAT_HISTORY)? {
            Some(value) => load::decode_chat_logs(value),
            None => ChatLogs::default(),
        };

        tracing::debug!(
            mood_entries = journal.len(),
            results = results.len(),
            "session initialized"
        );
        Ok(Self {
            store,
            journal,
            engine: AssessmentEngine::new(),
            results,
            chats,
        })
    }

    /// Like [`Session::init`], but seeds the demonstration journal into a
    /// fresh installation with no mood entries.
    pub fn init_with_samples(store: S) -> Result<Self, SessionError> {
        let mut session = Self::init(store)?;
        if session.journal.is_empty() {
            session.journal = MoodJournal::from_entries(samples::sample_entries());
            session.save_moods()?;
        }
        Ok(session)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flush every collection and consume the session.
    pub fn teardown(self) -> Result<(), SessionError> {
        self.save_moods()?;
        self.save_results()?;
        self.save_chats()?;
        Ok(())
    }

    fn save_moods(&self) -> Result<(), SessionError> {
        store::save_typed(&self.store, store_keys::MOOD_ENTRIES, &self.journal.entries())?;
        Ok(())
    }

    fn save_results(&self) -> Result<(), SessionError> {
        store::save_typed(&self.store, store_keys::ASSESSMENTS, &self.results)?;
        Ok(())
    }

    fn save_chats(&self) -> Result<(), SessionError> {
        store::save_typed(&self.store, store_keys::CHAT_HISTORY, &self.chats)?;
        Ok(())
    }

    fn today() -> jiff::civil::Date {
        jiff::Zoned::now().date()
    }

    // ── Mood journal ─────────────────────────────────────────────────────

    /// Save a mood entry (replacing any entry for the same date) and return
    /// it with any follow-up guidance.
    pub fn record_mood(
        &mut self,
        draft: MoodDraft,
    ) -> Result<(MoodEntry, Option<MoodGuidance>), SessionError> {
        let entry = self.journal.upsert(draft)?;
        self.save_moods()?;
        let guidance = guidance::for_mood(entry.mood);
        Ok((entry, guidance))
    }

    /// The entry recorded for the current local calendar date, if any.
    pub fn todays_mood(&self) -> Option<&MoodEntry> {
        self.journal.entry_for(Self::today())
    }

    pub fn recent_moods(&self, n: usize) -> &[MoodEntry] {
        self.journal.recent(n)
    }

    /// Mean mood over the newest 7 entries, one decimal place.
    pub fn rolling_average(&self) -> f64 {
        self.journal.rolling_average(7)
    }

    /// The 7-point trend feed ending today, oldest first.
    pub fn last_seven_days(&self) -> impl Iterator<Item = DayPoint> + '_ {
        self.journal.last_seven_days(Self::today())
    }

    pub fn days_tracked(&self) -> usize {
        self.journal.len()
    }

    // ── Assessment ───────────────────────────────────────────────────────

    pub fn start_assessment(&mut self) {
        self.engine.start();
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        Ok(self.engine.current_question()?)
    }

    pub fn assessment_progress(&self) -> f64 {
        self.engine.progress()
    }

    pub fn answer_for_current(&self) -> Result<Option<usize>, SessionError> {
        Ok(self.engine.answer_for_current()?)
    }

    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        Ok(self.engine.select_answer(option)?)
    }

    pub fn previous_question(&mut self) -> Result<(), SessionError> {
        Ok(self.engine.previous()?)
    }

    /// Advance the run. On completion the result is appended to the
    /// persisted log before this returns.
    pub fn next_question(&mut self) -> Result<Advance, SessionError> {
        let advance = self.engine.next()?;
        if let Advance::Completed(result) = &advance {
            self.results.push(result.clone());
            self.save_results()?;
        }
        Ok(advance)
    }

    pub fn results(&self) -> &[AssessmentResult] {
        &self.results
    }

    pub fn latest_result(&self) -> Option<&AssessmentResult> {
        self.results.last()
    }

    /// Recommendations for the most recent completed assessment.
    pub fn recommendations_for_latest(&self) -> Option<&'static [&'static str]> {
        self.latest_result()
            .map(|r| recommendations::for_risk_level(r.risk_level))
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    /// One chat turn: persist the user message, classify it, pick a canned
    /// reply, persist that too. The reply is returned for delayed display.
    pub fn send_message<R: Rng + ?Sized>(
        &mut self,
        persona: Persona,
        text: &str,
        rng: &mut R,
    ) -> Result<ChatExchange, SessionError> {
        let table = personas::table_for(persona);
        let reply = table.reply_to(text, rng);
        let now = jiff::Timestamp::now();

        let log = self.chats.log_mut(persona);
        log.push(ChatMessage {
            sender: Sender::User,
            message: text.to_string(),
            timestamp: now,
        });
        log.push(ChatMessage {
            sender: Sender::Bot,
            message: reply.message.to_string(),
            timestamp: now,
        });
        self.save_chats()?;

        Ok(ChatExchange {
            category: reply.category,
            reply: reply.message,
            typing_delay: table.typing_delay,
        })
    }

    pub fn history(&self, persona: Persona) -> &[ChatMessage] {
        self.chats.log(persona)
    }

    /// Open a therapist chat with the chosen therapist's greeting.
    pub fn begin_therapist_chat(&mut self, id: &str) -> Result<&'static Therapist, SessionError> {
        let therapist =
            roster::by_id(id).ok_or_else(|| SessionError::UnknownTherapist(id.to_string()))?;
        self.push_therapist_message(therapist.greeting())?;
        Ok(therapist)
    }

    /// Open the emergency flow: the on-call therapist's crisis greeting.
    pub fn begin_crisis_chat(&mut self) -> Result<&'static Therapist, SessionError> {
        let therapist = &roster::ROSTER[0];
        self.push_therapist_message(therapist.greeting())?;
        self.push_therapist_message(roster::CRISIS_GREETING.to_string())?;
        Ok(therapist)
    }

    fn push_therapist_message(&mut self, message: String) -> Result<(), SessionError> {
        self.chats.log_mut(Persona::Therapist).push(ChatMessage {
            sender: Sender::Bot,
            message,
            timestamp: jiff::Timestamp::now(),
        });
        self.save_chats()?;
        Ok(())
    }
}
