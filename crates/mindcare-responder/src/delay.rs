//! Delayed reply delivery ("typing" simulation).
//!
//! The reply text is computed before the delay starts, so the wait carries
//! no ordering hazard. Cancellation is supported at the scheduler level even
//! though current callers never cancel a pending reply.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use mindcare_core::models::Persona;

use crate::personas;

/// Schedules an already-computed reply after a fixed typing delay.
#[derive(Debug, Clone, Copy)]
pub struct ReplyScheduler {
    delay: Duration,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Scheduler with the persona's configured typing delay.
    pub fn for_persona(persona: Persona) -> Self {
        Self::new(personas::table_for(persona).typing_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolve with the reply once the delay elapses, or `None` if the token
    /// is cancelled first.
    pub async fn deliver(&self, reply: String, cancel: CancellationToken) -> Option<String> {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("pending reply cancelled before delivery");
                None
            }
            _ = tokio::time::sleep(self.delay) => Some(reply),
        }
    }
}
