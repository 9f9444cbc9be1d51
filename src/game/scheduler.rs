use std::time::{Duration, Instant};

use log::debug;

pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAiMove {
    pub generation: u64,
    pub due_at: Instant,
}

/// Holds at most one pending computer move. The host polls `take_due` from
/// its event loop; nothing runs on a timer thread.
#[derive(Debug)]
pub struct AiMoveScheduler {
    delay: Duration,
    pending: Option<PendingAiMove>,
}

impl Default for AiMoveScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_AI_DELAY)
    }
}

impl AiMoveScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pending(&self) -> Option<PendingAiMove> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedules a move for `generation`, replacing any pending one.
    pub fn schedule(&mut self, generation: u64, now: Instant) {
        let due_at = now + self.delay;
        debug!("computer move for game {} due in {:?}", generation, self.delay);
        self.pending = Some(PendingAiMove { generation, due_at });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.due_at.saturating_duration_since(now))
    }

    /// Releases the pending move once it is due. A move scheduled for a
    /// generation other than `current_generation` is dropped instead.
    pub fn take_due(&mut self, now: Instant, current_generation: u64) -> Option<PendingAiMove> {
        let pending = self.pending?;

        if pending.generation != current_generation {
            debug!(
                "discarding stale computer move for game {} (current game {})",
                pending.generation, current_generation
            );
            self.pending = None;
            return None;
        }

        if now < pending.due_at {
            return None;
        }

        self.pending = None;
        Some(pending)
    }
}
