//! Session controller.
//!
//! One [`Session`] owns the stage sequencer, the answer store, and the
//! pending deferred advance. Hosts hold it explicitly and pass it down;
//! nothing here is a process-wide singleton, so independent sessions can
//! coexist (and be tested) in one process.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::answers::{Answer, AnswerSet};
use crate::defer::{now_ms, PendingAdvance};
use crate::error::SessionError;
use crate::events::{ResponseCue, SessionEvent};
use crate::stage::{Stage, StageSequencer};

/// Default presentation beat between a recorded answer and the next
/// question.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1_800;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: String,
    sequencer: StageSequencer,
    answers: AnswerSet,
    #[serde(default)]
    pending: Option<PendingAdvance>,
    advance_delay_ms: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_ADVANCE_DELAY_MS)
    }

    /// A session with a custom presentation delay. Hosts that have no
    /// animation to wait for pass 0.
    pub fn with_delay(advance_delay_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sequencer: StageSequencer::new(),
            answers: AnswerSet::new(),
            pending: None,
            advance_delay_ms,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage(&self) -> Stage {
        self.sequencer.current()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn progress(&self) -> Option<(u8, u8)> {
        self.sequencer.progress()
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Leave the landing page.
    pub fn start(&mut self) -> SessionEvent {
        if self.stage() == Stage::Landing {
            self.sequencer.advance();
        }
        SessionEvent::StageEntered {
            stage: self.stage(),
            at: Utc::now(),
        }
    }

    /// Store a completed answer for the current question and schedule the
    /// deferred advance. The record hits the store before the delay starts,
    /// so abandoning the pending advance never loses the answer.
    pub fn record_answer(
        &mut self,
        answer: Answer,
        cue: ResponseCue,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.record_answer_at(answer, cue, now_ms())
    }

    /// Same as [`Session::record_answer`] with an explicit clock reading.
    pub fn record_answer_at(
        &mut self,
        answer: Answer,
        cue: ResponseCue,
        clock_ms: u64,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let question = answer.question_id();
        match self.stage().question() {
            Some(current) if current == question => {}
            _ => {
                return Err(SessionError::WrongStage {
                    expected: format!("{:?}", self.stage()).to_lowercase(),
                    got: question.to_string(),
                })
            }
        }

        self.answers.record(answer);
        let from = self.stage();
        self.pending = Some(PendingAdvance::new(clock_ms, self.advance_delay_ms));

        let at = Utc::now();
        Ok(vec![
            SessionEvent::AnswerRecorded { question, cue, at },
            SessionEvent::AdvanceScheduled {
                from,
                delay_ms: self.advance_delay_ms,
                at,
            },
        ])
    }

    /// Call periodically. Fires the pending advance once it is due.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, clock_ms: u64) -> Option<SessionEvent> {
        let pending = self.pending?;
        if !pending.is_due(clock_ms) {
            return None;
        }
        self.pending = None;
        self.sequencer.advance();
        Some(SessionEvent::StageEntered {
            stage: self.stage(),
            at: Utc::now(),
        })
    }

    /// Drop a scheduled advance without touching the stored answer.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Go back one question. Recorded answers stay; only re-submitting
    /// overwrites them. A pending advance is abandoned.
    pub fn retreat(&mut self) -> Option<SessionEvent> {
        if !self.sequencer.can_retreat() {
            return None;
        }
        self.pending = None;
        self.sequencer.retreat();
        Some(SessionEvent::StageEntered {
            stage: self.stage(),
            at: Utc::now(),
        })
    }

    /// Restart: back to landing with an empty answer set.
    pub fn reset(&mut self) -> SessionEvent {
        self.pending = None;
        self.sequencer.reset();
        self.answers.reset();
        SessionEvent::SessionReset { at: Utc::now() }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
