use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::QuestionId;
use crate::stage::Stage;

/// Every externally observable state change in a session produces an Event.
/// Hosts render them; nothing in the core depends on anyone listening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    SessionStarted {
        session_id: String,
        at: DateTime<Utc>,
    },
    StageEntered {
        stage: Stage,
        at: DateTime<Utc>,
    },
    /// An answer was written to the store. The record is complete at this
    /// point; the stage advance may still be pending.
    AnswerRecorded {
        question: QuestionId,
        cue: ResponseCue,
        at: DateTime<Utc>,
    },
    /// A deferred stage advance was scheduled (presentation plays out first).
    AdvanceScheduled {
        from: Stage,
        delay_ms: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
}

/// Which presentation response a host should play for a recorded answer.
///
/// Purely advisory; never stored in an answer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseCue {
    /// q1 found
    Celebrate,
    /// q1 notFound
    Wander,
    /// q1 notMyProblem
    FadeOut,
    /// q1 dontKnow
    Thinking,
    /// q2 (all choices share the travel montage)
    Journey,
    /// q3 habit recorded
    Sprout,
    /// q4 belief rewritten
    Butterfly,
    /// q5 optimistic
    Stars,
    /// q5 calm
    Clouds,
    /// q5 anxious
    Lightning,
    /// q5 confident
    Lightbulbs,
    /// q6 significant
    Fitness,
    /// q6 some
    Growth,
    /// q6 noChange
    Balance,
    /// q6 regression
    Hourglass,
    /// q7 best thing
    Triumph,
    /// q8 battery completed
    Spark,
    /// q9 goal launched
    Liftoff,
}
