//! Linear stage sequencer.
//!
//! The flow is a fixed ordered list: landing, nine questions, results.
//! Transitions are strictly adjacent; there is no way to skip a question
//! through navigation.

use serde::{Deserialize, Serialize};

use crate::answers::QuestionId;

/// One named step in the session flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Landing,
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Results,
}

impl Stage {
    /// Full flow order, landing first.
    pub const ORDER: [Stage; 11] = [
        Stage::Landing,
        Stage::Q1,
        Stage::Q2,
        Stage::Q3,
        Stage::Q4,
        Stage::Q5,
        Stage::Q6,
        Stage::Q7,
        Stage::Q8,
        Stage::Q9,
        Stage::Results,
    ];

    pub fn index(&self) -> usize {
        Stage::ORDER.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The question shown at this stage, if any.
    pub fn question(&self) -> Option<QuestionId> {
        match self {
            Stage::Q1 => Some(QuestionId::Q1),
            Stage::Q2 => Some(QuestionId::Q2),
            Stage::Q3 => Some(QuestionId::Q3),
            Stage::Q4 => Some(QuestionId::Q4),
            Stage::Q5 => Some(QuestionId::Q5),
            Stage::Q6 => Some(QuestionId::Q6),
            Stage::Q7 => Some(QuestionId::Q7),
            Stage::Q8 => Some(QuestionId::Q8),
            Stage::Q9 => Some(QuestionId::Q9),
            _ => None,
        }
    }

    pub fn is_question(&self) -> bool {
        self.question().is_some()
    }
}

/// Tracks the current stage and enforces adjacent-only transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSequencer {
    current: Stage,
}

impl StageSequencer {
    pub fn new() -> Self {
        Self {
            current: Stage::Landing,
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    /// Move one step forward. No-op at `Results`.
    pub fn advance(&mut self) -> Stage {
        let idx = self.current.index();
        if idx + 1 < Stage::ORDER.len() {
            self.current = Stage::ORDER[idx + 1];
        }
        self.current
    }

    /// Move one step back. Offered only on question stages; `Landing` and
    /// `Results` stay put.
    pub fn retreat(&mut self) -> Stage {
        if self.can_retreat() {
            self.current = Stage::ORDER[self.current.index() - 1];
        }
        self.current
    }

    pub fn can_retreat(&self) -> bool {
        self.current.is_question()
    }

    /// Back to `Landing`.
    pub fn reset(&mut self) {
        self.current = Stage::Landing;
    }

    /// 1-based question number and total, for "current/total" progress text.
    pub fn progress(&self) -> Option<(u8, u8)> {
        self.current
            .question()
            .map(|q| (q as u8 + 1, QuestionId::ALL.len() as u8))
    }
}

impl Default for StageSequencer {
    fn default() -> Self {
        Self::new()
    }
}
