//! q8 -- energy battery allocation.
//!
//! The user taps activities from a fixed catalog; each tap removes the
//! activity from the pool for good and applies its signed delta to a score
//! clamped to [0, 100]. At least three taps are required before the
//! question can complete.

use crate::answers::{ActivityId, EnergyAnswer, EnergyCategory};
use crate::error::SessionError;

/// Starting score before any taps.
pub const BASE_SCORE: i32 = 50;
/// Category boundaries. Score >= 60 charges, <= 40 drains, between is balanced.
pub const CHARGING_MIN: i32 = 60;
pub const DRAINING_MAX: i32 = 40;
/// Minimum taps before completion.
pub const MIN_TAPS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Charge,
    Drain,
}

/// One catalog entry. Immutable; consumed read-only.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub id: ActivityId,
    pub emoji: &'static str,
    pub delta: i32,
    pub kind: ActivityKind,
}

/// Fixed catalog: six charging, six draining.
pub const ACTIVITY_CATALOG: [Activity; 12] = [
    Activity {
        id: ActivityId::Exercise,
        emoji: "🏃",
        delta: 12,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::Hobbies,
        emoji: "🎨",
        delta: 10,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::Learning,
        emoji: "📚",
        delta: 10,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::Travel,
        emoji: "🌍",
        delta: 12,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::Loved,
        emoji: "❤️",
        delta: 15,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::Rest,
        emoji: "😌",
        delta: 10,
        kind: ActivityKind::Charge,
    },
    Activity {
        id: ActivityId::SocialDrain,
        emoji: "🤝",
        delta: -10,
        kind: ActivityKind::Drain,
    },
    Activity {
        id: ActivityId::Work,
        emoji: "💼",
        delta: -12,
        kind: ActivityKind::Drain,
    },
    Activity {
        id: ActivityId::Procrastinate,
        emoji: "🔄",
        delta: -10,
        kind: ActivityKind::Drain,
    },
    Activity {
        id: ActivityId::Overthink,
        emoji: "🤔",
        delta: -12,
        kind: ActivityKind::Drain,
    },
    Activity {
        id: ActivityId::Phone,
        emoji: "📱",
        delta: -10,
        kind: ActivityKind::Drain,
    },
    Activity {
        id: ActivityId::Chores,
        emoji: "📦",
        delta: -8,
        kind: ActivityKind::Drain,
    },
];

pub fn activity(id: ActivityId) -> &'static Activity {
    // The catalog covers every ActivityId variant.
    ACTIVITY_CATALOG
        .iter()
        .find(|a| a.id == id)
        .expect("activity in catalog")
}

/// Battery face for a score.
pub fn battery_face(score: i32) -> &'static str {
    if score >= 80 {
        "😊"
    } else if score >= 50 {
        "🙂"
    } else if score >= 30 {
        "😐"
    } else {
        "😵‍💫"
    }
}

/// Category for a final score. Boundaries are exact: 60 charges, 40 drains.
pub fn category(score: i32) -> EnergyCategory {
    if score >= CHARGING_MIN {
        EnergyCategory::Charging
    } else if score <= DRAINING_MAX {
        EnergyCategory::Draining
    } else {
        EnergyCategory::Balanced
    }
}

/// What a tap did, for host feedback text.
#[derive(Debug, Clone, Copy)]
pub struct TapReceipt {
    pub emoji: &'static str,
    pub delta: i32,
    pub score: i32,
    pub kind: ActivityKind,
}

/// Scratch state for one run of the battery question.
///
/// Owns the remaining pool until [`EnergyBattery::complete`] hands the
/// finished record off.
#[derive(Debug, Clone)]
pub struct EnergyBattery {
    score: i32,
    used: Vec<ActivityId>,
    charging_sources: Vec<ActivityId>,
    draining_sources: Vec<ActivityId>,
}

impl EnergyBattery {
    pub fn new() -> Self {
        Self {
            score: BASE_SCORE,
            used: Vec::new(),
            charging_sources: Vec::new(),
            draining_sources: Vec::new(),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn taps(&self) -> usize {
        self.used.len()
    }

    /// Activities still in the pool, in catalog order.
    pub fn remaining(&self) -> Vec<&'static Activity> {
        ACTIVITY_CATALOG
            .iter()
            .filter(|a| !self.used.contains(&a.id))
            .collect()
    }

    pub fn is_used(&self, id: ActivityId) -> bool {
        self.used.contains(&id)
    }

    pub fn can_complete(&self) -> bool {
        self.used.len() >= MIN_TAPS
    }

    /// Tap an activity: remove it from the pool and apply its delta,
    /// clamped to [0, 100]. Each catalog entry is single-use.
    pub fn tap(&mut self, id: ActivityId) -> Result<TapReceipt, SessionError> {
        if self.is_used(id) {
            return Err(SessionError::ActivityUsed(id.to_string()));
        }
        let activity = activity(id);
        self.used.push(id);
        self.score = (self.score + activity.delta).clamp(0, 100);
        match activity.kind {
            ActivityKind::Charge => self.charging_sources.push(id),
            ActivityKind::Drain => self.draining_sources.push(id),
        }
        Ok(TapReceipt {
            emoji: activity.emoji,
            delta: activity.delta,
            score: self.score,
            kind: activity.kind,
        })
    }

    /// Finalize the record. Requires [`MIN_TAPS`] taps.
    pub fn complete(self) -> Result<EnergyAnswer, SessionError> {
        if !self.can_complete() {
            return Err(SessionError::NotEnoughActivities {
                have: self.used.len(),
                need: MIN_TAPS,
            });
        }
        Ok(EnergyAnswer {
            category: category(self.score),
            emoji: battery_face(self.score).to_string(),
            score: self.score as u8,
            charging_sources: self.charging_sources,
            draining_sources: self.draining_sources,
        })
    }
}

impl Default for EnergyBattery {
    fn default() -> Self {
        Self::new()
    }
}
