//! Typed per-question answer records and the aggregate answer store.
//!
//! Each question writes its record in one shot; re-submitting replaces the
//! slot wholesale. The wire shapes (field names, choice ids) are camelCase
//! to match the shareable analytics payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of question identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
}

impl QuestionId {
    pub const ALL: [QuestionId; 9] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
        QuestionId::Q7,
        QuestionId::Q8,
        QuestionId::Q9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
            QuestionId::Q4 => "q4",
            QuestionId::Q5 => "q5",
            QuestionId::Q6 => "q6",
            QuestionId::Q7 => "q7",
            QuestionId::Q8 => "q8",
            QuestionId::Q9 => "q9",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Choice ids ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PressureChoice {
    Found,
    NotFound,
    NotMyProblem,
    DontKnow,
}

impl PressureChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            PressureChoice::Found => "found",
            PressureChoice::NotFound => "notFound",
            PressureChoice::NotMyProblem => "notMyProblem",
            PressureChoice::DontKnow => "dontKnow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TravelChoice {
    None,
    Few,
    Some,
    Many,
}

impl TravelChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelChoice::None => "none",
            TravelChoice::Few => "few",
            TravelChoice::Some => "some",
            TravelChoice::Many => "many",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MindsetChoice {
    Optimistic,
    Calm,
    Anxious,
    Confident,
}

impl MindsetChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            MindsetChoice::Optimistic => "optimistic",
            MindsetChoice::Calm => "calm",
            MindsetChoice::Anxious => "anxious",
            MindsetChoice::Confident => "confident",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyChoice {
    Significant,
    Some,
    NoChange,
    Regression,
}

impl BodyChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyChoice::Significant => "significant",
            BodyChoice::Some => "some",
            BodyChoice::NoChange => "noChange",
            BodyChoice::Regression => "regression",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitDuration {
    Short,
    Months,
    HalfYear,
    FullYear,
}

impl HabitDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitDuration::Short => "short",
            HabitDuration::Months => "months",
            HabitDuration::HalfYear => "halfYear",
            HabitDuration::FullYear => "fullYear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyCategory {
    Charging,
    Draining,
    Balanced,
}

/// Activity ids for the energy battery question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityId {
    Exercise,
    Hobbies,
    Learning,
    Travel,
    Loved,
    Rest,
    SocialDrain,
    Work,
    Procrastinate,
    Overthink,
    Phone,
    Chores,
}

impl ActivityId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityId::Exercise => "exercise",
            ActivityId::Hobbies => "hobbies",
            ActivityId::Learning => "learning",
            ActivityId::Travel => "travel",
            ActivityId::Loved => "loved",
            ActivityId::Rest => "rest",
            ActivityId::SocialDrain => "socialDrain",
            ActivityId::Work => "work",
            ActivityId::Procrastinate => "procrastinate",
            ActivityId::Overthink => "overthink",
            ActivityId::Phone => "phone",
            ActivityId::Chores => "chores",
        }
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Per-question records ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureAnswer {
    pub selected: PressureChoice,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelAnswer {
    pub selected: TravelChoice,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitAnswer {
    /// The habit text, or the literal `"none"` sentinel when skipped.
    pub selected: String,
    pub emoji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<HabitDuration>,
}

impl HabitAnswer {
    pub fn is_skipped(&self) -> bool {
        self.habit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeliefAnswer {
    /// `old → new`, assembled by the derivation rule.
    pub change: String,
    pub emoji: String,
    pub old_belief: String,
    pub new_belief: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindsetAnswer {
    pub selected: MindsetChoice,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAnswer {
    pub selected: BodyChoice,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestThingAnswer {
    pub things: String,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyAnswer {
    pub category: EnergyCategory,
    /// Battery face for the final score.
    pub emoji: String,
    pub score: u8,
    pub charging_sources: Vec<ActivityId>,
    pub draining_sources: Vec<ActivityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnswer {
    pub goal: String,
}

/// One recorded answer, tagged by question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "question", rename_all = "lowercase")]
pub enum Answer {
    Q1(PressureAnswer),
    Q2(TravelAnswer),
    Q3(HabitAnswer),
    Q4(BeliefAnswer),
    Q5(MindsetAnswer),
    Q6(BodyAnswer),
    Q7(BestThingAnswer),
    Q8(EnergyAnswer),
    Q9(GoalAnswer),
}

impl Answer {
    pub fn question_id(&self) -> QuestionId {
        match self {
            Answer::Q1(_) => QuestionId::Q1,
            Answer::Q2(_) => QuestionId::Q2,
            Answer::Q3(_) => QuestionId::Q3,
            Answer::Q4(_) => QuestionId::Q4,
            Answer::Q5(_) => QuestionId::Q5,
            Answer::Q6(_) => QuestionId::Q6,
            Answer::Q7(_) => QuestionId::Q7,
            Answer::Q8(_) => QuestionId::Q8,
            Answer::Q9(_) => QuestionId::Q9,
        }
    }
}

/// The aggregate answer record for one session.
///
/// Absence of a slot means "unanswered". Writes replace, never merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<PressureAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q2: Option<TravelAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q3: Option<HabitAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q4: Option<BeliefAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q5: Option<MindsetAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q6: Option<BodyAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q7: Option<BestThingAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q8: Option<EnergyAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q9: Option<GoalAnswer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot for the answer's question.
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Q1(a) => self.q1 = Some(a),
            Answer::Q2(a) => self.q2 = Some(a),
            Answer::Q3(a) => self.q3 = Some(a),
            Answer::Q4(a) => self.q4 = Some(a),
            Answer::Q5(a) => self.q5 = Some(a),
            Answer::Q6(a) => self.q6 = Some(a),
            Answer::Q7(a) => self.q7 = Some(a),
            Answer::Q8(a) => self.q8 = Some(a),
            Answer::Q9(a) => self.q9 = Some(a),
        }
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        match id {
            QuestionId::Q1 => self.q1.is_some(),
            QuestionId::Q2 => self.q2.is_some(),
            QuestionId::Q3 => self.q3.is_some(),
            QuestionId::Q4 => self.q4.is_some(),
            QuestionId::Q5 => self.q5.is_some(),
            QuestionId::Q6 => self.q6.is_some(),
            QuestionId::Q7 => self.q7.is_some(),
            QuestionId::Q8 => self.q8.is_some(),
            QuestionId::Q9 => self.q9.is_some(),
        }
    }

    pub fn answered_count(&self) -> usize {
        QuestionId::ALL
            .iter()
            .filter(|id| self.is_answered(**id))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QuestionId::ALL.len()
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
