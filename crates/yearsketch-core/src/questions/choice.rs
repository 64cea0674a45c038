//! Single-select questions (q1, q2, q5, q6).
//!
//! Fixed four-option tables; the derivation rule is the identity mapping
//! from the chosen option to its emoji plus a response cue for the host.

use crate::answers::{
    BodyAnswer, BodyChoice, MindsetAnswer, MindsetChoice, PressureAnswer, PressureChoice,
    TravelAnswer, TravelChoice,
};
use crate::events::ResponseCue;

/// One selectable option: id, display emoji, accent color, response cue.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption<C> {
    pub id: C,
    pub emoji: &'static str,
    pub accent: &'static str,
    pub cue: ResponseCue,
}

pub const PRESSURE_OPTIONS: [ChoiceOption<PressureChoice>; 4] = [
    ChoiceOption {
        id: PressureChoice::Found,
        emoji: "🎯",
        accent: "#22c55e",
        cue: ResponseCue::Celebrate,
    },
    ChoiceOption {
        id: PressureChoice::NotFound,
        emoji: "😕",
        accent: "#fbbf24",
        cue: ResponseCue::Wander,
    },
    ChoiceOption {
        id: PressureChoice::NotMyProblem,
        emoji: "❌",
        accent: "#ef4444",
        cue: ResponseCue::FadeOut,
    },
    ChoiceOption {
        id: PressureChoice::DontKnow,
        emoji: "🤷",
        accent: "#3b82f6",
        cue: ResponseCue::Thinking,
    },
];

pub const TRAVEL_OPTIONS: [ChoiceOption<TravelChoice>; 4] = [
    ChoiceOption {
        id: TravelChoice::None,
        emoji: "✈️",
        accent: "#94a3b8",
        cue: ResponseCue::Journey,
    },
    ChoiceOption {
        id: TravelChoice::Few,
        emoji: "🗺️",
        accent: "#22c55e",
        cue: ResponseCue::Journey,
    },
    ChoiceOption {
        id: TravelChoice::Some,
        emoji: "🌍",
        accent: "#3b82f6",
        cue: ResponseCue::Journey,
    },
    ChoiceOption {
        id: TravelChoice::Many,
        emoji: "🌏",
        accent: "#a855f7",
        cue: ResponseCue::Journey,
    },
];

pub const MINDSET_OPTIONS: [ChoiceOption<MindsetChoice>; 4] = [
    ChoiceOption {
        id: MindsetChoice::Optimistic,
        emoji: "✨",
        accent: "#fbbf24",
        cue: ResponseCue::Stars,
    },
    ChoiceOption {
        id: MindsetChoice::Calm,
        emoji: "😌",
        accent: "#60a5fa",
        cue: ResponseCue::Clouds,
    },
    ChoiceOption {
        id: MindsetChoice::Anxious,
        emoji: "⚡",
        accent: "#f97316",
        cue: ResponseCue::Lightning,
    },
    ChoiceOption {
        id: MindsetChoice::Confident,
        emoji: "💡",
        accent: "#22c55e",
        cue: ResponseCue::Lightbulbs,
    },
];

pub const BODY_OPTIONS: [ChoiceOption<BodyChoice>; 4] = [
    ChoiceOption {
        id: BodyChoice::Significant,
        emoji: "💪",
        accent: "#22c55e",
        cue: ResponseCue::Fitness,
    },
    ChoiceOption {
        id: BodyChoice::Some,
        emoji: "🌱",
        accent: "#84cc16",
        cue: ResponseCue::Growth,
    },
    ChoiceOption {
        id: BodyChoice::NoChange,
        emoji: "⚖️",
        accent: "#64748b",
        cue: ResponseCue::Balance,
    },
    ChoiceOption {
        id: BodyChoice::Regression,
        emoji: "⏳",
        accent: "#f97316",
        cue: ResponseCue::Hourglass,
    },
];

fn option_for<C: PartialEq + Copy>(
    table: &'static [ChoiceOption<C>],
    id: C,
) -> &'static ChoiceOption<C> {
    // Tables are exhaustive over their choice enums.
    table.iter().find(|o| o.id == id).expect("choice in table")
}

pub fn pressure_answer(choice: PressureChoice) -> (PressureAnswer, ResponseCue) {
    let option = option_for(&PRESSURE_OPTIONS, choice);
    (
        PressureAnswer {
            selected: choice,
            emoji: option.emoji.to_string(),
        },
        option.cue,
    )
}

pub fn travel_answer(choice: TravelChoice) -> (TravelAnswer, ResponseCue) {
    let option = option_for(&TRAVEL_OPTIONS, choice);
    (
        TravelAnswer {
            selected: choice,
            emoji: option.emoji.to_string(),
        },
        option.cue,
    )
}

pub fn mindset_answer(choice: MindsetChoice) -> (MindsetAnswer, ResponseCue) {
    let option = option_for(&MINDSET_OPTIONS, choice);
    (
        MindsetAnswer {
            selected: choice,
            emoji: option.emoji.to_string(),
        },
        option.cue,
    )
}

pub fn body_answer(choice: BodyChoice) -> (BodyAnswer, ResponseCue) {
    let option = option_for(&BODY_OPTIONS, choice);
    (
        BodyAnswer {
            selected: choice,
            emoji: option.emoji.to_string(),
        },
        option.cue,
    )
}
