//! q3 -- new habit with a duration follow-up.
//!
//! Free text is matched against a fixed keyword table (two languages,
//! case-insensitive substring, first category in table order wins). A
//! supplied habit triggers a second step that collects how long it lasted;
//! the record is only finalized after both steps. Skipping records the
//! `none` sentinel with no duration.

use crate::answers::{HabitAnswer, HabitDuration};
use crate::error::SessionError;

/// Sentinel stored in `selected` when the user kept no new habit.
pub const NONE_SENTINEL: &str = "none";
/// Shown when no keyword category matches.
pub const DEFAULT_EMOJI: &str = "✨";
/// Shown for the skip path.
pub const SKIP_EMOJI: &str = "🤷";

/// One habit category: emoji plus its keyword bag (English and Chinese).
#[derive(Debug, Clone, Copy)]
pub struct HabitCategory {
    pub name: &'static str,
    pub emoji: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered scan table; the first matching category determines the symbol.
pub const HABIT_CATEGORIES: [HabitCategory; 12] = [
    HabitCategory {
        name: "exercise",
        emoji: "🏃‍♂️",
        keywords: &["run", "exercise", "jog", "跑步", "运动", "锻炼"],
    },
    HabitCategory {
        name: "growth",
        emoji: "🌱",
        keywords: &["grow", "plant", "garden", "种植", "成长", "养花"],
    },
    HabitCategory {
        name: "meditation",
        emoji: "🧘‍♀️",
        keywords: &["yoga", "meditat", "calm", "瑜伽", "冥想", "放松"],
    },
    HabitCategory {
        name: "reading",
        emoji: "📖",
        keywords: &["read", "book", "study", "读书", "阅读", "学习"],
    },
    HabitCategory {
        name: "diet",
        emoji: "🥗",
        keywords: &["eat", "healthy", "diet", "food", "饮食", "健康", "吃"],
    },
    HabitCategory {
        name: "strength",
        emoji: "💪",
        keywords: &["gym", "workout", "strength", "健身", "力量", "举重"],
    },
    HabitCategory {
        name: "sleep",
        emoji: "😴",
        keywords: &["sleep", "rest", "early", "睡眠", "早睡", "休息"],
    },
    HabitCategory {
        name: "hydration",
        emoji: "💧",
        keywords: &["water", "drink", "hydrat", "喝水", "补水"],
    },
    HabitCategory {
        name: "writing",
        emoji: "📝",
        keywords: &["write", "journal", "note", "diary", "写作", "日记", "笔记"],
    },
    HabitCategory {
        name: "art",
        emoji: "🎨",
        keywords: &["art", "draw", "paint", "creat", "画画", "艺术", "创作"],
    },
    HabitCategory {
        name: "music",
        emoji: "🎵",
        keywords: &["music", "play", "instrument", "音乐", "乐器", "弹"],
    },
    HabitCategory {
        name: "routine",
        emoji: "☕",
        keywords: &["coffee", "morning", "routine", "咖啡", "早起", "晨间"],
    },
];

/// First category whose keyword bag hits the text, scanning in table order.
pub fn match_habit(text: &str) -> Option<&'static HabitCategory> {
    let lower = text.to_lowercase();
    HABIT_CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|k| lower.contains(k)))
}

/// Symbol for a habit text: matched category's emoji or the default.
pub fn habit_emoji(text: &str) -> &'static str {
    match_habit(text).map(|c| c.emoji).unwrap_or(DEFAULT_EMOJI)
}

/// Two-step flow: habit text first, duration second.
#[derive(Debug, Clone, Default)]
pub struct HabitFlow {
    habit: Option<String>,
}

impl HabitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one. Trims the text; empty input blocks the step. Returns the
    /// preview emoji for the follow-up screen.
    pub fn submit_habit(&mut self, text: &str) -> Result<&'static str, SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyInput { field: "habit" });
        }
        self.habit = Some(trimmed.to_string());
        Ok(habit_emoji(trimmed))
    }

    pub fn habit(&self) -> Option<&str> {
        self.habit.as_deref()
    }

    /// Skip path: no habit, no follow-up.
    pub fn skip(self) -> HabitAnswer {
        HabitAnswer {
            selected: NONE_SENTINEL.to_string(),
            emoji: SKIP_EMOJI.to_string(),
            habit: None,
            duration: None,
        }
    }

    /// Step two; finalizes the record.
    pub fn finish(self, duration: HabitDuration) -> Result<HabitAnswer, SessionError> {
        let habit = self.habit.ok_or(SessionError::StepOutOfOrder {
            step: "duration",
        })?;
        let emoji = habit_emoji(&habit).to_string();
        Ok(HabitAnswer {
            selected: habit.clone(),
            emoji,
            habit: Some(habit),
            duration: Some(duration),
        })
    }
}
