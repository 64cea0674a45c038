//! Free-text questions: q7 (best thing of the year) and q9 (next year's goal).
//!
//! q7 picks one representative symbol from an ordered table of keyword
//! groups; ties go to table position, never to match count. q9 stores the
//! trimmed text as-is.

use crate::answers::{BestThingAnswer, GoalAnswer};
use crate::error::SessionError;

pub const DEFAULT_ACHIEVEMENT_EMOJI: &str = "🏆";

#[derive(Debug, Clone, Copy)]
pub struct AchievementGroup {
    pub emoji: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered scan table; first group with a hit wins.
pub const ACHIEVEMENT_GROUPS: [AchievementGroup; 13] = [
    AchievementGroup {
        emoji: "✈️",
        keywords: &["旅行", "travel", "旅游", "trip", "出国"],
    },
    AchievementGroup {
        emoji: "🏖️",
        keywords: &["度假", "vacation", "海滩", "beach"],
    },
    AchievementGroup {
        emoji: "💼",
        keywords: &["工作", "work", "项目", "project", "晋升", "promotion"],
    },
    AchievementGroup {
        emoji: "📚",
        keywords: &["读书", "read", "学习", "learn", "书"],
    },
    AchievementGroup {
        emoji: "🏃",
        keywords: &["跑步", "run", "运动", "exercise", "健身", "fitness"],
    },
    AchievementGroup {
        emoji: "🎓",
        keywords: &["毕业", "graduate", "学位", "degree"],
    },
    AchievementGroup {
        emoji: "💰",
        keywords: &["存钱", "save", "理财", "invest", "赚"],
    },
    AchievementGroup {
        emoji: "❤️",
        keywords: &["结婚", "marry", "恋爱", "love", "告白"],
    },
    AchievementGroup {
        emoji: "👶",
        keywords: &["宝宝", "baby", "孩子", "child", "生"],
    },
    AchievementGroup {
        emoji: "🏠",
        keywords: &["买房", "house", "搬家", "move", "装修"],
    },
    AchievementGroup {
        emoji: "🎨",
        keywords: &["创作", "create", "艺术", "art", "画"],
    },
    AchievementGroup {
        emoji: "🎸",
        keywords: &["音乐", "music", "乐器", "唱歌", "sing"],
    },
    AchievementGroup {
        emoji: "🏆",
        keywords: &["成就", "achievement", "完成", "complete", "目标"],
    },
];

/// Representative symbol for an achievement text.
pub fn match_achievement(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    ACHIEVEMENT_GROUPS
        .iter()
        .find(|group| group.keywords.iter().any(|k| lower.contains(k)))
        .map(|group| group.emoji)
        .unwrap_or(DEFAULT_ACHIEVEMENT_EMOJI)
}

pub fn best_thing_answer(text: &str) -> Result<BestThingAnswer, SessionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SessionError::EmptyInput { field: "best thing" });
    }
    Ok(BestThingAnswer {
        things: trimmed.to_string(),
        emoji: match_achievement(trimmed).to_string(),
    })
}

pub fn goal_answer(text: &str) -> Result<GoalAnswer, SessionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SessionError::EmptyInput { field: "goal" });
    }
    Ok(GoalAnswer {
        goal: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_text_matches_fitness() {
        let answer = best_thing_answer("finished my first 10k run").unwrap();
        assert_eq!(answer.emoji, "🏃");
        assert_eq!(answer.things, "finished my first 10k run");
    }

    #[test]
    fn marathon_alone_is_not_a_keyword_hit() {
        // "ran" is not "run"; the scan is substring, not stemming.
        assert_eq!(
            match_achievement("ran my first marathon"),
            DEFAULT_ACHIEVEMENT_EMOJI
        );
    }

    #[test]
    fn first_group_in_table_order_wins() {
        // "work trip" hits both travel and career; travel is scanned first.
        assert_eq!(match_achievement("work trip to Tokyo"), "✈️");
    }

    #[test]
    fn no_hit_falls_back_to_trophy() {
        assert_eq!(match_achievement("survived"), DEFAULT_ACHIEVEMENT_EMOJI);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(match_achievement("GRADUATED at last"), "🎓");
    }

    #[test]
    fn chinese_keywords_match() {
        assert_eq!(match_achievement("终于买房了"), "🏠");
    }

    #[test]
    fn empty_text_blocks_submission() {
        assert!(best_thing_answer("  ").is_err());
        assert!(goal_answer("").is_err());
    }

    #[test]
    fn goal_text_is_stored_verbatim_after_trim() {
        let answer = goal_answer("  write a book  ").unwrap();
        assert_eq!(answer.goal, "write a book");
    }
}
