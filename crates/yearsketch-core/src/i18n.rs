//! Locale catalog.
//!
//! The core only ever needs straight key lookup with one numeric
//! interpolation (the "current/total" progress text). Hosts with their own
//! localization stack implement [`Labels`]; the embedded [`Catalog`] covers
//! the two shipped locales.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Locale> {
        match s {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Display-string lookup by dotted key path.
pub trait Labels {
    fn label(&self, key: &str) -> Option<&str>;

    /// "current/total" progress text.
    fn progress(&self, current: u8, total: u8) -> String {
        format!("{current}/{total}")
    }
}

/// (key, zh, en)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("landing.title", "2025 简笔画", "Sketch 2025"),
    (
        "landing.subtitle",
        "九个问题，画出你的一年",
        "Nine questions to sketch your year",
    ),
    ("landing.start", "开始", "Start"),
    ("q1.title", "今年的压力源找到了吗？", "Did you find what was weighing on you this year?"),
    ("q1.options.found", "找到了", "Found it"),
    ("q1.options.notFound", "还没找到", "Still looking"),
    ("q1.options.notMyProblem", "不关我事", "Not my problem"),
    ("q1.options.dontKnow", "说不清", "Hard to say"),
    ("q2.title", "今年去了多少地方？", "How far did you travel this year?"),
    ("q2.options.none", "哪儿也没去", "Stayed put"),
    ("q2.options.few", "去了几个地方", "A few places"),
    ("q2.options.some", "走了不少地方", "Quite a few"),
    ("q2.options.many", "走遍了世界", "All over the world"),
    ("q3.title", "今年养成了什么新习惯？", "What new habit did you keep this year?"),
    ("q3.followUpTitle", "坚持了多久？", "How long did it last?"),
    ("q3.noHabit", "没有新习惯", "No new habit"),
    ("q3.duration.short", "几周", "A few weeks"),
    ("q3.duration.months", "几个月", "A few months"),
    ("q3.duration.halfYear", "半年多", "Over half a year"),
    ("q3.duration.fullYear", "一整年", "The whole year"),
    ("q4.title", "今年最大的想法转变是什么？", "What belief changed most this year?"),
    ("q4.oldPrompt", "以前我相信……", "I used to believe..."),
    ("q4.newPrompt", "现在我相信……", "Now I believe..."),
    ("q5.title", "现在的心态更接近？", "Which mindset fits you now?"),
    ("q5.options.optimistic", "乐观", "Optimistic"),
    ("q5.options.calm", "平静", "Calm"),
    ("q5.options.anxious", "焦虑", "Anxious"),
    ("q5.options.confident", "自信", "Confident"),
    ("q6.title", "身体状态怎么样了？", "How did your body hold up?"),
    ("q6.options.significant", "进步明显", "Big progress"),
    ("q6.options.some", "有些进步", "Some progress"),
    ("q6.options.noChange", "没什么变化", "About the same"),
    ("q6.options.regression", "退步了", "Slipped back"),
    ("q7.title", "今年最棒的一件事？", "The best thing that happened this year?"),
    ("q8.title", "你的能量流向了哪里？", "Where did your energy go?"),
    ("q8.complete", "看看结果", "See the result"),
    ("q8.resultCharging", "充电的一年", "A charging year"),
    ("q8.resultDraining", "耗电的一年", "A draining year"),
    ("q8.resultBalanced", "收支平衡的一年", "A balanced year"),
    ("q8.activities.exercise", "运动", "Exercise"),
    ("q8.activities.hobbies", "爱好", "Hobbies"),
    ("q8.activities.learning", "学习", "Learning"),
    ("q8.activities.travel", "旅行", "Travel"),
    ("q8.activities.loved", "爱的人", "Loved ones"),
    ("q8.activities.rest", "休息", "Rest"),
    ("q8.activities.socialDrain", "无效社交", "Draining socials"),
    ("q8.activities.work", "工作", "Work"),
    ("q8.activities.procrastinate", "拖延", "Procrastinating"),
    ("q8.activities.overthink", "想太多", "Overthinking"),
    ("q8.activities.phone", "刷手机", "Doomscrolling"),
    ("q8.activities.chores", "琐事", "Chores"),
    ("q9.title", "明年最想完成的一件事？", "One thing you want most from next year?"),
    ("results.title", "我的 2025 年度报告", "My 2025 Year in Review"),
    ("results.generating", "正在生成你的年度报告…", "Sketching your year..."),
    ("results.share", "复制报告", "Copy report"),
    ("results.shareSuccess", "已复制", "Copied"),
    ("results.sections.selfAwareness", "自我认知", "Self-awareness"),
    ("results.sections.peak", "足迹", "Footprints"),
    ("results.sections.growth", "新习惯", "New habit"),
    ("results.sections.biggestChange", "最大转变", "Biggest change"),
    ("results.sections.mindset", "心态", "Mindset"),
    ("results.sections.body", "身体", "Body"),
    ("results.sections.bestThing", "年度高光", "Highlight"),
    ("results.sections.energy", "能量", "Energy"),
    ("results.sections.goal", "明年目标", "Next year"),
];

/// Embedded zh/en catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Labels for Catalog {
    fn label(&self, key: &str) -> Option<&str> {
        MESSAGES.iter().find(|(k, _, _)| *k == key).map(|(_, zh, en)| match self.locale {
            Locale::Zh => *zh,
            Locale::En => *en,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_per_locale() {
        let zh = Catalog::new(Locale::Zh);
        let en = Catalog::new(Locale::En);
        assert_eq!(zh.label("q1.options.found"), Some("找到了"));
        assert_eq!(en.label("q1.options.found"), Some("Found it"));
    }

    #[test]
    fn unknown_key_is_none() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.label("q1.options.bogus"), None);
    }

    #[test]
    fn default_locale_is_zh() {
        assert_eq!(Locale::default(), Locale::Zh);
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn progress_text_interpolates() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.progress(3, 9), "3/9");
    }

    #[test]
    fn every_key_has_both_translations() {
        for (key, zh, en) in MESSAGES {
            assert!(!zh.is_empty(), "missing zh for {key}");
            assert!(!en.is_empty(), "missing en for {key}");
        }
    }
}
