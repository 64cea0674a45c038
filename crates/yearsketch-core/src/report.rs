//! Shareable report text and the symbol pool behind the emoji art.
//!
//! Both fold the aggregate answer record in fixed q1..q9 order; absent
//! answers contribute nothing, so partial aggregates are always valid
//! input. Deterministic for a given aggregate and label source.

use crate::answers::{
    ActivityId, AnswerSet, BodyChoice, MindsetChoice, PressureChoice, TravelChoice,
};
use crate::i18n::Labels;

/// Longest q7 text shown in the report before truncation.
const BEST_THING_MAX_CHARS: usize = 30;
/// Appended when the symbol pool comes up short.
const FILLER_SYMBOLS: [&str; 5] = ["✨", "🌟", "💫", "⭐", "🎉"];
/// The art generator never starves below this pool size.
const MIN_SYMBOLS: usize = 5;

const FOOTER: &str = "✨ 2025 简笔画 | Sketch 2025";

// Report symbols differ from the in-question option emojis; these are the
// result-page tables.

fn pressure_symbol(choice: PressureChoice) -> &'static str {
    match choice {
        PressureChoice::Found => "🎯",
        PressureChoice::NotFound => "🔍",
        PressureChoice::NotMyProblem => "🤷",
        PressureChoice::DontKnow => "❓",
    }
}

fn travel_symbol(choice: TravelChoice) -> &'static str {
    match choice {
        TravelChoice::None => "🏠",
        TravelChoice::Few => "🗺️",
        TravelChoice::Some => "🌍",
        TravelChoice::Many => "🌏",
    }
}

fn mindset_symbol(choice: MindsetChoice) -> &'static str {
    match choice {
        MindsetChoice::Optimistic => "✨",
        MindsetChoice::Calm => "😌",
        MindsetChoice::Anxious => "⚡",
        MindsetChoice::Confident => "💪",
    }
}

fn body_symbol(choice: BodyChoice) -> &'static str {
    match choice {
        BodyChoice::Significant => "🏆",
        BodyChoice::Some => "📈",
        BodyChoice::NoChange => "➡️",
        BodyChoice::Regression => "📉",
    }
}

fn activity_symbol(id: ActivityId) -> &'static str {
    match id {
        ActivityId::Exercise => "🏃",
        ActivityId::Hobbies => "🎨",
        ActivityId::Learning => "📚",
        ActivityId::Travel => "🌿",
        ActivityId::Loved => "❤️",
        ActivityId::Rest => "😴",
        ActivityId::SocialDrain => "😓",
        ActivityId::Work => "💼",
        ActivityId::Procrastinate => "📱",
        ActivityId::Overthink => "🌀",
        ActivityId::Phone => "📵",
        ActivityId::Chores => "🧹",
    }
}

fn label(labels: &dyn Labels, key: &str) -> String {
    // Missing labels degrade to the raw key; nothing here is fatal.
    labels.label(key).unwrap_or(key).to_string()
}

/// Fold the aggregate into the plain-text shareable report.
pub fn generate_report(answers: &AnswerSet, labels: &dyn Labels) -> String {
    let mut text = format!("🚀 {}\n\n", label(labels, "results.title"));

    if let Some(q1) = &answers.q1 {
        text += &format!(
            "{} {}: {}\n",
            pressure_symbol(q1.selected),
            label(labels, "results.sections.selfAwareness"),
            label(labels, &format!("q1.options.{}", q1.selected.as_str())),
        );
    }
    if let Some(q2) = &answers.q2 {
        text += &format!(
            "{} {}: {}\n",
            travel_symbol(q2.selected),
            label(labels, "results.sections.peak"),
            label(labels, &format!("q2.options.{}", q2.selected.as_str())),
        );
    }
    if let Some(q3) = &answers.q3 {
        if let Some(habit) = &q3.habit {
            let duration = q3
                .duration
                .map(|d| {
                    format!(
                        " ({})",
                        label(labels, &format!("q3.duration.{}", d.as_str()))
                    )
                })
                .unwrap_or_default();
            text += &format!(
                "🌱 {}: {habit}{duration}\n",
                label(labels, "results.sections.growth")
            );
        }
    }
    if let Some(q4) = &answers.q4 {
        text += &format!(
            "🦋 {}: \"{}\" → \"{}\"\n",
            label(labels, "results.sections.biggestChange"),
            q4.old_belief,
            q4.new_belief,
        );
    }
    if let Some(q5) = &answers.q5 {
        text += &format!(
            "🧠 {}: {}\n",
            label(labels, "results.sections.mindset"),
            label(labels, &format!("q5.options.{}", q5.selected.as_str())),
        );
    }
    if let Some(q6) = &answers.q6 {
        text += &format!(
            "💪 {}: {}\n",
            label(labels, "results.sections.body"),
            label(labels, &format!("q6.options.{}", q6.selected.as_str())),
        );
    }
    if let Some(q7) = &answers.q7 {
        let things: String = if q7.things.chars().count() > BEST_THING_MAX_CHARS {
            let mut s: String = q7.things.chars().take(BEST_THING_MAX_CHARS).collect();
            s.push_str("...");
            s
        } else {
            q7.things.clone()
        };
        text += &format!(
            "🏆 {}: {things}\n",
            label(labels, "results.sections.bestThing")
        );
    }
    if let Some(q8) = &answers.q8 {
        text += &format!(
            "🔋 {}: ⚡{}%\n",
            label(labels, "results.sections.energy"),
            q8.score
        );
    }
    if let Some(q9) = &answers.q9 {
        text += &format!("🚀 {}: {}\n", label(labels, "results.sections.goal"), q9.goal);
    }

    text += &format!("\n{FOOTER}");
    text
}

/// Derive the symbol pool that drives the art rendering. One or more
/// symbols per answered question, fixed fillers when fewer than
/// [`MIN_SYMBOLS`] accumulate. Repeats are fine.
pub fn collect_symbols(answers: &AnswerSet) -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = Vec::new();

    if let Some(q1) = &answers.q1 {
        symbols.push(pressure_symbol(q1.selected));
    }
    if let Some(q2) = &answers.q2 {
        symbols.push(travel_symbol(q2.selected));
    }
    if answers.q3.is_some() {
        symbols.push("🌱");
    }
    if answers.q4.is_some() {
        symbols.extend(["🦋", "💥"]);
    }
    if let Some(q5) = &answers.q5 {
        symbols.push(mindset_symbol(q5.selected));
    }
    if let Some(q6) = &answers.q6 {
        symbols.push(body_symbol(q6.selected));
    }
    if answers.q7.is_some() {
        symbols.extend(["🏆", "⭐"]);
    }
    if let Some(q8) = &answers.q8 {
        symbols.extend(["🔋", "⚡"]);
        for id in q8.charging_sources.iter().chain(&q8.draining_sources) {
            symbols.push(activity_symbol(*id));
        }
    }
    if answers.q9.is_some() {
        symbols.extend(["🚀", "🎯", "✨"]);
    }

    if symbols.len() < MIN_SYMBOLS {
        symbols.extend(FILLER_SYMBOLS);
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::*;
    use crate::i18n::{Catalog, Locale};

    fn en() -> Catalog {
        Catalog::new(Locale::En)
    }

    #[test]
    fn two_answer_report_has_two_content_lines_in_order() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q1(PressureAnswer {
            selected: PressureChoice::Found,
            emoji: "🎯".into(),
        }));
        answers.record(Answer::Q9(GoalAnswer {
            goal: "Run a marathon".into(),
        }));

        let report = generate_report(&answers, &en());
        let content: Vec<&str> = report
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with("🚀 My") && !l.starts_with("✨"))
            .collect();

        assert_eq!(content.len(), 2);
        assert!(content[0].starts_with("🎯"));
        assert!(content[1].starts_with("🚀"));
        assert!(content[1].contains("Run a marathon"));
    }

    #[test]
    fn report_snapshot_for_a_small_aggregate() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q1(PressureAnswer {
            selected: PressureChoice::Found,
            emoji: "🎯".into(),
        }));
        answers.record(Answer::Q8(EnergyAnswer {
            category: EnergyCategory::Charging,
            emoji: "😊".into(),
            score: 87,
            charging_sources: vec![ActivityId::Exercise],
            draining_sources: vec![],
        }));

        let expected = indoc::indoc! {"
            🚀 My 2025 Year in Review

            🎯 Self-awareness: Found it
            🔋 Energy: ⚡87%

            ✨ 2025 简笔画 | Sketch 2025"};
        assert_eq!(generate_report(&answers, &en()), expected);
    }

    #[test]
    fn report_is_deterministic() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q5(MindsetAnswer {
            selected: MindsetChoice::Confident,
            emoji: "💡".into(),
        }));
        assert_eq!(
            generate_report(&answers, &en()),
            generate_report(&answers, &en())
        );
    }

    #[test]
    fn empty_aggregate_still_renders_header_and_footer() {
        let report = generate_report(&AnswerSet::new(), &en());
        assert!(report.starts_with("🚀 "));
        assert!(report.ends_with(FOOTER));
    }

    #[test]
    fn skipped_habit_contributes_no_line() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q3(HabitAnswer {
            selected: "none".into(),
            emoji: "🤷".into(),
            habit: None,
            duration: None,
        }));
        let report = generate_report(&answers, &en());
        assert!(!report.contains("🌱"));
    }

    #[test]
    fn long_best_thing_is_truncated_at_char_boundary() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q7(BestThingAnswer {
            things: "终".repeat(40),
            emoji: "🏆".into(),
        }));
        let report = generate_report(&answers, &en());
        let line = report.lines().find(|l| l.starts_with("🏆")).unwrap();
        assert!(line.contains(&"终".repeat(30)));
        assert!(line.ends_with("..."));
        assert!(!line.contains(&"终".repeat(31)));
    }

    #[test]
    fn duration_suffix_uses_localized_label() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q3(HabitAnswer {
            selected: "learning guitar".into(),
            emoji: "✨".into(),
            habit: Some("learning guitar".into()),
            duration: Some(HabitDuration::HalfYear),
        }));
        let report = generate_report(&answers, &en());
        assert!(report.contains("learning guitar (Over half a year)"));
    }

    #[test]
    fn empty_aggregate_pool_is_all_filler() {
        let symbols = collect_symbols(&AnswerSet::new());
        assert_eq!(symbols, FILLER_SYMBOLS.to_vec());
    }

    #[test]
    fn battery_sources_feed_the_pool() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q8(EnergyAnswer {
            category: EnergyCategory::Charging,
            emoji: "😊".into(),
            score: 87,
            charging_sources: vec![ActivityId::Exercise, ActivityId::Loved],
            draining_sources: vec![ActivityId::Phone],
        }));

        let symbols = collect_symbols(&answers);
        // 🔋 ⚡ then the three sources, charging first; exactly the pool
        // minimum, so no filler.
        assert_eq!(symbols, vec!["🔋", "⚡", "🏃", "❤️", "📵"]);
        assert!(symbols.len() >= MIN_SYMBOLS);
    }

    #[test]
    fn full_aggregate_needs_no_filler() {
        let mut answers = AnswerSet::new();
        answers.record(Answer::Q4(BeliefAnswer {
            change: "a → b".into(),
            emoji: "🦋".into(),
            old_belief: "a".into(),
            new_belief: "b".into(),
        }));
        answers.record(Answer::Q7(BestThingAnswer {
            things: "graduated".into(),
            emoji: "🎓".into(),
        }));
        answers.record(Answer::Q9(GoalAnswer {
            goal: "write".into(),
        }));

        // 2 + 2 + 3 symbols, no filler appended.
        let symbols = collect_symbols(&answers);
        assert_eq!(symbols, vec!["🦋", "💥", "🏆", "⭐", "🚀", "🎯", "✨"]);
    }
}
