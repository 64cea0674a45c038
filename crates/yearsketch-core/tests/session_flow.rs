//! End-to-end session: answer all nine questions with fixed inputs and
//! check the generated report and symbol pool.

use yearsketch_core::answers::{
    ActivityId, BodyChoice, EnergyCategory, HabitDuration, MindsetChoice, PressureChoice,
    TravelChoice,
};
use yearsketch_core::art;
use yearsketch_core::events::ResponseCue;
use yearsketch_core::questions::{battery, belief, choice, habit, reflection};
use yearsketch_core::{collect_symbols, generate_report, Answer, Catalog, Locale, Session, Stage};

/// Drive a full session the way a host would: derive, record, tick.
fn answer(session: &mut Session, answer: Answer, cue: ResponseCue, clock: &mut u64) {
    session
        .record_answer_at(answer, cue, *clock)
        .expect("answer accepted");
    *clock += 2_000;
    assert!(session.tick_at(*clock).is_some(), "advance fired");
}

#[test]
fn full_session_produces_nine_line_report_and_art_pool() {
    let mut session = Session::with_delay(1_800);
    let mut clock = 0u64;

    session.start();
    assert_eq!(session.stage(), Stage::Q1);
    assert_eq!(session.progress(), Some((1, 9)));

    let (q1, cue) = choice::pressure_answer(PressureChoice::Found);
    answer(&mut session, Answer::Q1(q1), cue, &mut clock);

    let (q2, cue) = choice::travel_answer(TravelChoice::Many);
    answer(&mut session, Answer::Q2(q2), cue, &mut clock);

    let mut habit_flow = habit::HabitFlow::new();
    habit_flow.submit_habit("learning guitar").unwrap();
    let q3 = habit_flow.finish(HabitDuration::Months).unwrap();
    answer(&mut session, Answer::Q3(q3), ResponseCue::Sprout, &mut clock);

    let mut belief_flow = belief::BeliefFlow::new();
    belief_flow.submit_old("I'm not creative").unwrap();
    let q4 = belief_flow.finish("I can learn anything").unwrap();
    answer(&mut session, Answer::Q4(q4), ResponseCue::Butterfly, &mut clock);

    let (q5, cue) = choice::mindset_answer(MindsetChoice::Confident);
    answer(&mut session, Answer::Q5(q5), cue, &mut clock);

    let (q6, cue) = choice::body_answer(BodyChoice::Significant);
    answer(&mut session, Answer::Q6(q6), cue, &mut clock);

    let q7 = reflection::best_thing_answer("ran my first marathon").unwrap();
    answer(&mut session, Answer::Q7(q7), ResponseCue::Triumph, &mut clock);

    let mut energy = battery::EnergyBattery::new();
    energy.tap(ActivityId::Exercise).unwrap();
    energy.tap(ActivityId::Loved).unwrap();
    energy.tap(ActivityId::Rest).unwrap();
    let q8 = energy.complete().unwrap();
    assert_eq!(q8.score, 87);
    assert_eq!(q8.category, EnergyCategory::Charging);
    answer(&mut session, Answer::Q8(q8), ResponseCue::Spark, &mut clock);

    let q9 = reflection::goal_answer("write a book").unwrap();
    answer(&mut session, Answer::Q9(q9), ResponseCue::Liftoff, &mut clock);

    assert_eq!(session.stage(), Stage::Results);
    assert!(session.answers().is_complete());

    // Report: header, nine content lines in q1..q9 order, footer.
    let report = generate_report(session.answers(), &Catalog::new(Locale::En));
    let content: Vec<&str> = report
        .lines()
        .filter(|line| !line.is_empty())
        .skip(1) // header
        .collect();
    let content = &content[..content.len() - 1]; // footer
    assert_eq!(content.len(), 9);
    assert!(content[0].starts_with("🎯"));
    assert!(content[2].contains("learning guitar (A few months)"));
    assert!(content[3].contains("\"I'm not creative\" → \"I can learn anything\""));
    assert!(content[7].contains("⚡87%"));
    assert!(content[8].contains("write a book"));

    // Symbol pool feeds the art without starving.
    let symbols = collect_symbols(session.answers());
    assert!(symbols.len() >= 5);

    let text = art::art_text(&symbols, &art::BEAR);
    assert_eq!(text.lines().count(), art::BEAR.height());
}

#[test]
fn restart_discards_everything() {
    let mut session = Session::with_delay(0);
    session.start();
    let (q1, cue) = choice::pressure_answer(PressureChoice::NotFound);
    session.record_answer_at(Answer::Q1(q1), cue, 0).unwrap();
    session.tick_at(0);

    session.reset();
    assert_eq!(session.stage(), Stage::Landing);
    assert_eq!(session.answers().answered_count(), 0);

    // A fresh run is possible immediately.
    session.start();
    assert_eq!(session.stage(), Stage::Q1);
}
