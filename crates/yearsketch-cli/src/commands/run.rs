//! Interactive questionnaire session.

use yearsketch_core::answers::{Answer, EnergyCategory, HabitDuration};
use yearsketch_core::questions::battery::{ActivityKind, EnergyBattery};
use yearsketch_core::questions::belief::BeliefFlow;
use yearsketch_core::questions::choice::{
    body_answer, mindset_answer, pressure_answer, travel_answer, ChoiceOption, BODY_OPTIONS,
    MINDSET_OPTIONS, PRESSURE_OPTIONS, TRAVEL_OPTIONS,
};
use yearsketch_core::questions::habit::HabitFlow;
use yearsketch_core::questions::reflection::{best_thing_answer, goal_answer};
use yearsketch_core::session::DEFAULT_ADVANCE_DELAY_MS;
use yearsketch_core::{
    art, collect_symbols, generate_report, AnalyticsClient, AppConfig, Catalog, ClientInfo,
    Exporter, Labels, ResponseCue, Session, Stage,
};

use crate::clipboard::{Osc52Clipboard, StdoutTarget};
use crate::common::{catalog_for, label, read_line};

pub fn run(locale: Option<String>, fast: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let catalog = catalog_for(locale, config.locale);

    let analytics = if config.analytics.enabled {
        AnalyticsClient::new(&config.analytics.endpoint).with_client_info(ClientInfo {
            device: Some("terminal".to_string()),
            ..Default::default()
        })
    } else {
        AnalyticsClient::disabled()
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(analytics.page_view(catalog.locale()));

    let mut session = if fast {
        Session::with_delay(0)
    } else {
        Session::new()
    };

    loop {
        match session.stage() {
            Stage::Landing => {
                println!("\n🚀 {}", label(&catalog, "landing.title"));
                println!("{}\n", label(&catalog, "landing.subtitle"));
                read_line(&format!("[{}] ⏎ ", label(&catalog, "landing.start")))?;
                session.start();
            }
            Stage::Q1 => {
                if let Some(choice) =
                    ask_choice(&catalog, &mut session, "q1", &PRESSURE_OPTIONS, |c| {
                        c.as_str()
                    })?
                {
                    let (record, cue) = pressure_answer(choice);
                    submit(&mut session, Answer::Q1(record), cue, fast)?;
                }
            }
            Stage::Q2 => {
                if let Some(choice) =
                    ask_choice(&catalog, &mut session, "q2", &TRAVEL_OPTIONS, |c| c.as_str())?
                {
                    let (record, cue) = travel_answer(choice);
                    submit(&mut session, Answer::Q2(record), cue, fast)?;
                }
            }
            Stage::Q3 => ask_habit(&catalog, &mut session, fast)?,
            Stage::Q4 => ask_belief(&catalog, &mut session, fast)?,
            Stage::Q5 => {
                if let Some(choice) =
                    ask_choice(&catalog, &mut session, "q5", &MINDSET_OPTIONS, |c| {
                        c.as_str()
                    })?
                {
                    let (record, cue) = mindset_answer(choice);
                    submit(&mut session, Answer::Q5(record), cue, fast)?;
                }
            }
            Stage::Q6 => {
                if let Some(choice) =
                    ask_choice(&catalog, &mut session, "q6", &BODY_OPTIONS, |c| c.as_str())?
                {
                    let (record, cue) = body_answer(choice);
                    submit(&mut session, Answer::Q6(record), cue, fast)?;
                }
            }
            Stage::Q7 => ask_text(&catalog, &mut session, "q7", fast)?,
            Stage::Q8 => ask_battery(&catalog, &mut session, fast)?,
            Stage::Q9 => ask_text(&catalog, &mut session, "q9", fast)?,
            Stage::Results => break,
        }
    }

    show_results(&catalog, &session, &analytics, &runtime)?;
    Ok(())
}

fn progress_header(catalog: &Catalog, session: &Session, key: &str) {
    if let Some((current, total)) = session.progress() {
        let title_key = format!("{key}.title");
        println!(
            "\n[{}] {}",
            catalog.progress(current, total),
            label(catalog, &title_key)
        );
    }
}

/// Record, let the presentation beat play, advance.
fn submit(
    session: &mut Session,
    answer: Answer,
    cue: ResponseCue,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    session.record_answer(answer, cue)?;
    if !fast {
        std::thread::sleep(std::time::Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS));
    }
    while session.tick().is_none() {
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
    Ok(())
}

/// Number-or-back prompt over a fixed option table. `None` means the user
/// navigated back.
fn ask_choice<C: Copy>(
    catalog: &Catalog,
    session: &mut Session,
    key: &str,
    options: &[ChoiceOption<C>],
    id_of: impl Fn(C) -> &'static str,
) -> Result<Option<C>, Box<dyn std::error::Error>> {
    progress_header(catalog, session, key);
    for (i, option) in options.iter().enumerate() {
        let label_key = format!("{key}.options.{}", id_of(option.id));
        println!(
            "  {}. {} {}",
            i + 1,
            option.emoji,
            label(catalog, &label_key)
        );
    }
    loop {
        let input = read_line("> ")?;
        if input == "b" {
            session.retreat();
            return Ok(None);
        }
        if let Ok(n) = input.parse::<usize>() {
            if (1..=options.len()).contains(&n) {
                return Ok(Some(options[n - 1].id));
            }
        }
        println!("  1-{} / b", options.len());
    }
}

fn ask_habit(
    catalog: &Catalog,
    session: &mut Session,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    progress_header(catalog, session, "q3");
    println!("  ({} ⏎)", label(catalog, "q3.noHabit"));

    let mut flow = HabitFlow::new();
    let text = read_line("> ")?;
    if text == "b" {
        session.retreat();
        return Ok(());
    }
    if text.is_empty() {
        return submit(session, Answer::Q3(flow.skip()), ResponseCue::Sprout, fast);
    }

    let preview = flow.submit_habit(&text)?;
    println!("  {preview} {}", label(catalog, "q3.followUpTitle"));
    let durations = [
        ("⏳", HabitDuration::Short),
        ("🏃", HabitDuration::Months),
        ("🌱", HabitDuration::HalfYear),
        ("💪", HabitDuration::FullYear),
    ];
    for (i, (emoji, duration)) in durations.iter().enumerate() {
        let duration_key = format!("q3.duration.{}", duration.as_str());
        println!("  {}. {emoji} {}", i + 1, label(catalog, &duration_key));
    }
    let duration = loop {
        if let Ok(n) = read_line("> ")?.parse::<usize>() {
            if (1..=durations.len()).contains(&n) {
                break durations[n - 1].1;
            }
        }
        println!("  1-{}", durations.len());
    };

    let record = flow.finish(duration)?;
    submit(session, Answer::Q3(record), ResponseCue::Sprout, fast)
}

fn ask_belief(
    catalog: &Catalog,
    session: &mut Session,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    progress_header(catalog, session, "q4");

    let mut flow = BeliefFlow::new();
    loop {
        let old = read_line(&format!("  {} ", label(catalog, "q4.oldPrompt")))?;
        if old == "b" {
            session.retreat();
            return Ok(());
        }
        if flow.submit_old(&old).is_ok() {
            break;
        }
    }
    let record = loop {
        let new = read_line(&format!("  {} ", label(catalog, "q4.newPrompt")))?;
        match flow.clone().finish(&new) {
            Ok(record) => break record,
            Err(_) => continue, // empty input blocks submission
        }
    };
    submit(session, Answer::Q4(record), ResponseCue::Butterfly, fast)
}

fn ask_text(
    catalog: &Catalog,
    session: &mut Session,
    key: &str,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    progress_header(catalog, session, key);
    loop {
        let text = read_line("> ")?;
        if text == "b" {
            session.retreat();
            return Ok(());
        }
        let result = if key == "q7" {
            best_thing_answer(&text).map(|a| (Answer::Q7(a), ResponseCue::Triumph))
        } else {
            goal_answer(&text).map(|a| (Answer::Q9(a), ResponseCue::Liftoff))
        };
        if let Ok((answer, cue)) = result {
            return submit(session, answer, cue, fast);
        }
        // empty input blocks submission; ask again
    }
}

fn ask_battery(
    catalog: &Catalog,
    session: &mut Session,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    progress_header(catalog, session, "q8");

    let mut battery = EnergyBattery::new();
    loop {
        println!("  ⚡ {}%", battery.score());
        let remaining = battery.remaining();
        for (i, activity) in remaining.iter().enumerate() {
            let sign = if activity.kind == ActivityKind::Charge {
                "+"
            } else {
                ""
            };
            let activity_key = format!("q8.activities.{}", activity.id.as_str());
            println!(
                "  {}. {} {} ({sign}{})",
                i + 1,
                activity.emoji,
                label(catalog, &activity_key),
                activity.delta
            );
        }
        if battery.can_complete() {
            println!("  d. {}", label(catalog, "q8.complete"));
        }

        let input = read_line("> ")?;
        if input == "b" {
            session.retreat();
            return Ok(());
        }
        if input == "d" && battery.can_complete() {
            break;
        }
        if let Ok(n) = input.parse::<usize>() {
            if (1..=remaining.len()).contains(&n) {
                let receipt = battery.tap(remaining[n - 1].id)?;
                let sign = if receipt.delta > 0 { "+" } else { "" };
                println!(
                    "  {} {sign}{}% → {}%",
                    receipt.emoji, receipt.delta, receipt.score
                );
            }
        }
    }

    let record = battery.complete()?;
    let result_key = match record.category {
        EnergyCategory::Charging => "q8.resultCharging",
        EnergyCategory::Draining => "q8.resultDraining",
        EnergyCategory::Balanced => "q8.resultBalanced",
    };
    println!(
        "  {} ⚡{}% {}",
        record.emoji,
        record.score,
        label(catalog, result_key)
    );
    submit(session, Answer::Q8(record), ResponseCue::Spark, fast)
}

fn show_results(
    catalog: &Catalog,
    session: &Session,
    analytics: &AnalyticsClient,
    runtime: &tokio::runtime::Runtime,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}\n", label(catalog, "results.generating"));

    let report = generate_report(session.answers(), catalog);
    println!("{report}\n");

    runtime.block_on(analytics.report_generated(catalog.locale(), session.answers()));

    let copy = read_line(&format!("[{}? y/⏎] ", label(catalog, "results.share")))?;
    if copy == "y" {
        let mut exporter = Exporter::new()
            .with_target(Box::new(Osc52Clipboard))
            .with_target(Box::new(StdoutTarget));
        if exporter.export(&report).is_some() {
            println!("{}", label(catalog, "results.shareSuccess"));
        }
    }

    let symbols = collect_symbols(session.answers());
    let shape = art::ShapeKind::random();
    println!("\n{}", art::art_text(&symbols, shape.template()));

    Ok(())
}
