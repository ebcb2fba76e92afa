//! Interactive garden session.
//!
//! Drives the full engine from stdin commands. State lives in memory
//! for the duration of the process and is discarded on exit; there is
//! deliberately no save file.

use std::io::{BufRead, Write};
use std::str::FromStr;

use flobi_core::{
    catalog, Config, Event, GardenEngine, GiftKind, MissionKind, UserState,
};

use super::mission::select_provider;

const HELP: &str = "\
commands:
  status                      print the full state snapshot
  mission <kind> [subject]    start a mission (quiz answers are read interactively)
  water | fertilize           care actions
  shop                        list shop stock
  buy <item-id>               buy an item with dewdrops
  gifts                       list unclaimed gifts
  gift send <kind>            parent: send dewdrops|vitality|xp|fertilizer
  gift claim <gift-id>        child: claim a pending gift
  offline                     list offline challenges
  offline pick <id>           child: select a challenge
  offline verify <yes|no>     parent: verdict on the pending challenge
  goals                       list weekly goals and templates
  goal propose <n> [reward]   parent: propose template n (1-based)
  goal accept <goal-id>       child: accept a pending goal
  goal reject <goal-id>       child: reject a pending goal
  rename <name>               rename the pet (1-12 characters)
  help                        this text
  quit                        end the session (state is discarded)";

pub fn run(demo: bool, offline: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let provider = select_provider(&config, offline);
    let rt = tokio::runtime::Runtime::new()?;

    let mut state = if demo {
        UserState::demo()
    } else {
        UserState::default()
    };
    state.pet_name = config.garden.pet_name.clone();
    let mut engine = GardenEngine::new(state);

    println!("Welcome to the garden of {}. Type 'help' for commands.", engine.state().pet_name);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["status"] => print_event(&engine.snapshot())?,
            ["mission", kind, rest @ ..] => {
                start_and_play_mission(&mut engine, provider.as_ref(), &rt, kind, rest, &mut lines)?;
            }
            ["water"] => match engine.water() {
                Some(event) => print_event(&event)?,
                None => println!("Not enough dewdrops."),
            },
            ["fertilize"] => report_events(engine.fertilize(), "No fertilizer left.")?,
            ["shop"] => println!("{}", serde_json::to_string_pretty(&catalog::shop_items())?),
            ["buy", item_id] => {
                match catalog::shop_items().into_iter().find(|i| i.id == *item_id) {
                    Some(item) => match engine.buy(&item) {
                        Some(event) => print_event(&event)?,
                        None => println!("Not enough dewdrops for {}.", item.name),
                    },
                    None => println!("No such item: {item_id}"),
                }
            }
            ["gifts"] => {
                println!("{}", serde_json::to_string_pretty(&engine.state().pending_gifts)?)
            }
            ["gift", "send", kind] => match parse_gift_kind(kind) {
                Some(kind) => print_event(&engine.send_gift(kind))?,
                None => println!("Unknown gift kind: {kind}"),
            },
            ["gift", "claim", gift_id] => {
                report_events(engine.claim_gift(gift_id), "No such gift.")?
            }
            ["offline"] => {
                println!("{}", serde_json::to_string_pretty(&catalog::offline_challenges())?)
            }
            ["offline", "pick", id] => {
                match catalog::offline_challenges().into_iter().find(|c| c.id == *id) {
                    Some(challenge) => {
                        if let Some(event) = engine.select_offline_challenge(challenge) {
                            print_event(&event)?;
                        }
                    }
                    None => println!("No such challenge: {id}"),
                }
            }
            ["offline", "verify", verdict] => {
                let accepted = matches!(*verdict, "yes" | "y" | "accept");
                report_events(engine.verify_offline(accepted), "Nothing pending verification.")?
            }
            ["goals"] => {
                println!("active: {}", serde_json::to_string_pretty(&engine.state().active_goals)?);
                println!("templates: {}", serde_json::to_string_pretty(&catalog::goal_templates())?);
            }
            ["goal", "propose", index, reward @ ..] => {
                let templates = catalog::goal_templates();
                match index.parse::<usize>().ok().and_then(|n| templates.get(n.wrapping_sub(1))) {
                    Some(template) => {
                        let reward = if reward.is_empty() {
                            None
                        } else {
                            Some(reward.join(" "))
                        };
                        print_event(&engine.propose_goal(template, reward))?;
                    }
                    None => println!("Template index out of range (1-{}).", templates.len()),
                }
            }
            ["goal", "accept", goal_id] => match engine.accept_goal(goal_id) {
                Some(event) => print_event(&event)?,
                None => println!("No pending goal with that id."),
            },
            ["goal", "reject", goal_id] => match engine.reject_goal(goal_id) {
                Some(event) => print_event(&event)?,
                None => println!("No pending goal with that id."),
            },
            ["rename", name @ ..] => match engine.rename_pet(&name.join(" ")) {
                Some(event) => print_event(&event)?,
                None => println!("Names are 1-12 characters."),
            },
            _ => println!("Unrecognized command. Type 'help'."),
        }
    }

    println!("Session over. The garden fades until next time.");
    Ok(())
}

fn start_and_play_mission(
    engine: &mut GardenEngine,
    provider: &dyn flobi_core::MissionProvider,
    rt: &tokio::runtime::Runtime,
    kind: &str,
    subject_parts: &[&str],
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Ok(kind) = MissionKind::from_str(kind) else {
        println!("Unknown mission kind: {kind}");
        return Ok(());
    };
    let subject = if subject_parts.is_empty() {
        None
    } else {
        Some(subject_parts.join(" "))
    };

    println!("Generating the challenge...");
    let Some(started) = rt.block_on(engine.start_mission(provider, kind, subject.as_deref()))
    else {
        println!("A mission is already in progress.");
        return Ok(());
    };
    print_event(&started)?;

    let mission = engine.active_mission().cloned().expect("mission just started");
    let (success, score, total) = if mission.questions.is_empty() {
        // Instructional mission: doing it counts as success.
        println!("{}\n{}", mission.title, mission.description);
        (true, 1, 1)
    } else {
        let total = mission.questions.len() as u32;
        let mut score = 0u32;
        for (i, q) in mission.questions.iter().enumerate() {
            println!("Question {}/{}: {}", i + 1, total, q.question);
            for (j, option) in q.options.iter().enumerate() {
                println!("  {}. {}", j + 1, option);
            }
            print!("answer> ");
            std::io::stdout().flush()?;
            let answer = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let picked = answer.trim().parse::<usize>().unwrap_or(0);
            if picked == q.correct_index + 1 {
                println!("Correct!");
                score += 1;
            } else {
                println!("Not quite. The answer was {}.", q.options[q.correct_index]);
            }
        }
        // Half right or better passes.
        (score * 2 >= total, score, total)
    };

    report_events(engine.complete_mission(success, score, total), "")?;
    Ok(())
}

fn parse_gift_kind(s: &str) -> Option<GiftKind> {
    match s {
        "dewdrops" => Some(GiftKind::Dewdrops),
        "vitality" => Some(GiftKind::Vitality),
        "xp" => Some(GiftKind::Xp),
        "fertilizer" => Some(GiftKind::Fertilizer),
        _ => None,
    }
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

fn report_events(events: Vec<Event>, rejection: &str) -> Result<(), Box<dyn std::error::Error>> {
    if events.is_empty() {
        if !rejection.is_empty() {
            println!("{rejection}");
        }
        return Ok(());
    }
    for event in &events {
        print_event(event)?;
        if let Event::LevelUp { level, stage, .. } = event {
            println!("🎉 Level {level}! Your pet reached the {} stage {}", stage, stage.icon());
        }
    }
    Ok(())
}
