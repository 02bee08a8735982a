use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use bw_core::RandomSource;
use bw_core::names::roll_beast_name;
use bw_mechanics::{CombatOutcome, InstanceId, RumorId};
use bw_session::{ActionRequest, GameResult, Phase, SessionId, SessionStore, Snapshot};

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// One of the five dispatchable actions.
    Action(ActionRequest),
    /// Stage the note for the next investigation.
    Stage(String),
    /// A combat action by id or name.
    Combat(String),
    AcquireWard(String),
    AcquireWeapon(String),
    ReleaseWard(u32),
    ReleaseWeapon(u32),
    Discover(String),
    Discard(u32),
}

fn parse_step(token: &str) -> Result<Step, String> {
    let token = token.trim();
    let (verb, arg) = match token.split_once(':') {
        Some((verb, arg)) => (verb.trim().to_lowercase(), Some(arg.trim())),
        None => (token.to_lowercase(), None),
    };
    let required = |what: &str| {
        arg.filter(|a| !a.is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("\"{token}\" needs {what} after ':'"))
    };
    let number = |what: &str| {
        required(what)?
            .parse::<u32>()
            .map_err(|_| format!("\"{token}\": {what} must be a number"))
    };

    Ok(match verb.as_str() {
        "stage" => Step::Stage(required("a note")?),
        "combat" | "fight" => Step::Combat(required("an action id")?),
        "acquire-ward" => Step::AcquireWard(required("a ward id")?),
        "acquire-weapon" => Step::AcquireWeapon(required("a weapon id")?),
        "release-ward" => Step::ReleaseWard(number("an instance id")?),
        "release-weapon" => Step::ReleaseWeapon(number("an instance id")?),
        "discover" => Step::Discover(required("a codex entry id")?),
        "discard" => Step::Discard(number("a rumor id")?),
        "move" => {
            let mut request = ActionRequest::new("move");
            request.target = arg.map(str::to_string);
            Step::Action(request)
        }
        "investigate" => {
            let mut request = ActionRequest::new("investigate");
            request.note = arg.filter(|a| !a.is_empty()).map(str::to_string);
            Step::Action(request)
        }
        _ => Step::Action(ActionRequest::new(verb)),
    })
}

fn read_script(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read script {}: {e}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn apply(store: &SessionStore, id: SessionId, step: &Step) -> Result<Option<String>, String> {
    let err = |e: bw_session::EngineError| e.to_string();
    match step {
        Step::Action(request) => {
            store.dispatch_action(id, request).map_err(err)?;
            Ok(None)
        }
        Step::Combat(action) => {
            let (resolution, _) = store.combat_action(id, action).map_err(err)?;
            let line = match resolution.outcome {
                CombatOutcome::Victory => resolution.message.green().bold().to_string(),
                CombatOutcome::Defeat => resolution.message.red().bold().to_string(),
                _ => resolution.message,
            };
            Ok(Some(line))
        }
        Step::Stage(note) => {
            store
                .with_session(id, |engine| engine.stage_rumor(note))
                .map_err(err)?;
            Ok(None)
        }
        Step::AcquireWard(catalog_id) => {
            let instance = store
                .with_session(id, |engine| engine.acquire_ward(catalog_id))
                .map_err(err)?;
            Ok(Some(format!("Acquired ward {catalog_id} as #{instance}")))
        }
        Step::AcquireWeapon(catalog_id) => {
            let instance = store
                .with_session(id, |engine| engine.acquire_weapon(catalog_id))
                .map_err(err)?;
            Ok(Some(format!("Acquired weapon {catalog_id} as #{instance}")))
        }
        Step::ReleaseWard(instance) => {
            store
                .with_session(id, |engine| engine.release_ward(InstanceId(*instance)))
                .map_err(err)?;
            Ok(None)
        }
        Step::ReleaseWeapon(instance) => {
            store
                .with_session(id, |engine| engine.release_weapon(InstanceId(*instance)))
                .map_err(err)?;
            Ok(None)
        }
        Step::Discover(entry) => {
            let gained = store
                .with_session(id, |engine| engine.discover_codex(entry))
                .map_err(err)?;
            Ok(Some(format!("Codex entry {entry}: +{gained} knowledge")))
        }
        Step::Discard(rumor) => {
            store
                .with_session(id, |engine| engine.discard_rumor(RumorId(*rumor)))
                .map_err(err)?;
            Ok(None)
        }
    }
}

pub fn run(
    inquisitor: &str,
    beast: Option<&str>,
    seed: Option<u64>,
    script: Option<&Path>,
    actions: &[String],
    json: bool,
) -> Result<(), String> {
    let mut tokens = match script {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    tokens.extend(actions.iter().cloned());
    let steps = tokens
        .iter()
        .map(|t| parse_step(t))
        .collect::<Result<Vec<_>, _>>()?;

    let beast_name = match beast {
        Some(name) => name.to_string(),
        None => {
            let mut namer = RandomSource::new(seed);
            roll_beast_name(&mut namer).map_err(|e| e.to_string())?
        }
    };

    let store = SessionStore::new();
    let (id, _) = store
        .create_session(&beast_name, inquisitor, seed)
        .map_err(|e| e.to_string())?;

    let mut notes = Vec::new();
    for (index, (token, step)) in tokens.iter().zip(&steps).enumerate() {
        tracing::debug!(step = index + 1, %token, "running step");
        let note = apply(&store, id, step)
            .map_err(|e| format!("step {} ({token}): {e}", index + 1))?;
        notes.extend(note);
    }

    let snapshot = store.get_session(id).map_err(|e| e.to_string())?;
    if json {
        let out = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| format!("failed to serialize snapshot: {e}"))?;
        println!("{out}");
    } else {
        print_summary(&snapshot, &notes);
    }
    Ok(())
}

fn print_summary(snapshot: &Snapshot, notes: &[String]) {
    println!(
        "  {} {} {}",
        "Hunting".bold(),
        snapshot.beast.name,
        format!("(seed {})", snapshot.seed).dimmed()
    );
    let phase = match snapshot.phase {
        Phase::GameOver(GameResult::Victory) => "VICTORY".green().bold().to_string(),
        Phase::GameOver(GameResult::Defeat) => "DEFEAT".red().bold().to_string(),
        other => other.to_string(),
    };
    println!(
        "  Day {}, {} action(s) left, phase: {phase}",
        snapshot.day, snapshot.actions_remaining
    );
    println!();

    let inq = &snapshot.inquisitor;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Inquisitor",
        "Health",
        "Knowledge",
        "Location",
        "Wards",
        "Weapons",
        "Readiness",
    ]);
    table.add_row(vec![
        inq.name.clone(),
        inq.health.to_string(),
        inq.knowledge.to_string(),
        inq.location.to_string(),
        inq.inventory.wards().len().to_string(),
        inq.inventory.weapons().len().to_string(),
        format!("{} ({})", snapshot.readiness, snapshot.readiness_tier),
    ]);
    println!("{table}");
    println!();

    if let Some(threat) = snapshot.tracker.threat {
        let predicted = snapshot
            .tracker
            .predicted
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Threat: {threat}, likely next: {predicted}");
    }
    if let Some(combat) = &snapshot.combat {
        println!(
            "  In combat: beast {}, inquisitor {}",
            combat.beast_health, combat.inquisitor_health
        );
    }
    println!(
        "  Rumors: {}, secrets: {}, codex: {}/{}",
        snapshot.rumors.len(),
        snapshot.secrets.len(),
        snapshot.codex_discovered,
        snapshot.codex.total()
    );
    println!();

    for note in notes {
        println!("  {note}");
    }
    if !notes.is_empty() {
        println!();
    }

    println!("  {}", "Game Log".bold().underline());
    for entry in &snapshot.log {
        println!("  {} {}", format!("[day {:>2}]", entry.day).dimmed(), entry.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            parse_step("move:II").unwrap(),
            Step::Action(ActionRequest::new("move").with_target("II"))
        );
        assert_eq!(
            parse_step("complete").unwrap(),
            Step::Action(ActionRequest::new("complete"))
        );
        assert_eq!(
            parse_step("investigate:claw marks").unwrap(),
            Step::Action(ActionRequest::new("investigate").with_note("claw marks"))
        );
        assert_eq!(parse_step("move").unwrap(), Step::Action(ActionRequest::new("move")));
    }

    #[test]
    fn parses_hooks() {
        assert_eq!(parse_step("stage: a howl").unwrap(), Step::Stage("a howl".into()));
        assert_eq!(parse_step("combat:2").unwrap(), Step::Combat("2".into()));
        assert_eq!(
            parse_step("acquire-weapon:wep1").unwrap(),
            Step::AcquireWeapon("wep1".into())
        );
        assert_eq!(parse_step("release-ward:3").unwrap(), Step::ReleaseWard(3));
        assert_eq!(parse_step("discover:6").unwrap(), Step::Discover("6".into()));
    }

    #[test]
    fn rejects_incomplete_hooks() {
        assert!(parse_step("stage").is_err());
        assert!(parse_step("combat:").is_err());
        assert!(parse_step("discard:abc").is_err());
    }
}
