//! The per-session state machine.
//!
//! A session starts in [`Phase::Actions`] on day 1. The inquisitor spends
//! actions moving, investigating and verifying, ends the day with
//! [`GameEngine::complete_action`] (which moves the beast), and can start a
//! fight with [`GameEngine::hunt_beast`] when standing where the beast is.
//! A fight ends in [`Phase::GameOver`] or, after a successful retreat, back
//! in [`Phase::Actions`]. Nothing is allowed once the game is over.
//!
//! Every operation validates before it writes, so a failed call leaves the
//! session exactly as it was, RNG cursor included.

use std::fmt;

use bw_core::{LocationGraph, LocationId, RandomSource, names};
use bw_mechanics::{
    CodexProgress, CombatActionKind, CombatOutcome, CombatResolution, CombatState, Inquisitor,
    InstanceId, Investigation, ItemKind, RumorId, Verification,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::id::SessionId;
use crate::journal::GameLog;
use crate::movement::{self, MovementRecord, Tracker};
use crate::snapshot::{BeastView, Snapshot};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// The beast was slain.
    Victory,
    /// The inquisitor fell.
    Defeat,
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The inquisitor may spend actions or end the day.
    Actions,
    /// A fight is in progress; only combat actions are allowed.
    Combat,
    /// The game has ended.
    GameOver(GameResult),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actions => write!(f, "actions"),
            Self::Combat => write!(f, "combat"),
            Self::GameOver(GameResult::Victory) => write!(f, "game over (victory)"),
            Self::GameOver(GameResult::Defeat) => write!(f, "game over (defeat)"),
        }
    }
}

/// The beast being hunted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Beast {
    /// Display name.
    pub name: String,
    /// Current location.
    pub location: LocationId,
}

/// One of the five dispatchable actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Walk to an adjacent location.
    Move(LocationId),
    /// Record a rumor here, from the given note or the staged one.
    Investigate {
        /// Note to record instead of the staged one.
        note: Option<String>,
    },
    /// Try to turn rumors into secrets.
    Verify,
    /// Confront the beast.
    Hunt,
    /// End the day.
    CompleteAction,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(to) => write!(f, "move to {to}"),
            Self::Investigate { .. } => write!(f, "investigate"),
            Self::Verify => write!(f, "verify"),
            Self::Hunt => write!(f, "hunt"),
            Self::CompleteAction => write!(f, "complete action"),
        }
    }
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    id: SessionId,
    created_at: DateTime<Utc>,
    config: GameConfig,
    graph: &'static LocationGraph,
    rng: RandomSource,
    phase: Phase,
    day: u32,
    actions_remaining: u32,
    inquisitor: Inquisitor,
    beast: Beast,
    staged_note: Option<String>,
    investigation: Investigation,
    codex: CodexProgress,
    movements: Vec<MovementRecord>,
    combat: Option<CombatState>,
    log: GameLog,
}

impl GameEngine {
    /// Set up a new session.
    ///
    /// The inquisitor starts at full health at the configured location; the
    /// beast's lair is drawn uniformly from the whole map.
    pub fn new(
        beast_name: &str,
        inquisitor_name: &str,
        config: GameConfig,
    ) -> EngineResult<Self> {
        let beast_name = beast_name.trim();
        let inquisitor_name = inquisitor_name.trim();
        if beast_name.is_empty() || inquisitor_name.is_empty() {
            return Err(EngineError::Validation(
                "beast name and inquisitor name are required".into(),
            ));
        }

        let mut rng = RandomSource::new(config.seed);
        let lair = *rng.random_choice(&LocationId::ALL)?;
        let graph = LocationGraph::london();
        let inquisitor = Inquisitor::new(inquisitor_name, config.starting_location);

        let mut log = GameLog::new();
        log.record(
            1,
            format!(
                "{inquisitor_name} arrives at {} to hunt {beast_name}.",
                graph.location(config.starting_location).name
            ),
        );

        let engine = Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            actions_remaining: config.actions_per_day,
            config,
            graph,
            rng,
            phase: Phase::Actions,
            day: 1,
            inquisitor,
            beast: Beast {
                name: beast_name.to_string(),
                location: lair,
            },
            staged_note: None,
            investigation: Investigation::new(),
            codex: CodexProgress::new(),
            movements: Vec::new(),
            combat: None,
            log,
        };
        tracing::debug!(id = %engine.id, seed = engine.rng.seed(), lair = %lair, "session set up");
        Ok(engine)
    }

    /// Set up a session against a beast with a rolled name.
    pub fn with_random_beast(inquisitor_name: &str, config: GameConfig) -> EngineResult<Self> {
        let mut namer = RandomSource::new(config.seed);
        let beast_name = names::roll_beast_name(&mut namer)?;
        Self::new(&beast_name, inquisitor_name, config)
    }

    // -- accessors --

    /// Session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The configuration the session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed driving this session, drawn from entropy if none was given.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of random draws made so far.
    pub fn draws(&self) -> u64 {
        self.rng.draws()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current day, starting at 1.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Actions left today.
    pub fn actions_remaining(&self) -> u32 {
        self.actions_remaining
    }

    /// The inquisitor.
    pub fn inquisitor(&self) -> &Inquisitor {
        &self.inquisitor
    }

    /// The beast.
    pub fn beast(&self) -> &Beast {
        &self.beast
    }

    /// The note that the next investigation will record.
    pub fn staged_note(&self) -> Option<&str> {
        self.staged_note.as_deref()
    }

    /// Rumors and secrets.
    pub fn investigation(&self) -> &Investigation {
        &self.investigation
    }

    /// Lore discovery state.
    pub fn codex(&self) -> &CodexProgress {
        &self.codex
    }

    /// Every relocation of the beast so far.
    pub fn movements(&self) -> &[MovementRecord] {
        &self.movements
    }

    /// The fight in progress, if any.
    pub fn combat(&self) -> Option<&CombatState> {
        self.combat.as_ref()
    }

    /// The game log.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Beast tracker view.
    pub fn tracker(&self) -> Tracker {
        Tracker::new(self.graph, &self.movements, self.beast.location)
    }

    fn location_name(&self, id: LocationId) -> &'static str {
        self.graph.location(id).name
    }

    // -- guards --

    fn ensure_actions_phase(&self, operation: &str) -> EngineResult<()> {
        match self.phase {
            Phase::Actions => Ok(()),
            Phase::Combat => Err(EngineError::IllegalState(format!(
                "cannot {operation} during combat"
            ))),
            Phase::GameOver(_) => Err(EngineError::IllegalState(format!(
                "cannot {operation}: the game is over"
            ))),
        }
    }

    fn ensure_action_available(&self, operation: &str) -> EngineResult<()> {
        self.ensure_actions_phase(operation)?;
        if self.actions_remaining == 0 {
            return Err(EngineError::IllegalState(format!(
                "cannot {operation}: no actions remaining today"
            )));
        }
        Ok(())
    }

    // -- the five actions --

    /// Run one of the five actions.
    pub fn dispatch(&mut self, action: &Action) -> EngineResult<()> {
        tracing::debug!(id = %self.id, day = self.day, %action, "dispatching action");
        match action {
            Action::Move(to) => self.move_player(*to),
            Action::Investigate { note } => self.investigate_with(note.as_deref()).map(|_| ()),
            Action::Verify => self.verify_rumors().map(|_| ()),
            Action::Hunt => self.hunt_beast(),
            Action::CompleteAction => self.complete_action().map(|_| ()),
        }
    }

    /// Walk to an adjacent location, spending one action.
    pub fn move_player(&mut self, to: LocationId) -> EngineResult<()> {
        self.ensure_actions_phase("move")?;
        let from = self.inquisitor.location;
        if self.actions_remaining == 0 {
            return Err(EngineError::InvalidMove {
                from,
                to,
                reason: "no actions remaining today",
            });
        }
        if !self.graph.are_adjacent(from, to) {
            return Err(EngineError::InvalidMove {
                from,
                to,
                reason: "locations are not adjacent",
            });
        }

        self.inquisitor.location = to;
        self.actions_remaining -= 1;
        self.log.record(
            self.day,
            format!(
                "{} travels from {} to {}.",
                self.inquisitor.name,
                self.location_name(from),
                self.location_name(to)
            ),
        );
        Ok(())
    }

    /// Stage the note the next investigation will record. Costs nothing.
    pub fn stage_rumor(&mut self, note: &str) -> EngineResult<()> {
        self.ensure_actions_phase("stage a rumor")?;
        let note = note.trim();
        if note.is_empty() {
            return Err(EngineError::Validation("rumor note cannot be empty".into()));
        }
        self.staged_note = Some(note.to_string());
        Ok(())
    }

    /// Record the staged rumor at the current location, spending one action.
    pub fn investigate(&mut self) -> EngineResult<RumorId> {
        self.investigate_with(None)
    }

    /// Record a rumor from `note`, or from the staged note when `None`.
    pub fn investigate_with(&mut self, note: Option<&str>) -> EngineResult<RumorId> {
        self.ensure_action_available("investigate")?;
        let note = note
            .or(self.staged_note.as_deref())
            .ok_or_else(|| EngineError::Validation("no rumor staged to investigate".into()))?;
        let location = self.inquisitor.location;
        let id = self.investigation.record_rumor(location, note)?;

        self.staged_note = None;
        self.actions_remaining -= 1;
        self.log.record(
            self.day,
            format!("A rumor is noted at {}.", self.location_name(location)),
        );
        Ok(id)
    }

    /// Try to verify every unverified rumor, spending one action.
    pub fn verify_rumors(&mut self) -> EngineResult<Verification> {
        self.ensure_action_available("verify rumors")?;
        if self.investigation.unverified_count() == 0 {
            return Err(EngineError::Validation("no unverified rumors to verify".into()));
        }

        let mut rng = self.rng.clone();
        let result =
            self.investigation
                .verify_rumors(&mut rng, &self.config.verification, self.day)?;
        self.rng = rng;

        self.inquisitor.learn(result.knowledge_gained);
        self.actions_remaining -= 1;
        self.log.record(
            self.day,
            format!(
                "Verified {} of {} rumors; {} knowledge gained.",
                result.secrets.len(),
                result.checked,
                result.knowledge_gained
            ),
        );
        Ok(result)
    }

    /// Confront the beast. Only possible where the beast is. Costs nothing.
    pub fn hunt_beast(&mut self) -> EngineResult<()> {
        self.ensure_actions_phase("hunt")?;
        if self.inquisitor.location != self.beast.location {
            return Err(EngineError::IllegalState(format!(
                "the beast is not at {}",
                self.location_name(self.inquisitor.location)
            )));
        }

        self.combat = Some(CombatState::new(self.inquisitor.health));
        self.phase = Phase::Combat;
        self.log.record(
            self.day,
            format!(
                "{} confronts {} at {}!",
                self.inquisitor.name,
                self.beast.name,
                self.location_name(self.beast.location)
            ),
        );
        Ok(())
    }

    /// End the day: the beast moves, actions reset, and the day advances.
    /// Allowed whether or not actions remain.
    pub fn complete_action(&mut self) -> EngineResult<MovementRecord> {
        self.ensure_actions_phase("end the day")?;

        let next_day = self.day + 1;
        let mut rng = self.rng.clone();
        let record = movement::relocate_beast(
            self.graph,
            self.beast.location,
            self.inquisitor.location,
            next_day,
            &mut rng,
        )?;
        self.rng = rng;

        self.beast.location = record.location;
        self.movements.push(record);
        self.day = next_day;
        self.actions_remaining = self.config.actions_per_day;
        self.log.record(
            self.day,
            format!(
                "Day {}. The beast was sighted to the {}, threat {}.",
                self.day,
                record.direction,
                movement::ThreatLevel::from_distance(record.distance)
            ),
        );
        Ok(record)
    }

    // -- combat --

    /// Resolve one combat action.
    pub fn combat_action(&mut self, kind: CombatActionKind) -> EngineResult<CombatResolution> {
        if self.phase != Phase::Combat {
            return Err(EngineError::IllegalState(
                "no fight in progress; hunt the beast first".into(),
            ));
        }
        let combat = self
            .combat
            .as_mut()
            .ok_or_else(|| EngineError::IllegalState("combat state missing".into()))?;
        let resolution = combat.resolve(kind, &self.inquisitor, &mut self.rng)?;
        self.log.record(self.day, resolution.message.clone());

        match resolution.outcome {
            CombatOutcome::Continuing => {}
            CombatOutcome::Fled => {
                self.end_combat(&resolution);
                self.phase = Phase::Actions;
            }
            CombatOutcome::Victory => {
                self.end_combat(&resolution);
                self.finish(GameResult::Victory);
            }
            CombatOutcome::Defeat => {
                self.end_combat(&resolution);
                self.finish(GameResult::Defeat);
            }
        }
        Ok(resolution)
    }

    fn end_combat(&mut self, resolution: &CombatResolution) {
        self.inquisitor.health = resolution.inquisitor_health;
        self.combat = None;
    }

    fn finish(&mut self, result: GameResult) {
        self.phase = Phase::GameOver(result);
        let line = match result {
            GameResult::Victory => format!(
                "{} has slain {}. London sleeps safely tonight.",
                self.inquisitor.name, self.beast.name
            ),
            GameResult::Defeat => format!(
                "{} has fallen to {}. The hunt is over.",
                self.inquisitor.name, self.beast.name
            ),
        };
        tracing::info!(id = %self.id, day = self.day, ?result, "game over");
        self.log.record(self.day, line);
    }

    // -- auxiliary hooks --

    /// Remove an unverified rumor. Costs nothing.
    pub fn discard_rumor(&mut self, id: RumorId) -> EngineResult<()> {
        self.ensure_actions_phase("discard a rumor")?;
        let rumor = self.investigation.discard_rumor(id)?;
        self.log.record(
            self.day,
            format!("A rumor from {} is dismissed.", self.location_name(rumor.location)),
        );
        Ok(())
    }

    /// Discover a codex entry, adding its knowledge once. Costs nothing.
    pub fn discover_codex(&mut self, entry_id: &str) -> EngineResult<u32> {
        self.ensure_actions_phase("consult the codex")?;
        let gained = self.codex.discover(entry_id)?;
        if gained > 0 {
            self.inquisitor.learn(gained);
            self.log.record(
                self.day,
                format!("Codex entry {entry_id} discovered; {gained} knowledge gained."),
            );
        }
        Ok(gained)
    }

    /// Acquire a catalog ward. Costs nothing.
    pub fn acquire_ward(&mut self, catalog_id: &str) -> EngineResult<InstanceId> {
        self.acquire(ItemKind::Ward, catalog_id)
    }

    /// Acquire a catalog weapon. Costs nothing.
    pub fn acquire_weapon(&mut self, catalog_id: &str) -> EngineResult<InstanceId> {
        self.acquire(ItemKind::Weapon, catalog_id)
    }

    /// Release an owned ward.
    pub fn release_ward(&mut self, instance: InstanceId) -> EngineResult<()> {
        self.release(ItemKind::Ward, instance)
    }

    /// Release an owned weapon.
    pub fn release_weapon(&mut self, instance: InstanceId) -> EngineResult<()> {
        self.release(ItemKind::Weapon, instance)
    }

    /// Acquire an item of either kind. Costs nothing.
    pub fn acquire(&mut self, kind: ItemKind, catalog_id: &str) -> EngineResult<InstanceId> {
        self.ensure_actions_phase("change equipment")?;
        let instance = self.inquisitor.inventory.acquire(kind, catalog_id)?;
        self.log.record(
            self.day,
            format!("Acquired {kind} {catalog_id} (#{instance})."),
        );
        Ok(instance)
    }

    /// Release an item of either kind. Costs nothing.
    pub fn release(&mut self, kind: ItemKind, instance: InstanceId) -> EngineResult<()> {
        self.ensure_actions_phase("change equipment")?;
        self.inquisitor.inventory.release(kind, instance)?;
        self.log
            .record(self.day, format!("Released {kind} #{instance}."));
        Ok(())
    }

    // -- views --

    /// Serializable copy of the whole session state.
    pub fn snapshot(&self) -> Snapshot {
        let readiness = self.inquisitor.readiness();
        Snapshot {
            id: self.id,
            created_at: self.created_at,
            seed: self.rng.seed(),
            draws: self.rng.draws(),
            phase: self.phase,
            day: self.day,
            actions_remaining: self.actions_remaining,
            inquisitor: self.inquisitor.clone(),
            beast: BeastView {
                name: self.beast.name.clone(),
                location: self.beast.location,
                health: self.combat.as_ref().map(|c| c.beast_health),
            },
            staged_note: self.staged_note.clone(),
            rumors: self.investigation.rumors().to_vec(),
            secrets: self.investigation.secrets().to_vec(),
            codex: self.codex.clone(),
            codex_discovered: self.codex.discovered_count(),
            readiness,
            readiness_tier: bw_mechanics::ReadinessTier::from_score(readiness),
            movements: self.movements.clone(),
            tracker: self.tracker(),
            combat: self.combat.clone(),
            log: self.log.entries().to_vec(),
        }
    }
}
