//! Concurrent registry of game sessions.
//!
//! The map lock is held only long enough to insert, remove, list, or clone a
//! session handle. Each session has its own mutex, so operations on
//! different sessions never wait on each other and operations on the same
//! session run one at a time.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use bw_core::{LocationGraph, LocationId, LocationsView};
use bw_mechanics::{CombatActionKind, CombatResolution};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::engine::{Action, GameEngine, Phase};
use crate::error::{EngineError, EngineResult};
use crate::id::SessionId;
use crate::snapshot::Snapshot;

/// The five dispatchable action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Walk to an adjacent location.
    Move,
    /// Record a rumor.
    Investigate,
    /// Verify rumors.
    Verify,
    /// Confront the beast.
    Hunt,
    /// End the day.
    CompleteAction,
}

impl FromStr for ActionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "move" => Ok(Self::Move),
            "investigate" => Ok(Self::Investigate),
            "verify" | "verify_rumors" => Ok(Self::Verify),
            "hunt" | "hunt_beast" => Ok(Self::Hunt),
            "complete" | "complete_action" => Ok(Self::CompleteAction),
            other => Err(EngineError::Validation(format!(
                "unknown action type \"{other}\""
            ))),
        }
    }
}

/// An action request as it arrives from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Action kind, e.g. `"move"` or `"complete_action"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Destination for `move`, as a roman code or slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Rumor text for `investigate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActionRequest {
    /// A request with only a kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the move target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the rumor note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Turn the request into an engine action.
    pub fn parse(&self) -> EngineResult<Action> {
        match self.kind.parse::<ActionKind>()? {
            ActionKind::Move => {
                let target = self
                    .target
                    .as_deref()
                    .ok_or_else(|| EngineError::Validation("move requires a target".into()))?;
                Ok(Action::Move(target.parse::<LocationId>()?))
            }
            ActionKind::Investigate => Ok(Action::Investigate {
                note: self.note.clone(),
            }),
            ActionKind::Verify => Ok(Action::Verify),
            ActionKind::Hunt => Ok(Action::Hunt),
            ActionKind::CompleteAction => Ok(Action::CompleteAction),
        }
    }
}

/// One line of the session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Session id.
    pub id: SessionId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// The beast's name.
    pub beast_name: String,
    /// The inquisitor's name.
    pub inquisitor_name: String,
    /// Current phase.
    pub phase: Phase,
    /// Current day.
    pub day: u32,
}

type SessionHandle = Arc<Mutex<GameEngine>>;

/// Thread-safe registry of live sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    defaults: GameConfig,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// An empty store using default game settings.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// An empty store whose new sessions start from `defaults`.
    pub fn with_config(defaults: GameConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            defaults,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether no sessions exist.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn handle(&self, id: SessionId) -> EngineResult<SessionHandle> {
        self.sessions.read().get(&id).cloned().ok_or_else(|| {
            tracing::warn!(%id, "session not found");
            EngineError::SessionNotFound(id)
        })
    }

    /// Create a session. A `seed` overrides the store's default.
    pub fn create_session(
        &self,
        beast_name: &str,
        inquisitor_name: &str,
        seed: Option<u64>,
    ) -> EngineResult<(SessionId, Snapshot)> {
        let mut config = self.defaults.clone();
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let engine = GameEngine::new(beast_name, inquisitor_name, config).inspect_err(|e| {
            tracing::warn!(error = %e, "session creation rejected");
        })?;
        let id = engine.id();
        let snapshot = engine.snapshot();
        self.sessions
            .write()
            .insert(id, Arc::new(Mutex::new(engine)));
        tracing::info!(%id, seed = snapshot.seed, "session created");
        Ok((id, snapshot))
    }

    /// Current snapshot of a session.
    pub fn get_session(&self, id: SessionId) -> EngineResult<Snapshot> {
        let handle = self.handle(id)?;
        let engine = handle.lock();
        Ok(engine.snapshot())
    }

    /// Every session, oldest first.
    pub fn list_sessions(&self) -> Vec<SessionSummary> {
        let handles: Vec<SessionHandle> = self.sessions.read().values().cloned().collect();
        let mut summaries: Vec<SessionSummary> = handles
            .iter()
            .map(|handle| {
                let engine = handle.lock();
                SessionSummary {
                    id: engine.id(),
                    created_at: engine.created_at(),
                    beast_name: engine.beast().name.clone(),
                    inquisitor_name: engine.inquisitor().name.clone(),
                    phase: engine.phase(),
                    day: engine.day(),
                }
            })
            .collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        summaries
    }

    /// Remove a session.
    pub fn delete_session(&self, id: SessionId) -> EngineResult<()> {
        match self.sessions.write().remove(&id) {
            Some(_) => {
                tracing::info!(%id, "session deleted");
                Ok(())
            }
            None => {
                tracing::warn!(%id, "delete of unknown session");
                Err(EngineError::SessionNotFound(id))
            }
        }
    }

    /// Run one of the five actions and return the new snapshot.
    pub fn dispatch_action(&self, id: SessionId, request: &ActionRequest) -> EngineResult<Snapshot> {
        self.with_session(id, |engine| {
            let action = request.parse()?;
            engine.dispatch(&action)?;
            Ok(engine.snapshot())
        })
    }

    /// Resolve a combat action given by catalog id or name.
    pub fn combat_action(
        &self,
        id: SessionId,
        action: &str,
    ) -> EngineResult<(CombatResolution, Snapshot)> {
        self.with_session(id, |engine| {
            let kind = action.parse::<CombatActionKind>()?;
            let resolution = engine.combat_action(kind)?;
            Ok((resolution, engine.snapshot()))
        })
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameEngine) -> EngineResult<R>,
    ) -> EngineResult<R> {
        let handle = self.handle(id)?;
        let mut engine = handle.lock();
        f(&mut *engine).inspect_err(|e| {
            tracing::warn!(%id, kind = ?e.kind(), error = %e, "operation rejected");
        })
    }

    /// The location graph.
    pub fn get_locations(&self) -> LocationsView {
        LocationGraph::london().view()
    }
}
