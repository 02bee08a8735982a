//! Serializable views of a session.

use bw_core::LocationId;
use bw_mechanics::{CodexProgress, CombatState, Health, Inquisitor, ReadinessTier, Rumor, Secret};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::Phase;
use crate::id::SessionId;
use crate::journal::LogEntry;
use crate::movement::{MovementRecord, Tracker};

/// What is known about the beast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeastView {
    /// Display name.
    pub name: String,
    /// Current location.
    pub location: LocationId,
    /// Health, only while a fight is in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
}

/// A full copy of one session's state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Session id.
    pub id: SessionId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Seed driving the session; replaying it reproduces the game.
    pub seed: u64,
    /// Random draws made so far.
    pub draws: u64,
    /// Current phase.
    pub phase: Phase,
    /// Current day.
    pub day: u32,
    /// Actions left today.
    pub actions_remaining: u32,
    /// The inquisitor, inventory included.
    pub inquisitor: Inquisitor,
    /// The beast.
    pub beast: BeastView,
    /// Note waiting to be investigated.
    pub staged_note: Option<String>,
    /// All rumors.
    pub rumors: Vec<Rumor>,
    /// All secrets.
    pub secrets: Vec<Secret>,
    /// Codex entries with discovery state.
    pub codex: CodexProgress,
    /// Number of discovered codex entries.
    pub codex_discovered: usize,
    /// Readiness score, 0 to 100.
    pub readiness: u32,
    /// Readiness classification.
    pub readiness_tier: ReadinessTier,
    /// Beast movement history.
    pub movements: Vec<MovementRecord>,
    /// Beast tracker.
    pub tracker: Tracker,
    /// The fight in progress, if any.
    pub combat: Option<CombatState>,
    /// The game log.
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::engine::GameEngine;

    #[test]
    fn json_shape() {
        let mut game =
            GameEngine::new("Beast", "Mercy", GameConfig::default().with_seed(42)).unwrap();
        game.acquire_weapon("wep2").unwrap();
        game.discover_codex("7").unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["phase"], "actions");
        assert_eq!(json["day"], 1);
        assert_eq!(json["actions_remaining"], 2);
        assert_eq!(json["inquisitor"]["name"], "Mercy");
        assert_eq!(json["inquisitor"]["health"], 100);
        assert_eq!(json["inquisitor"]["knowledge"], 10);
        assert_eq!(json["inquisitor"]["location"], "I");
        assert_eq!(json["inquisitor"]["weapons"][0]["id"], "wep2");
        assert!(json["beast"].get("health").is_none());
        assert_eq!(json["codex"].as_array().unwrap().len(), 7);
        assert_eq!(json["codex_discovered"], 1);
        assert_eq!(json["readiness"], 25);
        assert_eq!(json["readiness_tier"], "unprepared");
        assert!(json["combat"].is_null());
        assert_eq!(json["log"].as_array().unwrap().len(), 3);
    }
}
