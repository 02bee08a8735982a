//! Game session engine for Beastwatch.
//!
//! A [`GameEngine`] is the per-session state machine: it owns the session's
//! random source, moves the beast between days, runs investigations and
//! combat, and renders [`Snapshot`]s. A [`SessionStore`] keeps many engines
//! side by side and serializes access to each one.

pub mod config;
pub mod engine;
pub mod error;
pub mod id;
pub mod journal;
pub mod movement;
pub mod snapshot;
pub mod store;

pub use config::GameConfig;
pub use engine::{Action, Beast, GameEngine, GameResult, Phase};
pub use error::{EngineError, EngineResult, ErrorKind};
pub use id::SessionId;
pub use journal::{GameLog, LogEntry};
pub use movement::{MovementRecord, ThreatLevel, Tracker};
pub use snapshot::{BeastView, Snapshot};
pub use store::{ActionKind, ActionRequest, SessionStore, SessionSummary};
