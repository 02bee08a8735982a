//! Error types for the mechanics engine.

use bw_core::CoreError;

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A core table or the random source rejected the request.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An owned item, rumor, or lore entry does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was looked up (rumor, ward, weapon, codex entry).
        kind: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// Missing or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A combat action needs a weapon and none is owned.
    #[error("{0} requires a weapon; search for arms before engaging in melee combat")]
    MissingWeapon(&'static str),

    /// A combat action name or id did not match the catalog.
    #[error("unknown combat action: \"{0}\"")]
    UnknownCombatAction(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
