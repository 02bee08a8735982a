//! Error types for the session engine.

use bw_core::{CoreError, LocationId};
use bw_mechanics::MechError;
use serde::Serialize;

use crate::id::SessionId;

/// Result type for session operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Coarse classification of an [`EngineError`], suitable for mapping onto
/// status codes at an outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The addressed session, rumor, item, or entry does not exist.
    NotFound,
    /// The request was missing something or malformed.
    Validation,
    /// The request is not allowed in the session's current phase.
    IllegalState,
    /// An internal invariant was broken.
    Internal,
}

/// Errors that can occur while running a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No session with this id.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// A move that the map or the day does not allow.
    #[error("cannot move from {from} to {to}: {reason}")]
    InvalidMove {
        /// Current location.
        from: LocationId,
        /// Requested destination.
        to: LocationId,
        /// Why the move was refused.
        reason: &'static str,
    },

    /// Missing or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Not allowed in the current phase.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A mechanics rule rejected the request.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// A core table or the random source rejected the request.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SessionNotFound(_) => ErrorKind::NotFound,
            Self::InvalidMove { .. } | Self::Validation(_) => ErrorKind::Validation,
            Self::IllegalState(_) => ErrorKind::IllegalState,
            Self::Mechanics(err) => match err {
                MechError::Core(core) => core_kind(core),
                MechError::NotFound { .. } => ErrorKind::NotFound,
                MechError::Validation(_)
                | MechError::MissingWeapon(_)
                | MechError::UnknownCombatAction(_) => ErrorKind::Validation,
            },
            Self::Core(core) => core_kind(core),
        }
    }
}

fn core_kind(err: &CoreError) -> ErrorKind {
    match err {
        CoreError::EmptyInput(_) => ErrorKind::Internal,
        CoreError::UnknownLocation(_) => ErrorKind::Validation,
        CoreError::UnknownCatalogEntry { .. } => ErrorKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(
            EngineError::SessionNotFound(SessionId::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            EngineError::InvalidMove {
                from: LocationId::RoyalExchange,
                to: LocationId::Marshalsea,
                reason: "not adjacent",
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            EngineError::from(MechError::MissingWeapon("Careful Strike")).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            EngineError::from(MechError::from(CoreError::EmptyInput("random_choice"))).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            EngineError::from(CoreError::UnknownCatalogEntry {
                kind: "ward",
                id: "w0".into()
            })
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            EngineError::IllegalState("over".into()).kind(),
            ErrorKind::IllegalState
        );
    }

    #[test]
    fn messages() {
        let err = EngineError::InvalidMove {
            from: LocationId::RoyalExchange,
            to: LocationId::Marshalsea,
            reason: "not adjacent",
        };
        assert_eq!(err.to_string(), "cannot move from I to VII: not adjacent");
    }
}
