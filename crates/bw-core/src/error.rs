/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core tables and the random source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A random choice was requested over an empty set (or zero total weight).
    ///
    /// This is an invariant violation in static data, never a user error.
    #[error("random choice over empty input: {0}")]
    EmptyInput(&'static str),

    /// A location id or slug did not match any node of the graph.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(String),

    /// A catalog id did not match any template.
    #[error("unknown {kind} catalog entry: \"{id}\"")]
    UnknownCatalogEntry {
        /// The catalog that was searched (ward, weapon, codex).
        kind: &'static str,
        /// The id that was requested.
        id: String,
    },
}
