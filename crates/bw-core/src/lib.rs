//! Core types for Beastwatch: the seeded random source, the London location
//! graph, and the static catalogs every session shares.
//!
//! Nothing in this crate holds per-session mutable state except
//! [`RandomSource`], which each session owns exclusively. The graph and the
//! catalogs are immutable process-wide tables.

/// Static catalogs: wards, weapons, and beast lore.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// The fixed graph of London locations.
pub mod location;
/// Beast name tables.
pub mod names;
/// Seeded deterministic random source and dice.
pub mod random;

/// Re-export catalog types.
pub use catalog::{CodexCategory, CodexTemplate, Rarity, WardTemplate, WeaponTemplate};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export location types.
pub use location::{Direction, Location, LocationGraph, LocationId, LocationsView};
/// Re-export the random source.
pub use random::{Die, RandomSource};
