//! Game mechanics for Beastwatch.
//!
//! Provides the inquisitor's health pool and inventory, the rumor/secret
//! investigation system, codex discovery, and the dice-based combat
//! resolver. Every randomized rule takes the session's
//! [`bw_core::RandomSource`] explicitly; nothing here owns a generator.

pub mod codex;
pub mod combat;
pub mod error;
pub mod health;
pub mod inquisitor;
pub mod inventory;
pub mod investigation;

pub use codex::{CodexEntry, CodexProgress};
pub use combat::{CombatActionKind, CombatOutcome, CombatResolution, CombatState, RiskLevel};
pub use error::{MechError, MechResult};
pub use health::Health;
pub use inquisitor::Inquisitor;
pub use inventory::{InstanceId, Inventory, ItemKind, ReadinessTier};
pub use investigation::{Investigation, Rumor, RumorId, Secret, Verification, VerificationPolicy};
