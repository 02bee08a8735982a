//! The player character.

use bw_core::LocationId;
use serde::Serialize;

use crate::health::Health;
use crate::inventory::Inventory;

/// The inquisitor hunting the beast.
#[derive(Debug, Clone, Serialize)]
pub struct Inquisitor {
    /// Display name.
    pub name: String,
    /// Health pool outside of combat.
    pub health: Health,
    /// Accumulated knowledge from secrets and lore.
    pub knowledge: u32,
    /// Where the inquisitor currently stands.
    pub location: LocationId,
    /// Owned wards and weapons.
    #[serde(flatten)]
    pub inventory: Inventory,
}

impl Inquisitor {
    /// A fresh inquisitor at full health with nothing learned or owned.
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            health: Health::full(),
            knowledge: 0,
            location,
            inventory: Inventory::new(),
        }
    }

    /// Add knowledge, saturating at `u32::MAX`.
    pub fn learn(&mut self, amount: u32) {
        self.knowledge = self.knowledge.saturating_add(amount);
    }

    /// Readiness score for the current inventory and knowledge.
    pub fn readiness(&self) -> u32 {
        self.inventory.readiness_score(self.knowledge)
    }
}
