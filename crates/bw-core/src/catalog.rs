//! Static catalogs shared by every session: wards, weapons, and beast lore.
//!
//! These tables are initialized at compile time and never mutated.

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// How hard an item is to come by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Found in any parish.
    Common,
    /// Needs some searching.
    Uncommon,
    /// Few exist in London.
    Rare,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
        }
    }
}

/// A protective ward template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WardTemplate {
    /// Catalog id (`w1`..`w6`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor text.
    pub description: &'static str,
    /// Narrative effect.
    pub effect: &'static str,
    /// Acquisition cost.
    pub cost: u32,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Contribution to the readiness score.
    pub power_level: u32,
}

/// A weapon template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponTemplate {
    /// Catalog id (`wep1`..`wep6`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor text.
    pub description: &'static str,
    /// Narrative effect.
    pub effect: &'static str,
    /// Listed damage.
    pub damage: u32,
    /// Listed accuracy, in percent.
    pub accuracy: u32,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Contribution to the readiness score.
    pub power_level: u32,
}

/// Category of a lore entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodexCategory {
    /// How the beast behaves.
    Trait,
    /// What hurts it.
    Weakness,
    /// Rites that can be used against it.
    Ritual,
    /// Where it came from.
    History,
}

impl CodexCategory {
    /// All categories in display order.
    pub const ALL: [CodexCategory; 4] = [Self::Trait, Self::Weakness, Self::Ritual, Self::History];
}

impl fmt::Display for CodexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trait => write!(f, "trait"),
            Self::Weakness => write!(f, "weakness"),
            Self::Ritual => write!(f, "ritual"),
            Self::History => write!(f, "history"),
        }
    }
}

/// A lore entry template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodexTemplate {
    /// Catalog id (`1`..`7`).
    pub id: &'static str,
    /// Category.
    pub category: CodexCategory,
    /// Title.
    pub title: &'static str,
    /// Revealed text.
    pub description: &'static str,
    /// Knowledge granted on discovery.
    pub knowledge_value: u32,
}

/// Every ward that can be acquired.
pub static WARDS: [WardTemplate; 6] = [
    WardTemplate {
        id: "w1",
        name: "Holy Water",
        description: "Purified water blessed by clergy. Burns evil on contact.",
        effect: "Reduces damage taken by 10%",
        cost: 0,
        rarity: Rarity::Common,
        power_level: 1,
    },
    WardTemplate {
        id: "w2",
        name: "Iron Cross",
        description: "Forged iron in the shape of a cross. Repels supernatural entities.",
        effect: "Grants +5 defense. Works against unholy attacks.",
        cost: 0,
        rarity: Rarity::Common,
        power_level: 1,
    },
    WardTemplate {
        id: "w3",
        name: "Salt Circle",
        description: "Blessed salt arranged in a protective circle.",
        effect: "Creates a temporary safe zone. Beast cannot enter.",
        cost: 0,
        rarity: Rarity::Common,
        power_level: 2,
    },
    WardTemplate {
        id: "w4",
        name: "Sacred Rune",
        description: "Ancient symbols of power carved into bone.",
        effect: "Increases all action success by +2",
        cost: 0,
        rarity: Rarity::Uncommon,
        power_level: 2,
    },
    WardTemplate {
        id: "w5",
        name: "Blessed Talisman",
        description: "A holy artifact imbued with the power of saints.",
        effect: "Grants divine protection. Negates one fatal blow.",
        cost: 0,
        rarity: Rarity::Rare,
        power_level: 3,
    },
    WardTemplate {
        id: "w6",
        name: "Demon's Bane",
        description: "Crafted from materials the Beast fears most.",
        effect: "Doubles damage dealt to the Beast.",
        cost: 5,
        rarity: Rarity::Rare,
        power_level: 3,
    },
];

/// Every weapon that can be acquired.
pub static WEAPONS: [WeaponTemplate; 6] = [
    WeaponTemplate {
        id: "wep1",
        name: "Blessed Blade",
        description: "A sword blessed by priests. Cannot be corrupted.",
        effect: "Standard damage. Effective against most creatures.",
        damage: 15,
        accuracy: 70,
        rarity: Rarity::Common,
        power_level: 1,
    },
    WeaponTemplate {
        id: "wep2",
        name: "Silver Dagger",
        description: "A dagger of pure silver. Supernatural in origin.",
        effect: "Bonus damage to undead and supernatural beings.",
        damage: 12,
        accuracy: 85,
        rarity: Rarity::Common,
        power_level: 1,
    },
    WeaponTemplate {
        id: "wep3",
        name: "Holy Flame",
        description: "Fire that burns with holy purpose, never extinguishing.",
        effect: "Deals fire damage. Effective against dark creatures.",
        damage: 20,
        accuracy: 65,
        rarity: Rarity::Uncommon,
        power_level: 2,
    },
    WeaponTemplate {
        id: "wep4",
        name: "Consecrated Hammer",
        description: "A hammer blessed in sacred ground. Crushes evil.",
        effect: "High impact damage. Stuns on critical hit.",
        damage: 25,
        accuracy: 60,
        rarity: Rarity::Uncommon,
        power_level: 2,
    },
    WeaponTemplate {
        id: "wep5",
        name: "Warded Bow",
        description: "A bow that never misses against its chosen prey.",
        effect: "Ranged attacks. Homing arrows with +10 accuracy.",
        damage: 18,
        accuracy: 90,
        rarity: Rarity::Rare,
        power_level: 3,
    },
    WeaponTemplate {
        id: "wep6",
        name: "Beast Slayer's Axe",
        description: "Legendary weapon forged specifically to hunt demons.",
        effect: "Deals massive damage. Massive penalty if you lack knowledge.",
        damage: 35,
        accuracy: 50,
        rarity: Rarity::Rare,
        power_level: 3,
    },
];

/// The beast lore that can be discovered.
pub static BEAST_LORE: [CodexTemplate; 7] = [
    CodexTemplate {
        id: "1",
        category: CodexCategory::Trait,
        title: "Nocturnal Hunter",
        description: "The Beast hunts only under the cover of darkness. It retreats at dawn.",
        knowledge_value: 15,
    },
    CodexTemplate {
        id: "2",
        category: CodexCategory::Trait,
        title: "Pack Behavior",
        description: "The Beast is rarely alone. It commands lesser creatures to do its bidding.",
        knowledge_value: 15,
    },
    CodexTemplate {
        id: "3",
        category: CodexCategory::Weakness,
        title: "Vulnerability to Iron",
        description: "Blessed iron weapons can pierce through the Beast's supernatural defenses.",
        knowledge_value: 25,
    },
    CodexTemplate {
        id: "4",
        category: CodexCategory::Weakness,
        title: "Holy Ground",
        description: "The Beast cannot cross blessed ground. Churches and consecrated ground are safe havens.",
        knowledge_value: 25,
    },
    CodexTemplate {
        id: "5",
        category: CodexCategory::Ritual,
        title: "Banishment Circle",
        description: "A circle of salt and ash can temporarily bind the Beast, preventing its escape.",
        knowledge_value: 30,
    },
    CodexTemplate {
        id: "6",
        category: CodexCategory::Ritual,
        title: "True Name Ritual",
        description: "Speaking the Beast's true name during combat weakens its power significantly.",
        knowledge_value: 40,
    },
    CodexTemplate {
        id: "7",
        category: CodexCategory::History,
        title: "Ancient Origin",
        description: "The Beast has plagued London for centuries, first recorded in 1682.",
        knowledge_value: 10,
    },
];

/// Look up a ward template by catalog id.
pub fn ward(id: &str) -> CoreResult<&'static WardTemplate> {
    WARDS
        .iter()
        .find(|w| w.id == id)
        .ok_or_else(|| CoreError::UnknownCatalogEntry {
            kind: "ward",
            id: id.to_string(),
        })
}

/// Look up a weapon template by catalog id.
pub fn weapon(id: &str) -> CoreResult<&'static WeaponTemplate> {
    WEAPONS
        .iter()
        .find(|w| w.id == id)
        .ok_or_else(|| CoreError::UnknownCatalogEntry {
            kind: "weapon",
            id: id.to_string(),
        })
}

/// Look up a lore entry by catalog id.
pub fn lore(id: &str) -> CoreResult<&'static CodexTemplate> {
    BEAST_LORE
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CoreError::UnknownCatalogEntry {
            kind: "codex",
            id: id.to_string(),
        })
}
