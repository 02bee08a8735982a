//! Owned wards and weapons, and the readiness score derived from them.

use std::fmt;
use std::str::FromStr;

use bw_core::catalog::{self, WardTemplate, WeaponTemplate};
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Points contributed by each ward or weapon power level.
const POWER_WEIGHT: u32 = 15;
/// Points contributed by every full ten points of knowledge.
const KNOWLEDGE_STEP_POINTS: u32 = 10;
/// Upper bound of the readiness score.
const MAX_READINESS: u32 = 100;

/// Which half of the inventory an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Protective wards.
    Ward,
    /// Weapons.
    Weapon,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ward => write!(f, "ward"),
            Self::Weapon => write!(f, "weapon"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ward" | "wards" => Ok(Self::Ward),
            "weapon" | "weapons" => Ok(Self::Weapon),
            other => Err(MechError::Validation(format!(
                "unknown item kind \"{other}\" (expected ward or weapon)"
            ))),
        }
    }
}

/// Identifier given to an item when it is acquired.
///
/// Unique within one inventory; the same template can be owned twice under
/// two different instance ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ward the inquisitor carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedWard {
    /// Acquisition id.
    pub instance: InstanceId,
    /// Catalog data.
    #[serde(flatten)]
    pub template: &'static WardTemplate,
}

/// A weapon the inquisitor carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedWeapon {
    /// Acquisition id.
    pub instance: InstanceId,
    /// Catalog data.
    #[serde(flatten)]
    pub template: &'static WeaponTemplate,
}

/// Coarse classification of a readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    /// Below 30.
    Unprepared,
    /// 30 to 59.
    Developing,
    /// 60 to 84.
    Adequate,
    /// 85 and above.
    WellPrepared,
}

impl ReadinessTier {
    /// Classify a score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..30 => Self::Unprepared,
            30..60 => Self::Developing,
            60..85 => Self::Adequate,
            _ => Self::WellPrepared,
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unprepared => write!(f, "Unprepared"),
            Self::Developing => write!(f, "Developing"),
            Self::Adequate => write!(f, "Adequate"),
            Self::WellPrepared => write!(f, "Well Prepared"),
        }
    }
}

/// Wards and weapons owned by one inquisitor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    wards: Vec<OwnedWard>,
    weapons: Vec<OwnedWeapon>,
    #[serde(skip)]
    next_instance: u32,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> InstanceId {
        self.next_instance += 1;
        InstanceId(self.next_instance)
    }

    /// Acquire a copy of a catalog ward.
    pub fn acquire_ward(&mut self, catalog_id: &str) -> MechResult<InstanceId> {
        let template = catalog::ward(catalog_id)?;
        let instance = self.allocate();
        self.wards.push(OwnedWard { instance, template });
        Ok(instance)
    }

    /// Acquire a copy of a catalog weapon.
    pub fn acquire_weapon(&mut self, catalog_id: &str) -> MechResult<InstanceId> {
        let template = catalog::weapon(catalog_id)?;
        let instance = self.allocate();
        self.weapons.push(OwnedWeapon { instance, template });
        Ok(instance)
    }

    /// Acquire an item of either kind.
    pub fn acquire(&mut self, kind: ItemKind, catalog_id: &str) -> MechResult<InstanceId> {
        match kind {
            ItemKind::Ward => self.acquire_ward(catalog_id),
            ItemKind::Weapon => self.acquire_weapon(catalog_id),
        }
    }

    /// Remove an owned item by its acquisition id.
    pub fn release(&mut self, kind: ItemKind, instance: InstanceId) -> MechResult<()> {
        let position = match kind {
            ItemKind::Ward => self.wards.iter().position(|w| w.instance == instance),
            ItemKind::Weapon => self.weapons.iter().position(|w| w.instance == instance),
        };
        let index = position.ok_or_else(|| MechError::NotFound {
            kind: match kind {
                ItemKind::Ward => "ward",
                ItemKind::Weapon => "weapon",
            },
            id: instance.to_string(),
        })?;
        match kind {
            ItemKind::Ward => {
                self.wards.remove(index);
            }
            ItemKind::Weapon => {
                self.weapons.remove(index);
            }
        }
        Ok(())
    }

    /// Owned wards in acquisition order.
    pub fn wards(&self) -> &[OwnedWard] {
        &self.wards
    }

    /// Owned weapons in acquisition order.
    pub fn weapons(&self) -> &[OwnedWeapon] {
        &self.weapons
    }

    /// Whether at least one ward is owned.
    pub fn has_ward(&self) -> bool {
        !self.wards.is_empty()
    }

    /// Whether at least one weapon is owned.
    pub fn has_weapon(&self) -> bool {
        !self.weapons.is_empty()
    }

    /// Sum of owned ward power levels.
    pub fn ward_power(&self) -> u32 {
        self.wards.iter().map(|w| w.template.power_level).sum()
    }

    /// Sum of owned weapon power levels.
    pub fn weapon_power(&self) -> u32 {
        self.weapons.iter().map(|w| w.template.power_level).sum()
    }

    /// Readiness score in `[0, 100]` for an inquisitor with this inventory
    /// and the given knowledge.
    pub fn readiness_score(&self, knowledge: u32) -> u32 {
        let power = (self.ward_power() + self.weapon_power()) * POWER_WEIGHT;
        let learning = (knowledge / 10) * KNOWLEDGE_STEP_POINTS;
        (power + learning).min(MAX_READINESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::CoreError;

    #[test]
    fn empty_inventory_scores_zero() {
        let inv = Inventory::new();
        assert_eq!(inv.readiness_score(0), 0);
        assert_eq!(inv.readiness_score(9), 0);
        assert_eq!(inv.readiness_score(10), 10);
        assert!(!inv.has_ward());
        assert!(!inv.has_weapon());
    }

    #[test]
    fn readiness_combines_power_and_knowledge() {
        let mut inv = Inventory::new();
        inv.acquire_ward("w3").unwrap(); // power 2
        inv.acquire_weapon("wep1").unwrap(); // power 1
        assert_eq!(inv.ward_power(), 2);
        assert_eq!(inv.weapon_power(), 1);
        assert_eq!(inv.readiness_score(25), 45 + 20);
    }

    #[test]
    fn readiness_caps_at_hundred() {
        let mut inv = Inventory::new();
        for id in ["w5", "w6"] {
            inv.acquire_ward(id).unwrap();
        }
        inv.acquire_weapon("wep6").unwrap();
        assert_eq!(inv.readiness_score(500), 100);
    }

    #[test]
    fn instance_ids_are_unique_per_acquisition() {
        let mut inv = Inventory::new();
        let a = inv.acquire(ItemKind::Ward, "w1").unwrap();
        let b = inv.acquire(ItemKind::Ward, "w1").unwrap();
        let c = inv.acquire(ItemKind::Weapon, "wep2").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(inv.wards().len(), 2);
    }

    #[test]
    fn release_removes_only_that_instance() {
        let mut inv = Inventory::new();
        let a = inv.acquire_ward("w1").unwrap();
        let b = inv.acquire_ward("w2").unwrap();
        inv.release(ItemKind::Ward, a).unwrap();
        assert_eq!(inv.wards().len(), 1);
        assert_eq!(inv.wards()[0].instance, b);
    }

    #[test]
    fn release_unknown_instance_is_not_found() {
        let mut inv = Inventory::new();
        let ward = inv.acquire_ward("w1").unwrap();
        let err = inv.release(ItemKind::Weapon, ward).unwrap_err();
        assert!(matches!(err, MechError::NotFound { kind: "weapon", .. }));
        assert_eq!(inv.wards().len(), 1);
    }

    #[test]
    fn unknown_catalog_id_is_rejected() {
        let mut inv = Inventory::new();
        let err = inv.acquire_weapon("wep99").unwrap_err();
        assert!(matches!(
            err,
            MechError::Core(CoreError::UnknownCatalogEntry { kind: "weapon", .. })
        ));
        assert!(!inv.has_weapon());
    }

    #[test]
    fn tiers() {
        assert_eq!(ReadinessTier::from_score(0), ReadinessTier::Unprepared);
        assert_eq!(ReadinessTier::from_score(29), ReadinessTier::Unprepared);
        assert_eq!(ReadinessTier::from_score(30), ReadinessTier::Developing);
        assert_eq!(ReadinessTier::from_score(60), ReadinessTier::Adequate);
        assert_eq!(ReadinessTier::from_score(84), ReadinessTier::Adequate);
        assert_eq!(ReadinessTier::from_score(85), ReadinessTier::WellPrepared);
        assert_eq!(ReadinessTier::WellPrepared.to_string(), "Well Prepared");
    }

    #[test]
    fn item_kind_parses() {
        assert_eq!("Ward".parse::<ItemKind>().unwrap(), ItemKind::Ward);
        assert_eq!("weapons".parse::<ItemKind>().unwrap(), ItemKind::Weapon);
        assert!("shield".parse::<ItemKind>().is_err());
    }

    #[test]
    fn owned_items_serialize_flat() {
        let mut inv = Inventory::new();
        inv.acquire_weapon("wep2").unwrap();
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["weapons"][0]["instance"], 1);
        assert_eq!(json["weapons"][0]["name"], "Silver Dagger");
        assert!(json.get("next_instance").is_none());
    }
}
