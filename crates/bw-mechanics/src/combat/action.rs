//! The combat action catalog.

use std::fmt;
use std::str::FromStr;

use bw_core::Die;
use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// How dangerous an action is, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Little to lose.
    Low,
    /// A fair gamble.
    Medium,
    /// Desperate.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// An action the inquisitor can take during combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombatActionKind {
    /// Brace and look for an opening.
    DefensiveStance,
    /// A measured attack.
    CarefulStrike,
    /// An all-out attack.
    PowerfulBlow,
    /// Call on what has been learned about the beast.
    RitualInvocation,
    /// Unleash a carried ward.
    ActivateWard,
    /// Try to escape.
    Retreat,
}

/// Catalog data for one combat action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatActionProfile {
    /// Which action this describes.
    pub kind: CombatActionKind,
    /// Catalog id (`1`..`6`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor text.
    pub description: &'static str,
    /// Die rolled to resolve the action.
    pub die: Die,
    /// Minimum roll for success.
    pub difficulty: u32,
    /// Listed cost.
    pub cost: u32,
    /// Base damage on success.
    pub reward: u32,
    /// Risk label.
    pub risk: RiskLevel,
}

/// Every combat action, in catalog order.
pub static COMBAT_ACTIONS: [CombatActionProfile; 6] = [
    CombatActionProfile {
        kind: CombatActionKind::DefensiveStance,
        id: "1",
        name: "Defensive Stance",
        description: "Raise your guard and wait for an opening.",
        die: Die::D6,
        difficulty: 2,
        cost: 0,
        reward: 5,
        risk: RiskLevel::Low,
    },
    CombatActionProfile {
        kind: CombatActionKind::CarefulStrike,
        id: "2",
        name: "Careful Strike",
        description: "A measured attack aimed at a weak point.",
        die: Die::D8,
        difficulty: 4,
        cost: 5,
        reward: 15,
        risk: RiskLevel::Medium,
    },
    CombatActionProfile {
        kind: CombatActionKind::PowerfulBlow,
        id: "3",
        name: "Powerful Blow",
        description: "Put everything into one crushing strike.",
        die: Die::D12,
        difficulty: 7,
        cost: 10,
        reward: 30,
        risk: RiskLevel::High,
    },
    CombatActionProfile {
        kind: CombatActionKind::RitualInvocation,
        id: "4",
        name: "Ritual Invocation",
        description: "Speak the rites gathered in your codex. Knowledge strengthens the effect.",
        die: Die::D20,
        difficulty: 10,
        cost: 0,
        reward: 40,
        risk: RiskLevel::High,
    },
    CombatActionProfile {
        kind: CombatActionKind::ActivateWard,
        id: "5",
        name: "Activate Ward",
        description: "Turn a carried ward against the Beast.",
        die: Die::D8,
        difficulty: 4,
        cost: 0,
        reward: 20,
        risk: RiskLevel::Medium,
    },
    CombatActionProfile {
        kind: CombatActionKind::Retreat,
        id: "6",
        name: "Retreat",
        description: "Break away and live to hunt another day.",
        die: Die::D10,
        difficulty: 5,
        cost: 0,
        reward: 0,
        risk: RiskLevel::Low,
    },
];

impl CombatActionKind {
    /// All actions in catalog order.
    pub const ALL: [CombatActionKind; 6] = [
        Self::DefensiveStance,
        Self::CarefulStrike,
        Self::PowerfulBlow,
        Self::RitualInvocation,
        Self::ActivateWard,
        Self::Retreat,
    ];

    fn index(self) -> usize {
        match self {
            Self::DefensiveStance => 0,
            Self::CarefulStrike => 1,
            Self::PowerfulBlow => 2,
            Self::RitualInvocation => 3,
            Self::ActivateWard => 4,
            Self::Retreat => 5,
        }
    }

    /// Catalog data for this action.
    pub fn profile(self) -> &'static CombatActionProfile {
        &COMBAT_ACTIONS[self.index()]
    }

    /// Kebab-case name accepted by the parser.
    pub fn slug(self) -> &'static str {
        match self {
            Self::DefensiveStance => "defensive-stance",
            Self::CarefulStrike => "careful-strike",
            Self::PowerfulBlow => "powerful-blow",
            Self::RitualInvocation => "ritual-invocation",
            Self::ActivateWard => "activate-ward",
            Self::Retreat => "retreat",
        }
    }

    /// Whether the action can only be taken with a weapon in hand.
    pub fn requires_weapon(self) -> bool {
        !matches!(
            self,
            Self::RitualInvocation | Self::ActivateWard | Self::Retreat
        )
    }
}

impl fmt::Display for CombatActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile().name)
    }
}

impl FromStr for CombatActionKind {
    type Err = MechError;

    /// Accepts a catalog id ("2"), a slug ("careful-strike"), or a display
    /// name ("Careful Strike").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.profile().id == wanted || kind.slug() == wanted)
            .ok_or_else(|| MechError::UnknownCombatAction(s.trim().to_string()))
    }
}
