//! Combat between the inquisitor and the beast.
//!
//! A fight lasts from a successful hunt until one side falls or the
//! inquisitor escapes. Each call to [`CombatState::resolve`] settles one
//! action: a roll against the action's difficulty, damage to the beast on a
//! hit, a counter-attack or a wound on the inquisitor, and a log line.

pub mod action;

pub use action::{COMBAT_ACTIONS, CombatActionKind, CombatActionProfile, RiskLevel};

use bw_core::RandomSource;
use serde::Serialize;

use crate::error::{MechError, MechResult};
use crate::health::Health;
use crate::inquisitor::Inquisitor;

/// Wound range taken on a failed action.
const WOUND_MIN: u32 = 10;
const WOUND_MAX: u32 = 24;
/// Flat bonus added to the beast's d8 counter-attack.
const COUNTER_BONUS: u32 = 5;

/// How a fight stands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    /// Both sides still stand.
    Continuing,
    /// The beast has fallen.
    Victory,
    /// The inquisitor has fallen.
    Defeat,
    /// The inquisitor escaped.
    Fled,
}

impl CombatOutcome {
    /// Whether the fight is over.
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

/// Everything that happened during one combat action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatResolution {
    /// The action taken.
    pub action: CombatActionKind,
    /// The die roll.
    pub roll: u32,
    /// The roll needed.
    pub difficulty: u32,
    /// Whether the roll met the difficulty.
    pub success: bool,
    /// Damage dealt to the beast.
    pub damage_dealt: u32,
    /// Damage taken by the inquisitor, counter-attack included.
    pub damage_taken: u32,
    /// The beast's counter-attack after a successful action, if any.
    pub counter_attack: Option<u32>,
    /// Where the fight stands now.
    pub outcome: CombatOutcome,
    /// The line appended to the combat log.
    pub message: String,
    /// Beast health afterwards.
    pub beast_health: Health,
    /// Inquisitor health afterwards.
    pub inquisitor_health: Health,
}

/// An ongoing fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatState {
    /// The beast's pool, full at the start of every fight.
    pub beast_health: Health,
    /// The inquisitor's pool, carried in from outside combat.
    pub inquisitor_health: Health,
    /// Number of actions resolved so far.
    pub round: u32,
    /// One line per resolved action.
    pub log: Vec<String>,
}

impl CombatState {
    /// Start a fight against a fresh beast.
    pub fn new(inquisitor_health: Health) -> Self {
        Self {
            beast_health: Health::full(),
            inquisitor_health,
            round: 0,
            log: Vec::new(),
        }
    }

    /// Resolve one action.
    ///
    /// A weapon action without a weapon is rejected before any roll, leaving
    /// both the fight and the random source untouched.
    pub fn resolve(
        &mut self,
        kind: CombatActionKind,
        hunter: &Inquisitor,
        rng: &mut RandomSource,
    ) -> MechResult<CombatResolution> {
        let profile = kind.profile();
        if kind.requires_weapon() && !hunter.inventory.has_weapon() {
            return Err(MechError::MissingWeapon(profile.name));
        }

        let roll = rng.roll(profile.die);
        let success = roll >= profile.difficulty;
        self.round += 1;

        let mut damage_dealt = 0;
        let mut damage_taken = 0;
        let mut counter_attack = None;
        let mut outcome = CombatOutcome::Continuing;
        let mut message;

        if success && kind == CombatActionKind::Retreat {
            outcome = CombatOutcome::Fled;
            message = format!("{}: Successfully fled from combat! (Rolled {roll})", profile.name);
        } else if success {
            damage_dealt = profile.reward + roll / 2;
            message = match kind {
                CombatActionKind::RitualInvocation => {
                    damage_dealt += hunter.knowledge / 10;
                    format!(
                        "{}: Critical success! (Rolled {roll}) Knowledge amplifies the effect, dealing {damage_dealt} damage.",
                        profile.name
                    )
                }
                CombatActionKind::ActivateWard if !hunter.inventory.has_ward() => {
                    damage_dealt = 0;
                    format!(
                        "{}: Rolled {roll}, but no wards are carried. Nothing happens.",
                        profile.name
                    )
                }
                CombatActionKind::ActivateWard => format!(
                    "{}: Success! (Rolled {roll}) The ward flares, dealing {damage_dealt} damage.",
                    profile.name
                ),
                _ => format!(
                    "{}: Hit! (Rolled {roll}) Dealt {damage_dealt} damage.",
                    profile.name
                ),
            };
            self.beast_health.take(damage_dealt);
            if self.beast_health.is_depleted() {
                outcome = CombatOutcome::Victory;
                message.push_str(" THE BEAST IS SLAIN!");
            } else {
                let counter = rng.roll_dice(8) + COUNTER_BONUS;
                counter_attack = Some(counter);
                damage_taken = counter;
                self.inquisitor_health.take(counter);
                message.push_str(&format!(" The Beast retaliates for {counter} damage."));
            }
        } else {
            damage_taken = rng.random_int(WOUND_MIN, WOUND_MAX);
            self.inquisitor_health.take(damage_taken);
            message = format!(
                "{}: Miss! (Rolled {roll}, needed {}) The Beast strikes back for {damage_taken} damage.",
                profile.name, profile.difficulty
            );
        }

        if outcome == CombatOutcome::Continuing && self.inquisitor_health.is_depleted() {
            outcome = CombatOutcome::Defeat;
            message.push_str(" YOU HAVE FALLEN!");
        }

        tracing::debug!(
            action = profile.name,
            roll,
            success,
            damage_dealt,
            damage_taken,
            ?outcome,
            "combat action resolved"
        );
        self.log.push(message.clone());

        Ok(CombatResolution {
            action: kind,
            roll,
            difficulty: profile.difficulty,
            success,
            damage_dealt,
            damage_taken,
            counter_attack,
            outcome,
            message,
            beast_health: self.beast_health,
            inquisitor_health: self.inquisitor_health,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::LocationId;
    use proptest::prelude::*;

    fn armed() -> Inquisitor {
        let mut inq = Inquisitor::new("Mercy", LocationId::RoyalExchange);
        inq.inventory.acquire_weapon("wep1").unwrap();
        inq
    }

    fn unarmed() -> Inquisitor {
        Inquisitor::new("Mercy", LocationId::RoyalExchange)
    }

    #[test]
    fn weapon_action_without_weapon_is_rejected_untouched() {
        let mut state = CombatState::new(Health::full());
        let mut rng = RandomSource::seeded(42);
        let err = state
            .resolve(CombatActionKind::CarefulStrike, &unarmed(), &mut rng)
            .unwrap_err();
        assert_eq!(err, MechError::MissingWeapon("Careful Strike"));
        assert_eq!(state, CombatState::new(Health::full()));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn exempt_actions_work_unarmed() {
        for kind in [
            CombatActionKind::RitualInvocation,
            CombatActionKind::ActivateWard,
            CombatActionKind::Retreat,
        ] {
            let mut state = CombatState::new(Health::full());
            let mut rng = RandomSource::seeded(3);
            assert!(state.resolve(kind, &unarmed(), &mut rng).is_ok());
            assert_eq!(state.log.len(), 1);
        }
    }

    #[test]
    fn resolution_follows_the_rules() {
        for seed in 0..300 {
            for kind in CombatActionKind::ALL {
                let hunter = armed();
                let mut state = CombatState::new(Health::full());
                let mut rng = RandomSource::seeded(seed);
                let r = state.resolve(kind, &hunter, &mut rng).unwrap();
                let profile = kind.profile();

                assert!(r.roll >= 1 && r.roll <= profile.die.sides());
                assert_eq!(r.success, r.roll >= profile.difficulty);

                if kind == CombatActionKind::Retreat && r.success {
                    assert_eq!(r.outcome, CombatOutcome::Fled);
                    assert_eq!(r.damage_dealt, 0);
                    assert_eq!(r.damage_taken, 0);
                    assert_eq!(rng.draws(), 1);
                } else if r.success {
                    let expected = match kind {
                        CombatActionKind::ActivateWard => 0,
                        _ => profile.reward + r.roll / 2,
                    };
                    assert_eq!(r.damage_dealt, expected);
                    let counter = r.counter_attack.unwrap();
                    assert!((6..=13).contains(&counter));
                    assert_eq!(r.damage_taken, counter);
                    assert_eq!(rng.draws(), 2);
                } else {
                    assert!((10..=24).contains(&r.damage_taken));
                    assert_eq!(r.damage_dealt, 0);
                    assert_eq!(r.counter_attack, None);
                    assert_eq!(rng.draws(), 2);
                }
                assert_eq!(r.beast_health.value(), 100 - r.damage_dealt);
                assert_eq!(r.inquisitor_health.value(), 100 - r.damage_taken);
                assert_eq!(state.log, vec![r.message.clone()]);
                assert_eq!(state.round, 1);
            }
        }
    }

    #[test]
    fn ritual_scales_with_knowledge() {
        for seed in 0..200 {
            let mut scholar = unarmed();
            scholar.learn(95);
            let mut state = CombatState::new(Health::full());
            let mut rng = RandomSource::seeded(seed);
            let r = state
                .resolve(CombatActionKind::RitualInvocation, &scholar, &mut rng)
                .unwrap();
            if r.success {
                assert_eq!(r.damage_dealt, 40 + r.roll / 2 + 9);
                return;
            }
        }
        panic!("no seed produced a successful ritual");
    }

    #[test]
    fn ward_with_ward_deals_damage() {
        let mut warded = unarmed();
        warded.inventory.acquire_ward("w2").unwrap();
        for seed in 0..200 {
            let mut state = CombatState::new(Health::full());
            let mut rng = RandomSource::seeded(seed);
            let r = state
                .resolve(CombatActionKind::ActivateWard, &warded, &mut rng)
                .unwrap();
            if r.success {
                assert_eq!(r.damage_dealt, 20 + r.roll / 2);
                return;
            }
        }
        panic!("no seed produced a successful ward activation");
    }

    #[test]
    fn weakened_beast_dies_without_counter() {
        let hunter = armed();
        for seed in 0..200 {
            let mut state = CombatState::new(Health::full());
            state.beast_health = Health::new(1);
            let mut rng = RandomSource::seeded(seed);
            let r = state
                .resolve(CombatActionKind::DefensiveStance, &hunter, &mut rng)
                .unwrap();
            if r.success {
                assert_eq!(r.outcome, CombatOutcome::Victory);
                assert_eq!(r.counter_attack, None);
                assert!(r.message.ends_with("THE BEAST IS SLAIN!"));
                return;
            }
        }
        panic!("no seed produced a successful stance");
    }

    #[test]
    fn wounded_inquisitor_falls() {
        let hunter = armed();
        let mut state = CombatState::new(Health::new(5));
        let mut rng = RandomSource::seeded(11);
        let r = state
            .resolve(CombatActionKind::PowerfulBlow, &hunter, &mut rng)
            .unwrap();
        if r.outcome != CombatOutcome::Victory {
            assert_eq!(r.outcome, CombatOutcome::Defeat);
            assert!(r.inquisitor_health.is_depleted());
            assert!(r.message.ends_with("YOU HAVE FALLEN!"));
        }
    }

    proptest! {
        #[test]
        fn health_stays_clamped(seed in any::<u64>(), picks in proptest::collection::vec(0usize..6, 1..40)) {
            let hunter = armed();
            let mut state = CombatState::new(Health::full());
            let mut rng = RandomSource::seeded(seed);
            for pick in picks {
                let r = state.resolve(CombatActionKind::ALL[pick], &hunter, &mut rng).unwrap();
                prop_assert!(r.beast_health.value() <= 100);
                prop_assert!(r.inquisitor_health.value() <= 100);
                if r.outcome.is_final() {
                    break;
                }
            }
        }

        #[test]
        fn same_seed_same_fight(seed in any::<u64>()) {
            let hunter = armed();
            let fight = || {
                let mut state = CombatState::new(Health::full());
                let mut rng = RandomSource::seeded(seed);
                for kind in CombatActionKind::ALL {
                    if state.resolve(kind, &hunter, &mut rng).unwrap().outcome.is_final() {
                        break;
                    }
                }
                state
            };
            prop_assert_eq!(fight(), fight());
        }
    }
}
