//! Configuration for a game session.

use bw_core::LocationId;
use bw_mechanics::VerificationPolicy;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed. `None` draws one from OS entropy when the session starts.
    pub seed: Option<u64>,
    /// Actions granted at the start of each day (at least 1).
    pub actions_per_day: u32,
    /// Where the inquisitor begins.
    pub starting_location: LocationId,
    /// Odds and rewards of rumor verification.
    pub verification: VerificationPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            actions_per_day: 2,
            starting_location: LocationId::RoyalExchange,
            verification: VerificationPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of actions per day (minimum 1).
    pub fn with_actions_per_day(mut self, actions: u32) -> Self {
        self.actions_per_day = actions.max(1);
        self
    }

    /// Set the inquisitor's starting location.
    pub fn with_starting_location(mut self, location: LocationId) -> Self {
        self.starting_location = location;
        self
    }

    /// Set the verification policy.
    pub fn with_verification(mut self, policy: VerificationPolicy) -> Self {
        self.verification = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.actions_per_day, 2);
        assert_eq!(cfg.starting_location, LocationId::RoyalExchange);
        assert_eq!(cfg.verification.knowledge_per_secret, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(42)
            .with_actions_per_day(3)
            .with_starting_location(LocationId::LondonBridge);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.actions_per_day, 3);
        assert_eq!(cfg.starting_location, LocationId::LondonBridge);
    }

    #[test]
    fn actions_per_day_has_floor() {
        assert_eq!(GameConfig::default().with_actions_per_day(0).actions_per_day, 1);
    }
}
