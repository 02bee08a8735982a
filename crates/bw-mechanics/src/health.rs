//! Clamped health pools.

use serde::{Deserialize, Serialize};

/// A health value that always stays within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Health(u32);

impl Health {
    /// Upper bound of every pool.
    pub const MAX: u32 = 100;

    /// A pool at the given value, clamped to the maximum.
    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    /// A full pool.
    pub fn full() -> Self {
        Self(Self::MAX)
    }

    /// Current value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Subtract damage, stopping at zero. Returns the new value.
    pub fn take(&mut self, damage: u32) -> u32 {
        self.0 = self.0.saturating_sub(damage);
        self.0
    }

    /// Whether the pool has reached zero.
    pub fn is_depleted(self) -> bool {
        self.0 == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_max() {
        assert_eq!(Health::new(250).value(), 100);
        assert_eq!(Health::new(40).value(), 40);
        assert_eq!(Health::default(), Health::full());
    }

    #[test]
    fn take_stops_at_zero() {
        let mut h = Health::new(15);
        assert_eq!(h.take(10), 5);
        assert!(!h.is_depleted());
        assert_eq!(h.take(24), 0);
        assert!(h.is_depleted());
    }

    #[test]
    fn display() {
        assert_eq!(Health::new(73).to_string(), "73/100");
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&Health::new(12)).unwrap(), "12");
    }
}
