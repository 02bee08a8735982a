//! Seeded random source and dice.
//!
//! Every randomized decision a session makes goes through its own
//! [`RandomSource`]. With a fixed seed the whole output sequence is a pure
//! function of the seed and the number of prior draws, so two sessions with
//! the same seed replay identically no matter how their calls interleave.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::Custom(n) => n,
        }
    }

    /// Parse a die from a string like "d8" or "D20".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "d4" => Some(Self::D4),
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            "d20" => Some(Self::D20),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if num >= 2 {
                    Some(Self::Custom(num))
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A per-session deterministic random generator.
///
/// Never share one instance between sessions; cloning produces an
/// independent generator positioned at the same draw.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    draws: u64,
    rng: StdRng,
}

impl RandomSource {
    /// Create a source from an optional seed.
    ///
    /// Without a seed, one is drawn from OS entropy once; from then on the
    /// source behaves exactly as if that seed had been supplied.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Create a fully deterministic source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the thread-local entropy generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// The seed this source was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of calls made so far (the RNG cursor).
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Roll a die with `sides` faces, returning a value in `[1, sides]`.
    ///
    /// A zero-sided die is treated as a one-sided die.
    pub fn roll_dice(&mut self, sides: u32) -> u32 {
        self.draws += 1;
        self.rng.random_range(1..=sides.max(1))
    }

    /// Roll a typed die.
    pub fn roll(&mut self, die: Die) -> u32 {
        self.roll_dice(die.sides())
    }

    /// A value in `[lo, hi]` inclusive. Reversed bounds are swapped.
    pub fn random_int(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.draws += 1;
        self.rng.random_range(lo..=hi)
    }

    /// Pick one element uniformly.
    pub fn random_choice<'a, T>(&mut self, items: &'a [T]) -> CoreResult<&'a T> {
        if items.is_empty() {
            tracing::error!("random_choice called with an empty slice");
            return Err(CoreError::EmptyInput("random_choice"));
        }
        self.draws += 1;
        let index = self.rng.random_range(0..items.len());
        Ok(&items[index])
    }

    /// Pick one element with probability proportional to its weight.
    pub fn weighted_choice<'a, T>(&mut self, items: &'a [(T, u32)]) -> CoreResult<&'a T> {
        let total: u32 = items.iter().map(|(_, w)| *w).sum();
        if total == 0 {
            tracing::error!(
                entries = items.len(),
                "weighted_choice called with no positive weight"
            );
            return Err(CoreError::EmptyInput("weighted_choice"));
        }
        self.draws += 1;
        let mut ticket = self.rng.random_range(0..total);
        for (item, weight) in items {
            if ticket < *weight {
                return Ok(item);
            }
            ticket -= weight;
        }
        Err(CoreError::EmptyInput("weighted_choice"))
    }
}
