//! Where the beast goes at the end of each day, and what the inquisitor
//! learns about it.

use bw_core::{CoreResult, Direction, LocationGraph, LocationId, RandomSource};
use serde::Serialize;

/// Sightings closer than this count as a high threat.
const HIGH_THREAT_DISTANCE: u32 = 2;
/// Number of neighbors listed as likely next locations.
const PREDICTIONS: usize = 3;

/// One nightly relocation of the beast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementRecord {
    /// The day that begins with the beast here.
    pub day: u32,
    /// Where the beast went.
    pub location: LocationId,
    /// Rough distance from the inquisitor at the time.
    pub distance: u32,
    /// Direction the sighting came from.
    pub direction: Direction,
}

/// How close the beast was last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    /// Same location as the inquisitor.
    Critical,
    /// A short walk away.
    High,
    /// Further off.
    Moderate,
}

impl ThreatLevel {
    /// Classify a sighting distance.
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 => Self::Critical,
            d if d <= HIGH_THREAT_DISTANCE => Self::High,
            _ => Self::Moderate,
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Moderate => write!(f, "MODERATE"),
        }
    }
}

/// The beast tracker shown alongside the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tracker {
    /// Most recent sighting, if the beast has moved yet.
    pub last_sighting: Option<MovementRecord>,
    /// Threat of the most recent sighting.
    pub threat: Option<ThreatLevel>,
    /// Where the beast is likely to go next.
    pub predicted: Vec<LocationId>,
}

impl Tracker {
    /// Build the tracker from the movement history and the beast's position.
    pub fn new(graph: &LocationGraph, history: &[MovementRecord], beast: LocationId) -> Self {
        let last_sighting = history.last().copied();
        Self {
            last_sighting,
            threat: last_sighting.map(|m| ThreatLevel::from_distance(m.distance)),
            predicted: predict(graph, beast),
        }
    }
}

/// Likely next locations: the first few neighbors of the beast's node.
pub fn predict(graph: &LocationGraph, beast: LocationId) -> Vec<LocationId> {
    graph.neighbors(beast).iter().copied().take(PREDICTIONS).collect()
}

/// Rough distance between two nodes: 0 when equal, 1 when adjacent, and a
/// random 2 to 4 otherwise.
pub fn sighting_distance(
    graph: &LocationGraph,
    from: LocationId,
    to: LocationId,
    rng: &mut RandomSource,
) -> u32 {
    if from == to {
        0
    } else if graph.are_adjacent(from, to) {
        1
    } else {
        rng.random_int(2, 4)
    }
}

/// Move the beast for the night.
///
/// A d8 decides the pattern: 1-3 wander to a neighbor, 4-6 jump anywhere on
/// the map, 7-8 go straight for the inquisitor. Draws happen in a fixed
/// order: the d8, the destination pick (if any), the distance (if not
/// adjacent), then the direction.
pub fn relocate_beast(
    graph: &LocationGraph,
    beast: LocationId,
    inquisitor: LocationId,
    day: u32,
    rng: &mut RandomSource,
) -> CoreResult<MovementRecord> {
    let pattern = rng.roll_dice(8);
    let location = match pattern {
        1..=3 => match graph.neighbors(beast) {
            [] => LocationId::RoyalExchange,
            neighbors => *rng.random_choice(neighbors)?,
        },
        4..=6 => *rng.random_choice(&LocationId::ALL)?,
        _ => inquisitor,
    };
    let distance = sighting_distance(graph, location, inquisitor, rng);
    let direction = *rng.random_choice(&Direction::ALL)?;

    tracing::debug!(
        pattern,
        from = %beast,
        to = %location,
        distance,
        %direction,
        "beast relocated"
    );

    Ok(MovementRecord {
        day,
        location,
        distance,
        direction,
    })
}
