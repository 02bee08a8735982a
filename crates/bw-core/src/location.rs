//! The fixed graph of eight London locations.
//!
//! The graph is undirected, connected, and never mutated. It is built once
//! per process and shared by every session.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a node in the location graph, serialized as its roman code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationId {
    /// I: The Royal Exchange.
    #[serde(rename = "I")]
    RoyalExchange,
    /// II: All-Hallows-The-Great.
    #[serde(rename = "II")]
    AllHallows,
    /// III: Billingsgate Dock.
    #[serde(rename = "III")]
    Billingsgate,
    /// IV: London Bridge.
    #[serde(rename = "IV")]
    LondonBridge,
    /// V: St. Thomas' Hospital.
    #[serde(rename = "V")]
    StThomas,
    /// VI: Coxes Wharf.
    #[serde(rename = "VI")]
    CoxesWharf,
    /// VII: Marshalsea Prison.
    #[serde(rename = "VII")]
    Marshalsea,
    /// VIII: Burying Ground.
    #[serde(rename = "VIII")]
    BuryingGround,
}

impl LocationId {
    /// Every node, in map order.
    pub const ALL: [LocationId; 8] = [
        Self::RoyalExchange,
        Self::AllHallows,
        Self::Billingsgate,
        Self::LondonBridge,
        Self::StThomas,
        Self::CoxesWharf,
        Self::Marshalsea,
        Self::BuryingGround,
    ];

    /// The roman numeral shown on the map.
    pub fn code(self) -> &'static str {
        match self {
            Self::RoyalExchange => "I",
            Self::AllHallows => "II",
            Self::Billingsgate => "III",
            Self::LondonBridge => "IV",
            Self::StThomas => "V",
            Self::CoxesWharf => "VI",
            Self::Marshalsea => "VII",
            Self::BuryingGround => "VIII",
        }
    }

    /// Kebab-case slug accepted as an alternative to the code.
    pub fn slug(self) -> &'static str {
        match self {
            Self::RoyalExchange => "royal-exchange",
            Self::AllHallows => "all-hallows",
            Self::Billingsgate => "billingsgate",
            Self::LondonBridge => "london-bridge",
            Self::StThomas => "st-thomas",
            Self::CoxesWharf => "coxes-wharf",
            Self::Marshalsea => "marshalsea",
            Self::BuryingGround => "burying-ground",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LocationId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.code().eq_ignore_ascii_case(wanted) || id.slug() == wanted.to_lowercase())
            .ok_or_else(|| CoreError::UnknownLocation(wanted.to_string()))
    }
}

/// The eight compass directions. Purely cosmetic flavor for beast sightings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
}

impl Direction {
    /// All directions, in the order the sighting roll indexes them.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Northwest => "Northwest",
            Self::Southeast => "Southeast",
            Self::Southwest => "Southwest",
        };
        write!(f, "{name}")
    }
}

/// A node of the graph with its display data.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    /// Node identifier.
    pub id: LocationId,
    /// Display name.
    pub name: &'static str,
    /// Map x coordinate (0-100).
    pub x: u32,
    /// Map y coordinate (0-100).
    pub y: u32,
}

/// Serializable view of the whole graph: nodes plus adjacency table.
#[derive(Debug, Clone, Serialize)]
pub struct LocationsView {
    /// All nodes in map order.
    pub locations: Vec<Location>,
    /// Neighbors of each node.
    pub connections: BTreeMap<LocationId, Vec<LocationId>>,
}

/// The static undirected location graph.
#[derive(Debug)]
pub struct LocationGraph {
    locations: Vec<Location>,
    adjacency: BTreeMap<LocationId, Vec<LocationId>>,
}

static LONDON: LazyLock<LocationGraph> = LazyLock::new(LocationGraph::build_london);

impl LocationGraph {
    /// The shared map of 1746 London.
    pub fn london() -> &'static LocationGraph {
        &LONDON
    }

    fn build_london() -> Self {
        use LocationId::*;

        let locations = vec![
            Location { id: RoyalExchange, name: "The Royal Exchange", x: 50, y: 20 },
            Location { id: AllHallows, name: "All-Hallows-The-Great", x: 30, y: 40 },
            Location { id: Billingsgate, name: "Billingsgate Dock", x: 70, y: 35 },
            Location { id: LondonBridge, name: "London Bridge", x: 60, y: 55 },
            Location { id: StThomas, name: "St. Thomas' Hospital", x: 40, y: 65 },
            Location { id: CoxesWharf, name: "Coxes Wharf", x: 75, y: 70 },
            Location { id: Marshalsea, name: "Marshalsea Prison", x: 35, y: 85 },
            Location { id: BuryingGround, name: "Burying Ground", x: 55, y: 90 },
        ];

        let adjacency = BTreeMap::from([
            (RoyalExchange, vec![AllHallows, Billingsgate]),
            (AllHallows, vec![RoyalExchange, LondonBridge, StThomas]),
            (Billingsgate, vec![RoyalExchange, LondonBridge]),
            (LondonBridge, vec![AllHallows, Billingsgate, StThomas, CoxesWharf]),
            (StThomas, vec![AllHallows, LondonBridge, Marshalsea, BuryingGround]),
            (CoxesWharf, vec![LondonBridge, BuryingGround]),
            (Marshalsea, vec![StThomas, BuryingGround]),
            (BuryingGround, vec![StThomas, CoxesWharf, Marshalsea]),
        ]);

        Self { locations, adjacency }
    }

    /// All nodes in map order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Display data for one node.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// Nodes reachable from `id` in one step.
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `b` is reachable from `a` in one step.
    pub fn are_adjacent(&self, a: LocationId, b: LocationId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Whether every node can reach every other node.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.locations.first().map(|l| l.id) else {
            return true;
        };
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in self.neighbors(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        visited.len() == self.locations.len()
    }

    /// Serializable copy of the graph.
    pub fn view(&self) -> LocationsView {
        LocationsView {
            locations: self.locations.clone(),
            connections: self.adjacency.clone(),
        }
    }
}
