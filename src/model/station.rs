//! Station (intersection) in the road network.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Segment;

/// Opaque station identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    BusStop,
    TaxiStand,
    AutoStand,
}

impl StationKind {
    /// Human-readable label, e.g. `"Bus Stop"`.
    pub fn label(self) -> &'static str {
        match self {
            StationKind::BusStop => "Bus Stop",
            StationKind::TaxiStand => "Taxi Stand",
            StationKind::AutoStand => "Auto Stand",
        }
    }

    /// One-letter code used in the adjacency table.
    pub fn code(self) -> char {
        match self {
            StationKind::BusStop => 'B',
            StationKind::TaxiStand => 'T',
            StationKind::AutoStand => 'A',
        }
    }
}

impl std::fmt::Display for StationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A station in the road network.
///
/// Owns its ordered list of outgoing segments. Immutable once the graph
/// is built; outgoing order is the order segments were inserted, which
/// later defines deterministic traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: NodeId,
    pub kind: StationKind,
    pub outgoing: SmallVec<[Segment; 4]>,
}

impl Station {
    pub fn new(id: NodeId, kind: StationKind) -> Self {
        Self {
            id,
            kind,
            outgoing: SmallVec::new(),
        }
    }

    /// Outgoing segment toward `to`, if one exists.
    pub fn segment_to(&self, to: NodeId) -> Option<&Segment> {
        self.outgoing.iter().find(|s| s.to == to)
    }
}
