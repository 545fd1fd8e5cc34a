//! Graph construction collaborators.
//!
//! The store only ever sees validated inserts; everything here is the
//! thin layer that feeds it: literal layouts, an injectable segment
//! attribute generator (no global RNG state), and the seven-station demo
//! city the interactive binary runs on.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::{NodeId, SegmentAttrs, StationKind};
use crate::store::RoadGraph;

// ============================================================================
// Attribute generation capability
// ============================================================================

/// Source of segment attributes for generated networks.
///
/// Injected into builders so randomness stays a capability, not global
/// state; tests pass [`FixedAttrs`] and stay deterministic.
pub trait AttrSource {
    fn next_attrs(&mut self) -> SegmentAttrs;
}

/// Randomized attributes in the demo ranges: distance 3..=10,
/// traffic 2..=8, red lights 0..=4.
pub struct RandomAttrs<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomAttrs<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AttrSource for RandomAttrs<R> {
    fn next_attrs(&mut self) -> SegmentAttrs {
        SegmentAttrs::new(
            self.rng.gen_range(3..=10),
            self.rng.gen_range(2..=8),
            self.rng.gen_range(0..=4),
        )
    }
}

/// The same attributes for every segment. Deterministic; for tests and
/// reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedAttrs(pub SegmentAttrs);

impl AttrSource for FixedAttrs {
    fn next_attrs(&mut self) -> SegmentAttrs {
        self.0
    }
}

// ============================================================================
// Literal layouts
// ============================================================================

/// A declarative network description: station and segment tuple lists.
///
/// `build` replays the lists through the store operations, so all store
/// validation (unknown endpoints, duplicates) applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkLayout {
    pub stations: Vec<(NodeId, StationKind)>,
    pub segments: Vec<(NodeId, NodeId, SegmentAttrs)>,
}

impl NetworkLayout {
    pub fn build(&self) -> Result<RoadGraph> {
        let mut graph = RoadGraph::new();
        for &(id, kind) in &self.stations {
            graph.add_station(id, kind)?;
        }
        for &(from, to, attrs) in &self.segments {
            graph.add_segment(from, to, attrs)?;
        }
        Ok(graph)
    }
}

// ============================================================================
// Demo city
// ============================================================================

/// Round-robin category assignment: ids divisible by three are bus
/// stops, then taxi stands, then auto stands.
pub fn kind_for(id: NodeId) -> StationKind {
    match id.0 % 3 {
        0 => StationKind::BusStop,
        1 => StationKind::TaxiStand,
        _ => StationKind::AutoStand,
    }
}

/// Number of stations in the demo city.
pub const DEMO_STATIONS: u32 = 7;

/// The demo city's fixed topology: nineteen directed links.
const DEMO_LINKS: [(u32, u32); 19] = [
    (1, 2),
    (2, 1),
    (1, 5),
    (2, 5),
    (2, 4),
    (3, 4),
    (3, 6),
    (4, 3),
    (4, 6),
    (5, 2),
    (5, 3),
    (6, 5),
    (6, 4),
    (6, 7),
    (5, 7),
    (3, 7),
    (7, 4),
    (7, 6),
    (2, 7),
];

/// Build the seven-station demo city with attributes drawn from `attrs`.
pub fn demo_city(attrs: &mut dyn AttrSource) -> Result<RoadGraph> {
    let mut graph = RoadGraph::new();
    for id in 1..=DEMO_STATIONS {
        let id = NodeId(id);
        graph.add_station(id, kind_for(id))?;
    }
    for (from, to) in DEMO_LINKS {
        graph.add_segment(NodeId(from), NodeId(to), attrs.next_attrs())?;
    }
    Ok(graph)
}

// ============================================================================
// Tests
// ============================================================================
