//! In-memory road network store.
//!
//! This is the single owner of all stations and segments. Stations live
//! in a flat arena in insertion order; a side map resolves ids to arena
//! slots. Segments are stored inline under their source station and
//! reference destinations by `NodeId`, so there are no pointers and no
//! ownership cycles.
//!
//! The store is append-only: no removal or mutation once a station or
//! segment is inserted. Every mutating operation validates before it
//! touches the arena, so a failed insert leaves the graph exactly as it
//! was.

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{NodeId, Segment, SegmentAttrs, Station, StationKind};
use crate::{Error, Result};

/// Append-only directed road network.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    /// Station arena, in insertion order.
    stations: Vec<Station>,
    /// id → arena slot.
    slots: HashMap<NodeId, usize>,
    segment_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station with no outgoing segments.
    ///
    /// Fails with [`Error::DuplicateStation`] if the id is already taken.
    pub fn add_station(&mut self, id: NodeId, kind: StationKind) -> Result<()> {
        if self.slots.contains_key(&id) {
            return Err(Error::DuplicateStation(id));
        }
        self.slots.insert(id, self.stations.len());
        self.stations.push(Station::new(id, kind));
        debug!(%id, %kind, "station added");
        Ok(())
    }

    /// Append a directed segment to `from`'s outgoing list.
    ///
    /// Fails with [`Error::UnknownStation`] if either endpoint is absent
    /// and [`Error::DuplicateSegment`] if a `from → to` segment already
    /// exists; parallel segments between the same ordered pair would make
    /// score lookups ambiguous, so they are rejected outright. Outgoing
    /// insertion order is preserved — it defines traversal order.
    pub fn add_segment(&mut self, from: NodeId, to: NodeId, attrs: SegmentAttrs) -> Result<()> {
        let from_slot = self.slot(from)?;
        self.slot(to)?;
        if self.stations[from_slot].segment_to(to).is_some() {
            return Err(Error::DuplicateSegment { from, to });
        }
        self.stations[from_slot].outgoing.push(Segment::new(to, attrs));
        self.segment_count += 1;
        debug!(%from, %to, "segment added");
        Ok(())
    }

    /// Ordered outgoing segments of a station.
    pub fn outgoing(&self, id: NodeId) -> Result<&[Segment]> {
        let slot = self.slot(id)?;
        Ok(&self.stations[slot].outgoing)
    }

    /// Category of a station.
    pub fn station_kind(&self, id: NodeId) -> Result<StationKind> {
        let slot = self.slot(id)?;
        Ok(self.stations[slot].kind)
    }

    pub fn station(&self, id: NodeId) -> Result<&Station> {
        let slot = self.slot(id)?;
        Ok(&self.stations[slot])
    }

    /// The `from → to` segment, if both the source station and such a
    /// segment exist.
    pub fn segment_between(&self, from: NodeId, to: NodeId) -> Option<&Segment> {
        let slot = *self.slots.get(&from)?;
        self.stations[slot].segment_to(to)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Station ids in insertion order.
    pub fn station_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.stations.iter().map(|s| s.id)
    }

    /// Stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    fn slot(&self, id: NodeId) -> Result<usize> {
        self.slots.get(&id).copied().ok_or(Error::UnknownStation(id))
    }
}

// ============================================================================
// Tests
// ============================================================================
