//! Segment (directed road) in the network.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Per-segment attributes. All three are independent and non-negative
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentAttrs {
    pub distance: u32,
    pub traffic: u32,
    pub red_lights: u32,
}

impl SegmentAttrs {
    pub fn new(distance: u32, traffic: u32, red_lights: u32) -> Self {
        Self {
            distance,
            traffic,
            red_lights,
        }
    }
}

/// A directed segment. Stored under its source station in the graph
/// arena; the destination is referenced by stable id, never by pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub to: NodeId,
    pub attrs: SegmentAttrs,
}

impl Segment {
    pub fn new(to: NodeId, attrs: SegmentAttrs) -> Self {
        Self { to, attrs }
    }
}
