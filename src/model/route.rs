//! Route — an ordered sequence of station stops.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A simple route through the network: ordered stop ids from start to
/// end with no repeated station. Always holds at least one stop; a
/// single-stop route is the degenerate start-equals-end case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Stops along the route. One more element than the route has segments.
    pub stops: Vec<NodeId>,
}

impl Route {
    pub fn new(stops: Vec<NodeId>) -> Self {
        debug_assert!(!stops.is_empty(), "a route has at least one stop");
        Self { stops }
    }

    pub fn single(stop: NodeId) -> Self {
        Self { stops: vec![stop] }
    }

    /// Number of segments traversed (stops minus one).
    pub fn segment_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn start(&self) -> NodeId {
        *self.stops.first().expect("route always has at least one stop")
    }

    pub fn end(&self) -> NodeId {
        *self.stops.last().expect("route always has at least one stop")
    }

    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    /// Consecutive `(from, to)` stop pairs, one per segment.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
