//! # roadnet — Directed Road-Network Route Finding
//!
//! An embeddable model of a small directed, weighted road network that
//! answers "what are all routes between two stations, and which is most
//! convenient?"
//!
//! ## Design Principles
//!
//! 1. **Arena-owned graph**: stations and segments live in flat tables,
//!    referenced by stable ids — no pointers, no ownership cycles
//! 2. **Exhaustive, not optimal**: every simple route is enumerated;
//!    the convenience score is a sum of reciprocals over three
//!    independent segment attributes, which rules out relaxation-based
//!    shortest-path algorithms
//! 3. **Immutable after build**: the store is append-only and all reads
//!    during search and scoring are pure lookups
//! 4. **Collaborators stay thin**: construction, randomization,
//!    rendering, and export wrap the core without adding semantics
//!
//! ## Quick Start
//!
//! ```rust
//! use roadnet::{NodeId, RoadGraph, RoutePlanner, SegmentAttrs, StationKind};
//!
//! fn example() -> roadnet::Result<()> {
//!     let mut graph = RoadGraph::new();
//!     graph.add_station(NodeId(1), StationKind::TaxiStand)?;
//!     graph.add_station(NodeId(2), StationKind::AutoStand)?;
//!     graph.add_segment(NodeId(1), NodeId(2), SegmentAttrs::new(4, 2, 0))?;
//!
//!     let planner = RoutePlanner::new(graph);
//!     if let Some(best) = planner.best_route(NodeId(1), NodeId(2))? {
//!         println!(
//!             "{} (score {:.2})",
//!             roadnet::render::format_route(&best.route),
//!             best.score,
//!         );
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod builder;
pub mod export;
pub mod model;
pub mod render;
pub mod score;
pub mod search;
pub mod select;
pub mod store;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{NodeId, Route, Segment, SegmentAttrs, Station, StationKind};
pub use score::convenience_score;
pub use search::{SearchLimits, all_simple_routes, all_simple_routes_bounded};
pub use select::{ScoredRoute, most_convenient};
pub use store::RoadGraph;

// ============================================================================
// Top-level planner handle
// ============================================================================

/// Convenience facade over a built graph: enumerate and select in one
/// call. The graph is taken by value and never mutated afterwards.
pub struct RoutePlanner {
    graph: RoadGraph,
}

impl RoutePlanner {
    pub fn new(graph: RoadGraph) -> Self {
        Self { graph }
    }

    /// Every simple route from `start` to `end`, in discovery order.
    pub fn routes(&self, start: NodeId, end: NodeId) -> Result<Vec<Route>> {
        search::all_simple_routes(&self.graph, start, end)
    }

    /// Same as [`RoutePlanner::routes`] under the given caps.
    pub fn routes_bounded(
        &self,
        start: NodeId,
        end: NodeId,
        limits: SearchLimits,
    ) -> Result<Vec<Route>> {
        search::all_simple_routes_bounded(&self.graph, start, end, limits)
    }

    /// Enumerate and pick the most convenient route. `None` when no
    /// route exists.
    pub fn best_route(&self, start: NodeId, end: NodeId) -> Result<Option<ScoredRoute>> {
        let routes = self.routes(start, end)?;
        select::most_convenient(&self.graph, &routes)
    }

    /// Access the underlying graph (for rendering, export, direct reads).
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown station {0}")]
    UnknownStation(NodeId),

    #[error("station {0} already exists")]
    DuplicateStation(NodeId),

    #[error("segment {from} -> {to} already exists")]
    DuplicateSegment { from: NodeId, to: NodeId },

    #[error("route step {from} -> {to} has no backing segment")]
    BrokenRoute { from: NodeId, to: NodeId },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
