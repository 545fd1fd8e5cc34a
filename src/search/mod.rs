//! Exhaustive simple-route enumeration.
//!
//! Depth-first search that discovers **every** simple route between two
//! stations, not a single optimum. Scoring (see [`crate::score`]) is a
//! sum of reciprocals over three independent segment attributes — it is
//! not additive in a single weight, so relaxation-based shortest-path
//! algorithms do not apply and the full candidate set is enumerated
//! instead.
//!
//! Routes come back in DFS discovery order, which is a pure function of
//! segment insertion order. Worst case the number of simple routes is
//! factorial in the station count; callers exposing this beyond a small
//! bounded network should pass [`SearchLimits`].

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::model::{NodeId, Route};
use crate::store::RoadGraph;
use crate::{Error, Result};

/// Optional caps on the exhaustive search.
///
/// Both default to off, which matches a small bounded network. `max_routes`
/// stops the search once that many routes have been recorded; `max_depth`
/// prunes any route that would exceed that many segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_routes: Option<usize>,
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits {
        max_routes: None,
        max_depth: None,
    };
}

/// Enumerate every simple route from `start` to `end`, unbounded.
///
/// Fails with [`Error::UnknownStation`] if either id is absent. No route
/// between two known stations is not an error: the result is an empty
/// vector. `start == end` yields exactly one single-stop route.
pub fn all_simple_routes(graph: &RoadGraph, start: NodeId, end: NodeId) -> Result<Vec<Route>> {
    all_simple_routes_bounded(graph, start, end, SearchLimits::UNBOUNDED)
}

/// Enumerate simple routes from `start` to `end` under the given caps.
pub fn all_simple_routes_bounded(
    graph: &RoadGraph,
    start: NodeId,
    end: NodeId,
    limits: SearchLimits,
) -> Result<Vec<Route>> {
    if !graph.contains(start) {
        return Err(Error::UnknownStation(start));
    }
    if !graph.contains(end) {
        return Err(Error::UnknownStation(end));
    }

    let mut routes = Vec::new();
    let mut stops: Vec<NodeId> = Vec::new();
    let mut on_stack: HashSet<NodeId> = HashSet::new();
    visit(graph, start, end, limits, &mut stops, &mut on_stack, &mut routes)?;

    debug!(%start, %end, found = routes.len(), "route enumeration finished");
    Ok(routes)
}

/// One DFS step. Returns `Ok(false)` when the route cap has been hit and
/// the whole search should unwind.
fn visit(
    graph: &RoadGraph,
    node: NodeId,
    end: NodeId,
    limits: SearchLimits,
    stops: &mut Vec<NodeId>,
    on_stack: &mut HashSet<NodeId>,
    routes: &mut Vec<Route>,
) -> Result<bool> {
    stops.push(node);
    on_stack.insert(node);

    let mut keep_going = true;
    if node == end {
        // Record and backtrack; other routes may reach `end` through
        // different branches. A route never continues past its end stop.
        trace!(stops = ?stops, "route found");
        routes.push(Route::new(stops.clone()));
        if limits.max_routes.is_some_and(|cap| routes.len() >= cap) {
            keep_going = false;
        }
    } else if limits.max_depth.is_none_or(|cap| stops.len() <= cap) {
        // `stops.len() - 1` segments so far; recursing adds one more.
        for segment in graph.outgoing(node)? {
            if on_stack.contains(&segment.to) {
                continue;
            }
            if !visit(graph, segment.to, end, limits, stops, on_stack, routes)? {
                keep_going = false;
                break;
            }
        }
    }

    stops.pop();
    on_stack.remove(&node);
    Ok(keep_going)
}

// ============================================================================
// Tests
// ============================================================================
