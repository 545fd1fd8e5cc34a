//! JSON export — serialize the network and route reports.
//!
//! The machine-readable counterpart to [`crate::render`]: a full network
//! dump for persistence or diffing, and a per-query route report
//! carrying every enumerated route with its score plus the selected
//! best.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::{NodeId, Station};
use crate::score::convenience_score;
use crate::search::all_simple_routes;
use crate::select::{ScoredRoute, most_convenient};
use crate::store::RoadGraph;

/// Whole-network snapshot: stations in insertion order, each with its
/// ordered outgoing segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDump {
    pub stations: Vec<Station>,
}

impl NetworkDump {
    pub fn from_graph(graph: &RoadGraph) -> Self {
        Self {
            stations: graph.stations().cloned().collect(),
        }
    }
}

/// Serialize the network as pretty-printed JSON.
pub fn network_to_json(graph: &RoadGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&NetworkDump::from_graph(graph))?)
}

/// Everything a query produced: all candidate routes with scores, in
/// discovery order, plus the winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReport {
    pub start: NodeId,
    pub end: NodeId,
    pub routes: Vec<ScoredRoute>,
    pub best: Option<ScoredRoute>,
}

/// Enumerate, score, and select in one pass, packaged for consumers.
pub fn route_report(graph: &RoadGraph, start: NodeId, end: NodeId) -> Result<RouteReport> {
    let routes = all_simple_routes(graph, start, end)?;
    let best = most_convenient(graph, &routes)?;
    let scored = routes
        .into_iter()
        .map(|route| {
            let score = convenience_score(graph, &route)?;
            Ok(ScoredRoute { route, score })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(RouteReport {
        start,
        end,
        routes: scored,
        best,
    })
}

/// Serialize a route report as pretty-printed JSON.
pub fn report_to_json(report: &RouteReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// ============================================================================
// Tests
// ============================================================================
