//! Best-route selection over an enumerated candidate set.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Result;
use crate::model::Route;
use crate::score::convenience_score;
use crate::store::RoadGraph;

/// A route paired with its convenience score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRoute {
    pub route: Route,
    pub score: f64,
}

/// Pick the most convenient route from `routes`.
///
/// Scores every candidate in the order given and keeps the running
/// minimum under strict less-than, so the **first** route achieving the
/// minimum wins ties — later equal scores never replace it. Empty input
/// yields `None`, which is how "no route exists" is distinguished from
/// an actual failure.
pub fn most_convenient(graph: &RoadGraph, routes: &[Route]) -> Result<Option<ScoredRoute>> {
    let mut best: Option<ScoredRoute> = None;
    for route in routes {
        let score = convenience_score(graph, route)?;
        trace!(score, segments = route.segment_count(), "scored candidate");
        if best.as_ref().is_none_or(|b| score < b.score) {
            best = Some(ScoredRoute {
                route: route.clone(),
                score,
            });
        }
    }
    Ok(best)
}

// ============================================================================
// Tests
// ============================================================================
