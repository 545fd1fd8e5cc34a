//! Convenience scoring for routes.
//!
//! A route's score is the sum over its segments of three weighted
//! reciprocal terms:
//!
//! ```text
//! 0.5 / (distance + ε) + 0.3 / (red_lights + ε) + 0.2 / (traffic + ε)
//! ```
//!
//! with ε = 0.01 smoothing a zero attribute away from division by zero.
//! Distance carries the highest weight, then red lights, then traffic.
//!
//! ## Behavioral note
//!
//! The selector treats a **lower** score as "more convenient", yet each
//! term is a reciprocal: smaller raw attributes produce *larger* terms.
//! The net effect is that the route whose attributes are collectively
//! largest wins the "most convenient" slot. This arithmetic is preserved
//! deliberately for fidelity with the system being modeled; callers who
//! want the plain-language meaning must invert the weighting themselves.

use crate::model::{Route, SegmentAttrs};
use crate::store::RoadGraph;
use crate::{Error, Result};

/// Smoothing constant keeping zero attributes finite.
pub const EPSILON: f64 = 0.01;

pub const DISTANCE_WEIGHT: f64 = 0.5;
pub const RED_LIGHT_WEIGHT: f64 = 0.3;
pub const TRAFFIC_WEIGHT: f64 = 0.2;

/// Score a route against the graph it was enumerated from.
///
/// A single-stop route scores exactly `0.0`. Fails with
/// [`Error::BrokenRoute`] if a consecutive stop pair has no backing
/// segment — the enumerator guarantees segments exist, so that error
/// signals a caller defect (a route scored against the wrong graph),
/// not a user-facing condition.
pub fn convenience_score(graph: &RoadGraph, route: &Route) -> Result<f64> {
    let mut total = 0.0;
    for (from, to) in route.pairs() {
        let segment = graph
            .segment_between(from, to)
            .ok_or(Error::BrokenRoute { from, to })?;
        total += segment_score(segment.attrs);
    }
    Ok(total)
}

/// One segment's contribution to the route score.
pub fn segment_score(attrs: SegmentAttrs) -> f64 {
    DISTANCE_WEIGHT / (f64::from(attrs.distance) + EPSILON)
        + RED_LIGHT_WEIGHT / (f64::from(attrs.red_lights) + EPSILON)
        + TRAFFIC_WEIGHT / (f64::from(attrs.traffic) + EPSILON)
}

// ============================================================================
// Tests
// ============================================================================
