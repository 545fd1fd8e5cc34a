//! End-to-end tests for route enumeration, scoring, and selection.
//!
//! Each test builds a graph through the public store API and exercises
//! the full pipeline: enumerate -> score -> select.

use pretty_assertions::assert_eq;
use roadnet::builder::{FixedAttrs, NetworkLayout, demo_city};
use roadnet::{
    Error, NodeId, RoadGraph, Route, RoutePlanner, SearchLimits, SegmentAttrs, StationKind,
    all_simple_routes, convenience_score, most_convenient,
};

// ============================================================================
// Helpers
// ============================================================================

fn station(id: u32) -> NodeId {
    NodeId(id)
}

fn add_stations(graph: &mut RoadGraph, ids: &[u32]) {
    for &id in ids {
        graph
            .add_station(station(id), StationKind::TaxiStand)
            .unwrap();
    }
}

fn add_segments(graph: &mut RoadGraph, links: &[(u32, u32)], attrs: SegmentAttrs) {
    for &(from, to) in links {
        graph.add_segment(station(from), station(to), attrs).unwrap();
    }
}

fn stops(route: &Route) -> Vec<u32> {
    route.stops().iter().map(|id| id.0).collect()
}

// ============================================================================
// 1. Concrete reference scenario: chain 1 -> 2 -> 3
// ============================================================================

#[test]
fn test_chain_has_one_route_with_reference_score() {
    let layout = NetworkLayout {
        stations: vec![
            (station(1), StationKind::TaxiStand),
            (station(2), StationKind::AutoStand),
            (station(3), StationKind::BusStop),
        ],
        segments: vec![
            (station(1), station(2), SegmentAttrs::new(4, 2, 0)),
            (station(2), station(3), SegmentAttrs::new(4, 2, 0)),
        ],
    };
    let graph = layout.build().unwrap();

    let routes = all_simple_routes(&graph, station(1), station(3)).unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(stops(&routes[0]), vec![1, 2, 3]);

    // 2 x (0.5/4.01 + 0.3/0.01 + 0.2/2.01): the zero red-light count
    // blows up to a dominant 30.0 term per segment.
    let score = convenience_score(&graph, &routes[0]).unwrap();
    let expected = 2.0 * (0.5 / 4.01 + 0.3 / 0.01 + 0.2 / 2.01);
    assert!(
        (score - expected).abs() < 1e-12,
        "expected {expected}, got {score}"
    );
    assert!((score - 60.45).abs() < 0.01);
}

// ============================================================================
// 2. Completeness against a hand-enumerated route set
// ============================================================================

#[test]
fn test_enumeration_is_complete() {
    // 1→2, 1→3, 2→3, 3→2, 2→4, 3→4. Simple routes 1→4, by hand:
    // [1,2,4], [1,2,3,4], [1,3,4], [1,3,2,4].
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    add_segments(
        &mut graph,
        &[(1, 2), (1, 3), (2, 3), (3, 2), (2, 4), (3, 4)],
        SegmentAttrs::new(5, 3, 1),
    );

    let routes = all_simple_routes(&graph, station(1), station(4)).unwrap();
    let mut found: Vec<Vec<u32>> = routes.iter().map(stops).collect();
    let mut expected = vec![
        vec![1, 2, 4],
        vec![1, 2, 3, 4],
        vec![1, 3, 4],
        vec![1, 3, 2, 4],
    ];
    found.sort();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_discovery_order_follows_insertion_order() {
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    add_segments(
        &mut graph,
        &[(1, 2), (1, 3), (2, 3), (3, 2), (2, 4), (3, 4)],
        SegmentAttrs::new(5, 3, 1),
    );

    let routes = all_simple_routes(&graph, station(1), station(4)).unwrap();
    let found: Vec<Vec<u32>> = routes.iter().map(stops).collect();
    // DFS explores 1's outgoing list in order (2 first, then 3) and each
    // successor's list the same way.
    assert_eq!(
        found,
        vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 4],
            vec![1, 3, 2, 4],
            vec![1, 3, 4],
        ]
    );
}

// ============================================================================
// 3. Degenerate and empty cases
// ============================================================================

#[test]
fn test_start_equals_end() {
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2]);
    add_segments(&mut graph, &[(1, 2)], SegmentAttrs::new(4, 2, 0));

    let routes = all_simple_routes(&graph, station(1), station(1)).unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(stops(&routes[0]), vec![1]);
    assert_eq!(convenience_score(&graph, &routes[0]).unwrap(), 0.0);
}

#[test]
fn test_disconnected_stations_yield_empty_not_error() {
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    // Two separate islands: 1→2 and 3→4.
    add_segments(&mut graph, &[(1, 2), (3, 4)], SegmentAttrs::new(4, 2, 0));

    let routes = all_simple_routes(&graph, station(1), station(4)).unwrap();
    assert!(routes.is_empty());

    let best = most_convenient(&graph, &routes).unwrap();
    assert!(best.is_none());
}

#[test]
fn test_unknown_station_is_error() {
    let graph = RoadGraph::new();
    assert!(matches!(
        all_simple_routes(&graph, station(1), station(2)),
        Err(Error::UnknownStation(NodeId(1)))
    ));
}

// ============================================================================
// 4. Selection semantics
// ============================================================================

#[test]
fn test_selector_prefers_collectively_larger_attributes() {
    // The reciprocal weighting means the route over big-attribute
    // segments scores lower and therefore wins selection.
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    graph
        .add_segment(station(1), station(2), SegmentAttrs::new(3, 2, 1))
        .unwrap();
    graph
        .add_segment(station(2), station(4), SegmentAttrs::new(3, 2, 1))
        .unwrap();
    graph
        .add_segment(station(1), station(3), SegmentAttrs::new(10, 8, 4))
        .unwrap();
    graph
        .add_segment(station(3), station(4), SegmentAttrs::new(10, 8, 4))
        .unwrap();

    let planner = RoutePlanner::new(graph);
    let best = planner.best_route(station(1), station(4)).unwrap().unwrap();
    assert_eq!(stops(&best.route), vec![1, 3, 4]);
}

#[test]
fn test_tie_break_keeps_first_discovered() {
    // Symmetric diamond: both routes score identically, so the one
    // discovered first (via the earlier-inserted segment) must win.
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    add_segments(
        &mut graph,
        &[(1, 2), (1, 3), (2, 4), (3, 4)],
        SegmentAttrs::new(6, 4, 2),
    );

    let routes = all_simple_routes(&graph, station(1), station(4)).unwrap();
    assert_eq!(routes.len(), 2);
    let best = most_convenient(&graph, &routes).unwrap().unwrap();
    assert_eq!(stops(&best.route), stops(&routes[0]));
    assert_eq!(stops(&best.route), vec![1, 2, 4]);
}

// ============================================================================
// 5. Bounded search
// ============================================================================

#[test]
fn test_route_cap_returns_prefix_of_discovery_order() {
    let mut graph = RoadGraph::new();
    add_stations(&mut graph, &[1, 2, 3, 4]);
    add_segments(
        &mut graph,
        &[(1, 2), (1, 3), (2, 3), (3, 2), (2, 4), (3, 4)],
        SegmentAttrs::new(5, 3, 1),
    );

    let planner = RoutePlanner::new(graph);
    let all = planner.routes(station(1), station(4)).unwrap();
    let capped = planner
        .routes_bounded(
            station(1),
            station(4),
            SearchLimits {
                max_routes: Some(2),
                max_depth: None,
            },
        )
        .unwrap();
    assert_eq!(capped.len(), 2);
    assert_eq!(stops(&capped[0]), stops(&all[0]));
    assert_eq!(stops(&capped[1]), stops(&all[1]));
}

// ============================================================================
// 6. Demo city end to end
// ============================================================================

#[test]
fn test_demo_city_routes_are_valid_and_selectable() {
    let mut attrs = FixedAttrs(SegmentAttrs::new(4, 2, 1));
    let city = demo_city(&mut attrs).unwrap();

    let routes = all_simple_routes(&city, station(1), station(7)).unwrap();
    assert!(!routes.is_empty(), "demo city connects 1 to 7");

    for route in &routes {
        assert_eq!(route.start(), station(1));
        assert_eq!(route.end(), station(7));
        for (from, to) in route.pairs() {
            assert!(
                city.segment_between(from, to).is_some(),
                "route step {from} -> {to} must be a real segment"
            );
        }
        let mut ids: Vec<_> = route.stops().to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), route.stops().len(), "no repeated station");
    }

    // With identical attributes everywhere, each segment adds the same
    // positive term, so the minimum-score route is one with the fewest
    // segments.
    let best = most_convenient(&city, &routes).unwrap().unwrap();
    let min_segments = routes.iter().map(Route::segment_count).min().unwrap();
    assert_eq!(best.route.segment_count(), min_segments);
}
