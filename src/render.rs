//! Console rendering of the network and of routes.
//!
//! ```text
//! +------+------+------+
//! | T1   | A2   | B3   |
//! +------+------+------+
//!
//! T1 --> A2 (D: 4, T: 2, RL: 0)
//! ```
//!
//! Writers take `&mut dyn Write` so callers decide where the text goes;
//! the `format_*` helpers return plain strings for embedding in other
//! output.

use std::io::Write;

use crate::Result;
use crate::model::{NodeId, Route};
use crate::store::RoadGraph;

/// Render a route as `1 -> 2 -> 3`.
pub fn format_route(route: &Route) -> String {
    route
        .stops()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Station tag: one-letter kind code plus id, e.g. `T1`.
pub fn format_station_tag(graph: &RoadGraph, id: NodeId) -> Result<String> {
    let kind = graph.station_kind(id)?;
    Ok(format!("{}{}", kind.code(), id))
}

/// One boxed row of station tags, in insertion order.
pub fn write_station_banner(graph: &RoadGraph, writer: &mut dyn Write) -> Result<()> {
    let rule: String = "+------".repeat(graph.station_count()) + "+";
    writeln!(writer, "{rule}")?;
    for station in graph.stations() {
        let tag = format!("{}{}", station.kind.code(), station.id);
        write!(writer, "| {tag:<5}")?;
    }
    writeln!(writer, "|")?;
    writeln!(writer, "{rule}")?;
    Ok(())
}

/// Adjacency listing: one line per segment, grouped by source station.
pub fn write_adjacency(graph: &RoadGraph, writer: &mut dyn Write) -> Result<()> {
    for station in graph.stations() {
        let from_tag = format!("{}{}", station.kind.code(), station.id);
        for segment in &station.outgoing {
            let to_tag = format_station_tag(graph, segment.to)?;
            writeln!(
                writer,
                "{from_tag} --> {to_tag} (D: {}, T: {}, RL: {})",
                segment.attrs.distance, segment.attrs.traffic, segment.attrs.red_lights,
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Banner plus adjacency listing.
pub fn write_network(graph: &RoadGraph, writer: &mut dyn Write) -> Result<()> {
    write_station_banner(graph, writer)?;
    writeln!(writer)?;
    write_adjacency(graph, writer)
}

// ============================================================================
// Tests
// ============================================================================
