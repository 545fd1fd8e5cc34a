//! Interactive demo: a random seven-station city over stdin.
//!
//! Prints the station banner and adjacency table, then loops on a menu:
//! show every route between two stations with scores and the most
//! convenient one, or exit. Segment attributes are drawn fresh each run;
//! set `ROADNET_LOG=debug` to watch the store and search at work.

use std::io::{self, BufRead, Write};

use roadnet::builder::{RandomAttrs, demo_city};
use roadnet::{NodeId, RoadGraph, render, search, select};
use tracing_subscriber::EnvFilter;

fn main() -> roadnet::Result<()> {
    init_tracing();

    let mut attrs = RandomAttrs::new(rand::thread_rng());
    let city = demo_city(&mut attrs)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_network(&city, &mut out)?;
    writeln!(out)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        writeln!(out, "Enter choice")?;
        writeln!(out, "1. Show the routes between 2 stations")?;
        writeln!(out, "2. Exit")?;
        out.flush()?;

        let Some(line) = read_line(&mut lines)? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Ok(1) => run_query(&city, &mut lines, &mut out)?,
            Ok(2) => break,
            _ => writeln!(out, "Invalid choice. Please enter 1 or 2.")?,
        }
        writeln!(out)?;
    }

    Ok(())
}

fn run_query(
    city: &RoadGraph,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut dyn Write,
) -> roadnet::Result<()> {
    let Some(start) = prompt_station(city, lines, out, "Enter the starting station (1-7): ")?
    else {
        return Ok(());
    };
    let Some(end) = prompt_station(city, lines, out, "Enter the destination station (1-7): ")?
    else {
        return Ok(());
    };
    if start == end {
        writeln!(out, "Start and destination should be different.")?;
        return Ok(());
    }

    let routes = search::all_simple_routes(city, start, end)?;
    if routes.is_empty() {
        writeln!(out, "No routes found between {start} and {end}.")?;
        return Ok(());
    }

    writeln!(out, "All routes from {start} to {end}:")?;
    for route in &routes {
        let score = roadnet::convenience_score(city, route)?;
        writeln!(out, "{}  (score {score:.4})", render::format_route(route))?;
    }

    if let Some(best) = select::most_convenient(city, &routes)? {
        writeln!(out)?;
        writeln!(
            out,
            "Most convenient route: {}  (score {:.4})",
            render::format_route(&best.route),
            best.score,
        )?;
    }
    Ok(())
}

/// Prompt for a station id and validate it exists. `Ok(None)` backs out
/// to the menu (EOF, non-numeric input, or an unknown station).
fn prompt_station(
    city: &RoadGraph,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut dyn Write,
    prompt: &str,
) -> roadnet::Result<Option<NodeId>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let Some(line) = read_line(lines)? else {
        return Ok(None);
    };
    let Ok(id) = line.trim().parse::<u32>() else {
        writeln!(out, "Please enter a station number.")?;
        return Ok(None);
    };
    let id = NodeId(id);
    if !city.contains(id) {
        writeln!(out, "Unknown station {id}.")?;
        return Ok(None);
    }
    Ok(Some(id))
}

/// Next stdin line, or `None` on EOF.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    lines.next().transpose()
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("ROADNET_LOG").unwrap_or_else(|_| EnvFilter::new("roadnet=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
