//! port-route — shortest great-circle route between two container ports.
//!
//! Loads a facility table (the bundled 50-port world table by default),
//! treats it as a complete graph weighted by haversine distance, and prints
//! the route between two ports chosen by index.  Indices not given on the
//! command line are read interactively from stdin.
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use pn_core::NodeId;
use pn_facility::{FacilitySet, load_facilities_csv, load_facilities_reader};
use pn_routing::{CompleteGeoGraph, DijkstraRouter, Router, RoutingError};

// ── Bundled data ──────────────────────────────────────────────────────────────

const WORLD_PORTS_CSV: &str = include_str!("../data/ports.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Shortest great-circle route between two ports.
#[derive(Parser, Debug)]
#[command(name = "port-route", version, about)]
struct Cli {
    /// Facility table CSV (name,lat,lon,cargo_capacity_mt,container_capacity_teu).
    /// Defaults to the bundled world port table.
    #[arg(long, value_name = "CSV")]
    facilities: Option<PathBuf>,

    /// Source port index.
    #[arg(long, short)]
    source: Option<u32>,

    /// Target port index.
    #[arg(long, short)]
    target: Option<u32>,

    /// Print the numbered port list and exit.
    #[arg(long)]
    list: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let set = match &cli.facilities {
        Some(path) => load_facilities_csv(path)
            .with_context(|| format!("loading facility table {}", path.display()))?,
        None => load_facilities_reader(WORLD_PORTS_CSV.as_bytes())
            .context("loading bundled port table")?,
    };
    tracing::info!(ports = set.len(), "facility table loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        report::write_list(&mut out, &set)?;
        return Ok(());
    }

    let (from, to) = match (cli.source, cli.target) {
        (Some(s), Some(t)) => (node(&set, s)?, node(&set, t)?),
        (s, t) => {
            report::write_list(&mut out, &set)?;
            let mut input = io::stdin().lock();
            let from = match s {
                Some(s) => node(&set, s)?,
                None => prompt(&mut out, &mut input, &set, "source")?,
            };
            let to = match t {
                Some(t) => node(&set, t)?,
                None => prompt(&mut out, &mut input, &set, "target")?,
            };
            (from, to)
        }
    };

    run_query(&mut out, &set, from, to)
}

/// Route `from → to` and print the outcome.  Unreachable targets are a
/// normal outcome; every other routing error is returned.
fn run_query<W: Write>(out: &mut W, set: &FacilitySet, from: NodeId, to: NodeId) -> Result<()> {
    if from == to {
        report::write_same(out, set, from)?;
        return Ok(());
    }

    let graph = CompleteGeoGraph::new(set.positions());
    match DijkstraRouter.route(&graph, from, to) {
        Ok(route) => report::write_route(out, set, &route)?,
        Err(RoutingError::Unreachable { from, to }) => {
            report::write_unreachable(out, set, from, to)?
        }
        Err(e) => return Err(e).context("routing query failed"),
    }
    Ok(())
}

fn node(set: &FacilitySet, index: u32) -> Result<NodeId> {
    let id = NodeId(index);
    if !set.contains(id) {
        bail!("port index {index} is out of range (0 to {})", set.len() - 1);
    }
    Ok(id)
}

fn prompt<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    set: &FacilitySet,
    role: &str,
) -> Result<NodeId> {
    write!(out, "Enter the {role} port index (0 to {}): ", set.len() - 1)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no {role} port index given");
    }
    let index: u32 = line
        .trim()
        .parse()
        .with_context(|| format!("invalid {role} port index {:?}", line.trim()))?;
    node(set, index)
}

#[cfg(test)]
mod tests;
