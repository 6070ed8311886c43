//! Text rendering of facility lists and routing results.

use std::io::{self, Write};

use pn_core::NodeId;
use pn_facility::FacilitySet;
use pn_routing::Route;

pub fn write_list<W: Write>(out: &mut W, set: &FacilitySet) -> io::Result<()> {
    writeln!(out, "List of ports:")?;
    for (id, name, _) in set.iter() {
        writeln!(out, "{}: {name}", id.0)?;
    }
    Ok(())
}

pub fn write_same<W: Write>(out: &mut W, set: &FacilitySet, node: NodeId) -> io::Result<()> {
    writeln!(out, "Source and target ports are the same: {}", name(set, node))
}

pub fn write_unreachable<W: Write>(
    out: &mut W,
    set: &FacilitySet,
    from: NodeId,
    to: NodeId,
) -> io::Result<()> {
    writeln!(out, "No path found between {} and {}.", name(set, from), name(set, to))
}

/// Full report: target, total distance, the hop chain (target first, each hop
/// annotated with its own distance), then capacity figures of both ends.
pub fn write_route<W: Write>(out: &mut W, set: &FacilitySet, route: &Route) -> io::Result<()> {
    let from = route.path.source();
    let to   = route.path.target();

    writeln!(out)?;
    writeln!(out, "Target Port: {}", name(set, to))?;
    writeln!(out)?;
    writeln!(
        out,
        "Shortest distance between {} and {}: {:.2} kilometers",
        name(set, from),
        name(set, to),
        route.total_distance
    )?;

    writeln!(out)?;
    writeln!(out, "Connecting Ports:")?;
    for hop in route.path.hops().iter().skip(1).rev() {
        write!(out, "{} ({:.2} km) <- ", name(set, hop.node), hop.distance)?;
    }
    writeln!(out, "{}", name(set, from))?;

    writeln!(out)?;
    for (label, node) in [("Source", from), ("Target", to)] {
        let facility = set.get(node);
        let cargo     = facility.as_ref().and_then(|f| f.cargo_capacity_mt);
        let container = facility.as_ref().and_then(|f| f.container_capacity_teu);
        writeln!(out, "{label} Port Cargo Capacity: {}", figure(cargo, "million metric tons"))?;
        writeln!(out, "{label} Port Container Capacity: {}", figure(container, "million TEUs"))?;
    }
    Ok(())
}

fn name(set: &FacilitySet, node: NodeId) -> &str {
    set.name(node).unwrap_or("<unknown>")
}

fn figure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.2} {unit}"),
        None => "n/a".to_string(),
    }
}
