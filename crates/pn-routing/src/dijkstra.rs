//! Single-source shortest-path search with early termination.
//!
//! Classic Dijkstra over any [`Graph`].  On a [`CompleteGeoGraph`] every
//! other node is a neighbour of the node being expanded, with the weight
//! computed on demand, so a query costs O(N² log N) for N nodes.
//!
//! The frontier is a binary heap that may hold several entries for the same
//! node.  Instead of decreasing keys in place, a popped entry whose distance
//! is larger than the node's current best is skipped as stale.
//!
//! [`CompleteGeoGraph`]: crate::CompleteGeoGraph

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pn_core::NodeId;

use crate::graph::Graph;
use crate::{RoutingError, RoutingResult};

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier entries popped, stale ones included.
    pub pops: usize,
    pub pushes: usize,
    pub stale_skips: usize,
}

/// Output of one [`shortest_path`] query: the distance table and the
/// predecessor map, both indexed by `NodeId`.
///
/// Only the entries needed to finalise `target` are guaranteed final; the
/// search stops as soon as `target` leaves the frontier.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    pub source: NodeId,
    pub target: NodeId,
    /// Best known distance from `source`; `f64::INFINITY` for unreached nodes.
    pub dist: Vec<f64>,
    /// Node from which `dist[v]` was achieved; `None` for the source and for
    /// unreached nodes.
    pub prev: Vec<Option<NodeId>>,
    pub stats: SearchStats,
}

impl SearchTree {
    /// Distance from `source`, or `None` if `node` was never reached.
    pub fn distance_to(&self, node: NodeId) -> Option<f64> {
        self.dist
            .get(node.index())
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.prev.get(node.index()).copied().flatten()
    }

    /// Finalised distance to `target`.
    pub fn target_distance(&self) -> f64 {
        self.dist[self.target.index()]
    }
}

// ── Frontier entry ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    /// Reversed so the max-heap `BinaryHeap` pops the smallest distance.
    /// Ties go to the lower `NodeId` for deterministic output.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Run Dijkstra from `source` until `target` is popped from the frontier.
///
/// Fails with `NodeNotFound` before any search work if either endpoint is not
/// in the graph, and with `Unreachable` if the frontier empties first.  When
/// `source == target` the search finishes on its first pop.
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> RoutingResult<SearchTree> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(RoutingError::NodeNotFound(node));
        }
    }

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut stats = SearchStats::default();

    dist[source.index()] = 0.0;

    let mut frontier = BinaryHeap::new();
    frontier.push(Candidate { dist: 0.0, node: source });
    stats.pushes += 1;

    tracing::debug!(%source, %target, nodes = n, "shortest-path search started");

    while let Some(Candidate { dist: d, node: u }) = frontier.pop() {
        stats.pops += 1;

        // Skip stale frontier entries.
        if d > dist[u.index()] {
            stats.stale_skips += 1;
            continue;
        }

        if u == target {
            tracing::debug!(
                %source,
                %target,
                distance = d,
                pops = stats.pops,
                pushes = stats.pushes,
                stale = stats.stale_skips,
                "shortest-path search finished"
            );
            return Ok(SearchTree { source, target, dist, prev, stats });
        }

        for (v, w) in graph.neighbors(u) {
            let candidate = d + w;
            if candidate < dist[v.index()] {
                tracing::trace!(from = %u, to = %v, distance = candidate, "relaxed");
                dist[v.index()] = candidate;
                prev[v.index()] = Some(u);
                frontier.push(Candidate { dist: candidate, node: v });
                stats.pushes += 1;
            }
        }
    }

    tracing::debug!(%source, %target, pops = stats.pops, "frontier exhausted");
    Err(RoutingError::Unreachable { from: source, to: target })
}
