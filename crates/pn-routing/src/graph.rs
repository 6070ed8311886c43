//! The neighbours-and-weight capability the search depends on, and the
//! complete geodesic graph that implements it without an adjacency list.

use pn_core::{GeoPoint, NodeId, haversine_km};

// ── Graph trait ───────────────────────────────────────────────────────────────

/// A weighted directed graph over nodes `NodeId(0) .. NodeId(node_count)`.
///
/// Weights must be finite and non-negative.
pub trait Graph {
    fn node_count(&self) -> usize;

    #[inline]
    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Outgoing `(neighbour, weight)` pairs of `node`.  `node` must be in the
    /// graph.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_;

    /// Weight of the edge `from → to`, or `None` if there is no such edge.
    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64>;
}

// ── CompleteGeoGraph ──────────────────────────────────────────────────────────

/// Every distinct pair of nodes is connected; the weight of an edge is the
/// great-circle distance in kilometres between the two node positions.
///
/// Weights are computed on demand, so the graph costs nothing beyond the
/// borrowed position slice.  Self-loops are not edges.
#[derive(Clone, Copy)]
pub struct CompleteGeoGraph<'a> {
    positions: &'a [GeoPoint],
}

impl<'a> CompleteGeoGraph<'a> {
    /// `positions[i]` is the coordinate of `NodeId(i)`.
    pub fn new(positions: &'a [GeoPoint]) -> Self {
        Self { positions }
    }

    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.positions.get(node.index()).copied()
    }
}

impl Graph for CompleteGeoGraph<'_> {
    fn node_count(&self) -> usize {
        self.positions.len()
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let from = self.positions[node.index()];
        self.positions
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != node.index())
            .map(move |(i, &to)| (NodeId(i as u32), haversine_km(from, to)))
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if from == to {
            return None;
        }
        Some(haversine_km(self.position(from)?, self.position(to)?))
    }
}
