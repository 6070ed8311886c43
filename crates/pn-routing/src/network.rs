//! Explicit weighted graph for sparse or non-geodesic networks.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the index range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! `edge_from`, `edge_to` and `edge_weight` are sorted by source node, so a
//! node's outgoing edges are a contiguous memory scan in the search's inner
//! loop.

use pn_core::NodeId;

use crate::graph::Graph;
use crate::{RoutingError, RoutingResult};

// ── EdgeListGraph ─────────────────────────────────────────────────────────────

/// Directed weighted graph in CSR format.
///
/// Do not construct directly; use [`EdgeListGraphBuilder`].
pub struct EdgeListGraph {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,
    pub edge_weight: Vec<f64>,
}

impl EdgeListGraph {
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Edge index range of `node`'s outgoing edges.
    #[inline]
    fn out_range(&self, node: NodeId) -> std::ops::Range<usize> {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        start..end
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_range(node).len()
    }
}

impl Graph for EdgeListGraph {
    fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.out_range(node).map(move |e| (self.edge_to[e], self.edge_weight[e]))
    }

    /// Cheapest of any parallel edges `from → to`.
    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if !self.contains(from) {
            return None;
        }
        self.neighbors(from)
            .filter(|&(v, _)| v == to)
            .map(|(_, w)| w)
            .min_by(f64::total_cmp)
    }
}

// ── EdgeListGraphBuilder ──────────────────────────────────────────────────────

/// Construct an [`EdgeListGraph`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order.  `build()` validates endpoints and
/// weights, sorts edges by source node, and constructs the CSR arrays.
#[derive(Default)]
pub struct EdgeListGraphBuilder {
    node_count: usize,
    raw_edges:  Vec<RawEdge>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
}

impl EdgeListGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `n` nodes, `NodeId(0) .. NodeId(n)`.
    pub fn with_nodes(n: usize) -> Self {
        Self { node_count: n, raw_edges: Vec::new() }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.raw_edges.push(RawEdge { from, to, weight });
    }

    /// Add edges in both directions with the same weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize { self.node_count }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce an [`EdgeListGraph`].
    ///
    /// Fails with `NodeNotFound` for an edge endpoint that was never added and
    /// with `InvalidWeight` for a negative or non-finite weight.
    pub fn build(self) -> RoutingResult<EdgeListGraph> {
        let node_count = self.node_count;

        for e in &self.raw_edges {
            for end in [e.from, e.to] {
                if end.index() >= node_count {
                    return Err(RoutingError::NodeNotFound(end));
                }
            }
            if !(e.weight.is_finite() && e.weight >= 0.0) {
                return Err(RoutingError::InvalidWeight {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                });
            }
        }

        // Stable sort keeps insertion order among a node's edges.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        Ok(EdgeListGraph { node_out_start, edge_from, edge_to, edge_weight })
    }
}
