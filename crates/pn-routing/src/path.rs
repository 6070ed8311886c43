//! Path reconstruction from a predecessor map.

use pn_core::NodeId;

use crate::graph::Graph;
use crate::{RoutingError, RoutingResult};

/// One step of a path: the node reached and the weight of the edge used to
/// reach it.  The first hop of every path is the source with distance `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    pub node: NodeId,
    pub distance: f64,
}

/// Ordered hops from source to target, inclusive.  Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    hops: Vec<Hop>,
}

impl Path {
    /// Single-node path for a `source == target` query.
    pub fn trivial(node: NodeId) -> Self {
        Self { hops: vec![Hop { node, distance: 0.0 }] }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.hops.iter().map(|h| h.node)
    }

    pub fn source(&self) -> NodeId {
        self.hops[0].node
    }

    pub fn target(&self) -> NodeId {
        self.hops[self.hops.len() - 1].node
    }

    /// Number of nodes on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// `true` if source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.hops.len() == 1
    }

    /// Sum of per-hop distances, accumulated from the source.
    pub fn total_distance(&self) -> f64 {
        self.hops.iter().map(|h| h.distance).sum()
    }
}

/// Walk `prev` backwards from `target` to `source`.
///
/// Per-hop distances are recomputed with [`Graph::weight`]; the distance
/// table holds cumulative values only.  A chain that does not reach `source`
/// (missing predecessor, missing edge, or a cycle) is reported as
/// `BrokenPredecessorChain`.
pub fn reconstruct<G: Graph>(
    prev: &[Option<NodeId>],
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> RoutingResult<Path> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(RoutingError::NodeNotFound(node));
        }
    }

    let mut hops = Vec::new();
    let mut cur = target;

    while cur != source {
        // A simple path visits each node at most once.
        if hops.len() >= prev.len() {
            return Err(broken_chain(cur));
        }
        let Some(pred) = prev.get(cur.index()).copied().flatten() else {
            return Err(broken_chain(cur));
        };
        let Some(distance) = graph.weight(pred, cur) else {
            return Err(broken_chain(cur));
        };
        hops.push(Hop { node: cur, distance });
        cur = pred;
    }

    hops.push(Hop { node: source, distance: 0.0 });
    hops.reverse();
    Ok(Path { hops })
}

fn broken_chain(at: NodeId) -> RoutingError {
    tracing::error!(%at, "predecessor chain does not reach the source");
    RoutingError::BrokenPredecessorChain { at }
}
