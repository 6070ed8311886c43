//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so an A* or precomputed
//! distance-matrix router can replace [`DijkstraRouter`] without touching
//! the presentation layer.
//!
//! # Units
//!
//! `Route::total_distance` is in the graph's weight unit: kilometres for a
//! [`CompleteGeoGraph`](crate::CompleteGeoGraph).

use pn_core::NodeId;

use crate::dijkstra::shortest_path;
use crate::graph::Graph;
use crate::path::{Path, reconstruct};
use crate::{RoutingError, RoutingResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the hop sequence and its total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    /// Cumulative distance from source to target, as finalised by the search.
    pub total_distance: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.path.is_trivial()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len() - 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` is answered as a trivial zero-distance route rather than
    /// an error, provided the node is in the graph.
    fn route<G: Graph>(&self, graph: &G, from: NodeId, to: NodeId) -> RoutingResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// [`shortest_path`] followed by [`reconstruct`].
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route<G: Graph>(&self, graph: &G, from: NodeId, to: NodeId) -> RoutingResult<Route> {
        if from == to {
            if !graph.contains(from) {
                return Err(RoutingError::NodeNotFound(from));
            }
            return Ok(Route { path: Path::trivial(from), total_distance: 0.0 });
        }

        let tree = shortest_path(graph, from, to)?;
        let path = reconstruct(&tree.prev, graph, from, to)?;
        Ok(Route { path, total_distance: tree.target_distance() })
    }
}
