//! Routing error type.

use thiserror::Error;

use pn_core::NodeId;

/// Errors produced by `pn-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    /// The predecessor chain does not lead back to the source.  This is an
    /// engine defect, never a property of the input.
    #[error("broken predecessor chain at {at}")]
    BrokenPredecessorChain { at: NodeId },

    #[error("invalid edge weight {weight} on {from} -> {to}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
