use crate::domain::edge::EdgeId;
use crate::domain::node::NodeId;
use thiserror::Error;

/// Structural problems found while building a network graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge stored under key {key} carries id {id}")]
    EdgeIdMismatch { key: EdgeId, id: EdgeId },

    #[error("duplicate edge id {0}")]
    DuplicateEdge(EdgeId),

    #[error("edge {edge} references unknown node {node}")]
    UnknownNode { edge: EdgeId, node: NodeId },

    #[error("edge {0} has invalid length {1}")]
    InvalidLength(EdgeId, f64),

    #[error("node {node} reaches {neighbour} through unknown edge {edge}")]
    UnknownAdjacencyEdge {
        node: NodeId,
        neighbour: NodeId,
        edge: EdgeId,
    },

    #[error("edge {edge} does not join nodes {node} and {neighbour}")]
    AdjacencyMismatch {
        node: NodeId,
        neighbour: NodeId,
        edge: EdgeId,
    },
}

/// Failures of a path resolution request.
///
/// An unreachable destination is not an error: it is reported as
/// [`PathOutcome::NoPath`](crate::domain::path::PathOutcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("expected exactly 2 steps, got {got}")]
    InvalidStepCount { got: usize },

    #[error("unknown edge: {0}")]
    UnknownEdge(EdgeId),
}
