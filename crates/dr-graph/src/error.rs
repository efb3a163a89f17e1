//! Graph-subsystem error type.

use thiserror::Error;

use dr_core::NodeId;

/// Errors produced by `dr-graph`.
///
/// An unreachable destination is not an error: it is reported through
/// [`ShortestPath::is_reachable`](crate::ShortestPath::is_reachable).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
