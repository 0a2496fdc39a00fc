use thiserror::Error;

use crate::graph::NodeId;


/// Problems with the input graph or the label mapping.
/// Raised before the relaxation loop ever starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("label `{0}` is not reserved and carries no numeric id")]
    UnmappedLabel(String),

    #[error("label `{label}` maps to id {id}, which maps back to `{round_trip}`")]
    LabelNotInvertible { label: String, id: NodeId, round_trip: String },

    #[error("label `{0}` appears more than once in the graph")]
    DuplicateLabel(String),

    #[error("endpoint `{0}` is not a node of the graph")]
    UnknownEndpoint(String),

    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),

    #[error("edge {index} references node {node}, which is not in the graph")]
    DanglingEdge { index: usize, node: NodeId },

    // costs are widened to f64 for reporting only
    #[error("edge {index} has invalid cost {cost} (must be finite and non-negative)")]
    InvalidCost { index: usize, cost: f64 },
}

/// Broken invariants inside a computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrityError {
    #[error("search expanded more than {limit} nodes")]
    StepLimitExceeded { limit: usize },

    // every cost is finite, but their sum is not representable
    #[error("distance to node {node} via node {via} overflows the cost type")]
    CostOverflow { node: NodeId, via: NodeId },

    #[error("parent chain from node {from} is longer than {limit} links")]
    ParentCycle { from: NodeId, limit: usize },

    #[error("parent chain ended at node {root} instead of the start node {start}")]
    DetachedChain { root: NodeId, start: NodeId },

    #[error("node {node} has parent {parent}, which has no state record")]
    UnknownParent { node: NodeId, parent: NodeId },

    #[error("path steps from `{from}` to `{to}` but no edge connects them")]
    MissingEdge { from: String, to: String },
}

/// Recorded distance and re-summed path cost disagree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("recorded distance {recorded} differs from path cost {summed}")]
    CostMismatch { recorded: f64, summed: f64 },
}

/// Everything a route query can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
