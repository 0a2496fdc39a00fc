//! Immutable graph input: nodes, undirected costed edges, the label codec and
//! the neighbor index built from them.

pub mod labels;
pub mod neighbors;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Numeric node identifier
pub type NodeId = u64;


/// Node of the input graph - only the label is stored, the id comes from the label codec
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}


/// Undirected edge between two node ids
/// `source`/`target` follow the input naming, neither end is special
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<C> {
    pub source: NodeId,
    pub target: NodeId,
    pub cost: C,
}

impl<C: Float> Edge<C> {
    pub fn new(source: NodeId, target: NodeId, cost: C) -> Self {
        Self { source, target, cost }
    }

    /// Returns the opposite endpoint if `id` is one of the ends
    pub fn other_end(&self, id: NodeId) -> Option<NodeId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }

    /// Endpoints in ascending order, usable as an unordered key
    pub(crate) fn key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}


/// Already-parsed graph handed to the engine
/// Deserializes from `{"nodes": [{"label": ..}], "edges": [{"source": .., "target": .., "cost": ..}]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<C> {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<C>>,
}

impl<C: Float> GraphSnapshot<C> {

    pub fn new(nodes: Vec<Node>, edges: Vec<Edge<C>>) -> Self {
        Self { nodes, edges }
    }

    /// Reject negative, NaN and infinite costs
    pub fn check_costs(&self) -> Result<(), ConfigError> {
        for (index, edge) in self.edges.iter().enumerate() {
            if !edge.cost.is_finite() || edge.cost < C::zero() {
                return Err(ConfigError::InvalidCost {
                    index,
                    cost: edge.cost.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
