use num_traits::Float;

use crate::collections::FxIndexMap;
use super::{Edge, NodeId};


/// Adjacent node plus the cost of the edge leading to it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEntry<C> {
    pub neighbor: NodeId,
    pub cost: C,
}


/// Undirected adjacency lists, built once from the full edge set
///
/// Every edge shows up in the list of both endpoints (once for a self loop),
/// in input edge order. The engine relies on that order for tie-breaking.
#[derive(Clone, Debug)]
pub struct NeighborIndex<C> {
    adjacency: FxIndexMap<NodeId, Vec<NeighborEntry<C>>>,
    edge_count: usize,
}

impl<C: Float> NeighborIndex<C> {

    /// One pass over the edges
    /// `nodes` registers isolated nodes too, so they still count as part of the graph
    pub fn build<I>(nodes: I, edges: &[Edge<C>]) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut adjacency: FxIndexMap<NodeId, Vec<NeighborEntry<C>>> = FxIndexMap::default();
        for id in nodes {
            adjacency.entry(id).or_default();
        }

        for edge in edges {
            adjacency
                .entry(edge.source)
                .or_default()
                .push(NeighborEntry { neighbor: edge.target, cost: edge.cost });

            if edge.source != edge.target {
                adjacency
                    .entry(edge.target)
                    .or_default()
                    .push(NeighborEntry { neighbor: edge.source, cost: edge.cost });
            }
        }

        Self { adjacency, edge_count: edges.len() }
    }

    /// Neighbors of `id`, empty for unknown ids
    pub fn neighbors_of(&self, id: NodeId) -> &[NeighborEntry<C>] {
        self.adjacency.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Node ids in registration order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
