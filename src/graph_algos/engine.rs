use crate::errors::{ConfigError, IntegrityError, RouteError};
use crate::graph::NodeId;
use crate::graph::neighbors::NeighborIndex;
use super::state::PathStateTable;

use std::{
    collections::{BinaryHeap, VecDeque},
    cmp::Ordering,
    fmt::Debug,
};
use num_traits::Float;
use serde::{Deserialize, Serialize};



/// How the engine picks the next node to expand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Always expand the unvisited node with the smallest known distance (Dijkstra)
    /// Optimal for any non-negative costs
    #[default]
    MinDistance,
    /// Expand nodes in the order they were discovered (FIFO worklist)
    /// Only optimal when discovery order happens to match distance order,
    /// e.g. uniform costs. Kept for parity with existing route data.
    DiscoveryOrder,
}


/// Final state of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRun<C> {
    pub table: PathStateTable<C>,
    pub policy: SelectionPolicy,
    pub start: NodeId,
    pub target: NodeId,
    /// Number of nodes expanded
    pub expansions: usize,
    /// Target was expanded before the search stopped
    pub reached_target: bool,
}


/// Run a single-source search from `start` until `target` is expanded or
/// nothing reachable is left.
/// An unreachable target is not an error: the run comes back with
/// `reached_target == false` and the target still at +inf.
pub fn search<C>(index: &NeighborIndex<C>, start: NodeId, target: NodeId, policy: SelectionPolicy) -> Result<SearchRun<C>, RouteError>
where
    C: Float + Debug,
{
    for id in [start, target] {
        if !index.contains(id) {
            return Err(ConfigError::UnknownNode(id).into());
        }
    }

    let mut expander = Expander {
        index,
        table: PathStateTable::new(index.node_ids(), start),
        expansions: 0,
        limit: index.node_count(),
    };

    let reached_target = match policy {
        SelectionPolicy::MinDistance => expander.run_min_distance(start, target)?,
        SelectionPolicy::DiscoveryOrder => expander.run_discovery_order(start, target)?,
    };

    log::debug!(
        "{:?} search {} -> {}: {} expansions, target reached: {}",
        policy, start, target, expander.expansions, reached_target
    );

    Ok(SearchRun {
        table: expander.table,
        policy,
        start,
        target,
        expansions: expander.expansions,
        reached_target,
    })
}


/// Shared expansion step for both policies
struct Expander<'a, C> {
    index: &'a NeighborIndex<C>,
    table: PathStateTable<C>,
    expansions: usize,
    limit: usize, // every node is expanded at most once
}

impl<C> Expander<'_, C>
where
    C: Float + Debug,
{

    /// Mark `current` visited and relax all of its edges
    /// Improved neighbors are appended to `improved` with their new distance
    fn expand(&mut self, current: NodeId, improved: &mut Vec<(NodeId, C)>) -> Result<(), IntegrityError> {

        if self.expansions >= self.limit {
            return Err(IntegrityError::StepLimitExceeded { limit: self.limit });
        }
        self.expansions += 1;

        self.table.mark_visited(current);
        let base = self.table.distance(current);

        for entry in self.index.neighbors_of(current) {
            let candidate = base + entry.cost;
            // an overflowing sum must not pass for "unreachable"
            if !candidate.is_finite() && !self.table.distance(entry.neighbor).is_finite() {
                return Err(IntegrityError::CostOverflow { node: entry.neighbor, via: current });
            }
            if self.table.relax(entry.neighbor, current, candidate) {
                log::trace!("relaxed {} to {:?} via {}", entry.neighbor, candidate, current);
                improved.push((entry.neighbor, candidate));
            }
        }

        Ok(())
    }

    /// Priority queue keyed by distance - stale entries are skipped on pop
    fn run_min_distance(&mut self, start: NodeId, target: NodeId) -> Result<bool, IntegrityError> {

        let mut frontier: BinaryHeap<Candidate<C>> = BinaryHeap::new();
        let mut sequence = 0;
        frontier.push(Candidate { index: start, cost: C::zero(), sequence });

        let mut improved = Vec::new();

        while let Some(Candidate { index, cost, .. }) = frontier.pop() {

            // already expanded, or a better route was queued after this one
            if self.table.is_visited(index) || cost > self.table.distance(index) {
                continue;
            }

            improved.clear();
            self.expand(index, &mut improved)?;

            if index == target {
                return Ok(true);
            }

            for &(neighbor, cost) in &improved {
                sequence += 1;
                frontier.push(Candidate { index: neighbor, cost, sequence });
            }
        }

        Ok(false)
    }

    /// FIFO worklist: every neighbor of the expanded node goes to the back,
    /// visited ids are dropped, the front is expanded next
    fn run_discovery_order(&mut self, start: NodeId, target: NodeId) -> Result<bool, IntegrityError> {

        let mut worklist: VecDeque<NodeId> = VecDeque::new();
        let mut current = Some(start);

        // relaxation results are not needed to order a FIFO
        let mut improved = Vec::new();

        while let Some(index) = current {

            improved.clear();
            self.expand(index, &mut improved)?;

            if index == target {
                return Ok(true);
            }

            worklist.extend(self.index.neighbors_of(index).iter().map(|e| e.neighbor));
            worklist.retain(|id| !self.table.is_visited(*id));
            current = worklist.pop_front();
        }

        Ok(false)
    }
}


/// Heap entry
/// - ordered by cost (smallest first), then by discovery sequence (earliest first)
/// - costs are validated before a search, NaN never reaches the heap
#[derive(Debug)]
struct Candidate<T> {
    index: NodeId,
    cost: T,
    sequence: usize,
}

impl<T: Float> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<T: Float> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Float> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Float> Eq for Candidate<T> {}
