//! Route planner: validates a graph snapshot once, then answers start/target
//! queries by running the engine, rebuilding the path and re-checking its cost.

use std::fmt::Debug;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::collections::FxHashMap;
use crate::errors::{ConfigError, RouteError};
use crate::graph::labels::LabelCodec;
use crate::graph::neighbors::NeighborIndex;
use crate::graph::{GraphSnapshot, NodeId};
use crate::graph_algos::{
    search, shortest_path, CostCheck, CostReport, CostValidator, PathStateTable, SelectionPolicy,
};


/// Search settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub policy: SelectionPolicy,
    /// Absolute tolerance when comparing recorded and re-summed path costs
    pub tolerance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { policy: SelectionPolicy::default(), tolerance: 1e-9 }
    }
}

impl SearchConfig {
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}


/// Path found, or the explicit "no path" answer for an unreachable target
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome<C> {
    Found {
        /// Labels from start to target inclusive
        path: Vec<String>,
        cost: CostReport<C>,
        check: CostCheck<C>,
    },
    NoPath,
}


/// Answer to one route query
#[derive(Clone, Debug, PartialEq)]
pub struct Route<C> {
    pub outcome: RouteOutcome<C>,
    /// Final per-node state of the search
    pub table: PathStateTable<C>,
    pub policy: SelectionPolicy,
    pub expansions: usize,
}

impl<C: Float> Route<C> {

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, RouteOutcome::Found { .. })
    }

    /// Path labels, empty when there is no path
    pub fn path(&self) -> &[String] {
        match &self.outcome {
            RouteOutcome::Found { path, .. } => path.as_slice(),
            RouteOutcome::NoPath => &[],
        }
    }

    /// Recorded and re-summed cost, if a path was found
    pub fn cost(&self) -> Option<CostReport<C>> {
        match &self.outcome {
            RouteOutcome::Found { cost, .. } => Some(*cost),
            RouteOutcome::NoPath => None,
        }
    }

    /// True when both cost figures disagree beyond the configured tolerance
    pub fn is_diverged(&self) -> bool {
        matches!(
            self.outcome,
            RouteOutcome::Found { check: CostCheck::Diverged { .. }, .. }
        )
    }
}


/// Validated graph plus everything needed to answer queries on it
///
/// Construction rejects bad input up front: invalid costs, labels that do not
/// round-trip through the codec, duplicate nodes and edges to unknown nodes.
/// Queries take `&self`, so one planner can answer any number of them.
#[derive(Clone, Debug)]
pub struct RoutePlanner<C> {
    snapshot: GraphSnapshot<C>,
    codec: LabelCodec,
    config: SearchConfig,
    index: NeighborIndex<C>,
}

impl<C> RoutePlanner<C>
where
    C: Float + Debug,
{

    pub fn new(snapshot: GraphSnapshot<C>, codec: LabelCodec, config: SearchConfig) -> Result<Self, RouteError> {
        snapshot.check_costs()?;

        // id -> position in the node list, also catches duplicates
        let mut ids: FxHashMap<NodeId, usize> = FxHashMap::default();
        let mut order = Vec::with_capacity(snapshot.nodes.len());
        for (position, node) in snapshot.nodes.iter().enumerate() {
            let id = codec.check_round_trip(&node.label)?;
            if ids.insert(id, position).is_some() {
                return Err(ConfigError::DuplicateLabel(node.label.clone()).into());
            }
            order.push(id);
        }

        for (index, edge) in snapshot.edges.iter().enumerate() {
            for node in [edge.source, edge.target] {
                if !ids.contains_key(&node) {
                    return Err(ConfigError::DanglingEdge { index, node }.into());
                }
            }
        }

        let index = NeighborIndex::build(order, &snapshot.edges);
        log::info!(
            "indexed graph: {} nodes, {} edges, policy {:?}",
            index.node_count(), index.edge_count(), config.policy
        );

        Ok(Self { snapshot, codec, config, index })
    }

    /// Route between the codec's reserved start and target nodes
    pub fn route_endpoints(&self) -> Result<Route<C>, RouteError> {
        self.route(&self.codec.start.label, &self.codec.target.label)
    }

    /// Shortest route from `start` to `target`, both given as node labels
    pub fn route(&self, start: &str, target: &str) -> Result<Route<C>, RouteError> {
        let start_id = self.endpoint(start)?;
        let target_id = self.endpoint(target)?;

        let run = search(&self.index, start_id, target_id, self.config.policy)?;
        let ids = shortest_path(&run.table, start_id, target_id)?;

        let outcome = if ids.is_empty() {
            log::info!("no path from `{}` to `{}`", start, target);
            RouteOutcome::NoPath
        } else {
            let path: Vec<String> = ids.iter().map(|&id| self.codec.to_label(id)).collect();

            let validator = CostValidator::new(&self.codec, &self.snapshot.edges);
            let cost = validator.report(&path, run.table.distance(target_id))?;
            let check = cost.check(self.config.tolerance);

            if let CostCheck::Diverged { recorded, summed } = check {
                log::warn!(
                    "{:?} route `{}` -> `{}`: recorded distance {:?} but path sums to {:?}",
                    run.policy, start, target, recorded, summed
                );
            } else {
                log::info!("route `{}` -> `{}`: {} hops, cost {:?}", start, target, path.len() - 1, cost.summed);
            }

            RouteOutcome::Found { path, cost, check }
        };

        Ok(Route {
            outcome,
            table: run.table,
            policy: run.policy,
            expansions: run.expansions,
        })
    }

    /// Resolve an endpoint label to a node of this graph
    fn endpoint(&self, label: &str) -> Result<NodeId, ConfigError> {
        let unknown = || ConfigError::UnknownEndpoint(label.to_string());
        let id = self.codec.to_id(label).map_err(|_| unknown())?;

        // `x5` decodes to 5 but is not the label of node 5
        if !self.index.contains(id) || self.codec.to_label(id) != label {
            return Err(unknown());
        }
        Ok(id)
    }
}
