use std::fmt::Debug;

use num_traits::{Float, NumCast};

use crate::collections::FxHashMap;
use crate::errors::{IntegrityError, RouteError, ValidationError};
use crate::graph::labels::LabelCodec;
use crate::graph::{Edge, NodeId};


/// Outcome of comparing the recorded distance with the re-summed path cost
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostCheck<C> {
    Consistent,
    Diverged { recorded: C, summed: C },
}


/// Cost of a reconstructed path, as recorded by the search and as re-summed from the edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostReport<C> {
    pub recorded: C,
    pub summed: C,
}

impl<C: Float> CostReport<C> {

    /// Compare within an absolute `tolerance`
    pub fn check(&self, tolerance: f64) -> CostCheck<C> {
        let tolerance = <C as NumCast>::from(tolerance).unwrap_or_else(C::epsilon);
        if (self.recorded - self.summed).abs() <= tolerance {
            CostCheck::Consistent
        } else {
            CostCheck::Diverged { recorded: self.recorded, summed: self.summed }
        }
    }

    /// Same as `check`, but a divergence becomes an error
    pub fn ensure_consistent(&self, tolerance: f64) -> Result<(), ValidationError> {
        match self.check(tolerance) {
            CostCheck::Consistent => Ok(()),
            CostCheck::Diverged { recorded, summed } => Err(ValidationError::CostMismatch {
                recorded: recorded.to_f64().unwrap_or(f64::NAN),
                summed: summed.to_f64().unwrap_or(f64::NAN),
            }),
        }
    }
}


/// Re-sums path costs straight from the edge list
/// Independent from the neighbor index so a bad index cannot hide its own mistakes
pub struct CostValidator<'a, C> {
    codec: &'a LabelCodec,
    // unordered endpoint pair -> cheapest edge between them
    costs: FxHashMap<(NodeId, NodeId), C>,
}

impl<'a, C> CostValidator<'a, C>
where
    C: Float + Debug,
{

    pub fn new(codec: &'a LabelCodec, edges: &[Edge<C>]) -> Self {
        let mut costs: FxHashMap<(NodeId, NodeId), C> = FxHashMap::default();
        for edge in edges {
            costs
                .entry(edge.key())
                .and_modify(|c| *c = (*c).min(edge.cost))
                .or_insert(edge.cost);
        }
        Self { codec, costs }
    }

    /// Cheapest edge between `a` and `b`, in either direction
    pub fn edge_cost(&self, a: NodeId, b: NodeId) -> Option<C> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.costs.get(&key).copied()
    }

    /// Sum of edge costs along `path`
    /// Zero for a single-node path; a hop without an edge is an integrity error
    pub fn summed_cost(&self, path: &[String]) -> Result<C, RouteError> {
        let ids = path
            .iter()
            .map(|label| self.codec.to_id(label))
            .collect::<Result<Vec<_>, _>>()?;

        let mut total = C::zero();
        for (hop, pair) in ids.windows(2).enumerate() {
            match self.edge_cost(pair[0], pair[1]) {
                Some(cost) => total = total + cost,
                None => {
                    return Err(IntegrityError::MissingEdge {
                        from: path[hop].clone(),
                        to: path[hop + 1].clone(),
                    }
                    .into())
                }
            }
        }

        Ok(total)
    }

    /// Re-sum `path` and pair it with the distance the search recorded
    pub fn report(&self, path: &[String], recorded: C) -> Result<CostReport<C>, RouteError> {
        let summed = self.summed_cost(path)?;
        Ok(CostReport { recorded, summed })
    }
}
