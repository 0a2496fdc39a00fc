use crate::errors::IntegrityError;
use crate::graph::NodeId;
use super::state::PathStateTable;

use num_traits::Float;


/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as node ids from start to goal,
/// or an empty vec when the goal was never reached
/// table: PathStateTable<C> - final state of a search
/// start: NodeId - root of the parent tree
/// goal: NodeId - node to trace back from
pub(crate) fn shortest_path<C>(table: &PathStateTable<C>, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>, IntegrityError>
where
    C: Float,
{

    if !table.distance(goal).is_finite() {
        return Ok(Vec::new());
    }

    // a well formed tree never needs more links than there are nodes
    let limit = table.len();
    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while let Some(parent) = table.parent(current) {
        if path.len() > limit {
            return Err(IntegrityError::ParentCycle { from: goal, limit });
        }
        if table.get(parent).is_none() {
            return Err(IntegrityError::UnknownParent { node: current, parent });
        }
        path.push(parent);
        current = parent;
    }

    if current != start {
        return Err(IntegrityError::DetachedChain { root: current, start });
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
