use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::graph::NodeId;


/// Per-node bookkeeping for one search
/// distance: best known cost from the start, +inf until reached
/// visited: node has been expanded
/// parent: predecessor on the best known route, None for the start and for unreached nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathState<C> {
    pub distance: C,
    pub visited: bool,
    pub parent: Option<NodeId>,
}

impl<C: Float> PathState<C> {
    fn unreached() -> Self {
        Self { distance: C::infinity(), visited: false, parent: None }
    }

    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }
}


/// Path state for every node of the graph, keyed by node id
///
/// Fully populated on creation. Only the engine mutates it, through
/// `relax` and `mark_visited`; reconstruction and validation read it.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStateTable<C> {
    states: FxIndexMap<NodeId, PathState<C>>,
}

impl<C: Float> PathStateTable<C> {

    /// Every node at +inf except `start`, which sits at zero
    pub fn new<I>(nodes: I, start: NodeId) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut states: FxIndexMap<NodeId, PathState<C>> = nodes
            .into_iter()
            .map(|id| (id, PathState::unreached()))
            .collect();
        states.insert(start, PathState { distance: C::zero(), visited: false, parent: None });
        Self { states }
    }

    pub fn get(&self, id: NodeId) -> Option<&PathState<C>> {
        self.states.get(&id)
    }

    /// Distance of `id`, +inf for unknown ids
    pub fn distance(&self, id: NodeId) -> C {
        self.states.get(&id).map(|s| s.distance).unwrap_or_else(C::infinity)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.states.get(&id).and_then(|s| s.parent)
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.states.get(&id).is_some_and(|s| s.visited)
    }

    pub(crate) fn mark_visited(&mut self, id: NodeId) {
        if let Some(state) = self.states.get_mut(&id) {
            state.visited = true;
        }
    }

    /// Record `candidate` for `id` via `parent` if it is strictly shorter
    /// Ties keep the route found first. Returns true when the record changed.
    pub(crate) fn relax(&mut self, id: NodeId, parent: NodeId, candidate: C) -> bool {
        match self.states.get_mut(&id) {
            Some(state) if candidate < state.distance => {
                state.distance = candidate;
                state.parent = Some(parent);
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PathState<C>)> {
        self.states.iter().map(|(&id, state)| (id, state))
    }

    pub fn visited_count(&self) -> usize {
        self.states.values().filter(|s| s.visited).count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>, distance: C) {
        if let Some(state) = self.states.get_mut(&id) {
            state.parent = parent;
            state.distance = distance;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let table: PathStateTable<f64> = PathStateTable::new([1, 2, 3], 2);
        assert_eq!(table.len(), 3);
        assert_eq!(table.distance(2), 0.0);
        assert_eq!(table.distance(1), f64::INFINITY);
        assert!(!table.get(1).unwrap().is_reached());
        assert!(table.get(2).unwrap().is_reached());
        assert!(table.iter().all(|(_, s)| !s.visited && s.parent.is_none()));
    }

    #[test]
    fn test_relax_only_on_strict_improvement() {
        let mut table: PathStateTable<f64> = PathStateTable::new([1, 2, 3], 1);

        assert!(table.relax(3, 1, 5.0));
        assert_eq!(table.parent(3), Some(1));

        // equal cost keeps the first parent
        assert!(!table.relax(3, 2, 5.0));
        assert_eq!(table.parent(3), Some(1));

        // worse cost is ignored
        assert!(!table.relax(3, 2, 6.0));
        assert_eq!(table.distance(3), 5.0);

        assert!(table.relax(3, 2, 4.5));
        assert_eq!(table.parent(3), Some(2));
        assert_eq!(table.distance(3), 4.5);
    }

    #[test]
    fn test_start_never_relaxed() {
        let mut table: PathStateTable<f64> = PathStateTable::new([1, 2], 1);
        assert!(!table.relax(1, 2, 0.0));
        assert_eq!(table.parent(1), None);
    }

    #[test]
    fn test_unknown_node() {
        let mut table: PathStateTable<f64> = PathStateTable::new([1], 1);
        assert!(!table.relax(8, 1, 1.0));
        assert!(table.get(8).is_none());
        assert!(table.distance(8).is_infinite());
        table.mark_visited(8);
        assert!(!table.is_visited(8));
    }

    #[test]
    fn test_visited_count() {
        let mut table: PathStateTable<f64> = PathStateTable::new([1, 2, 3], 1);
        table.mark_visited(1);
        table.mark_visited(3);
        assert_eq!(table.visited_count(), 2);
        assert!(table.is_visited(3));
        assert!(!table.is_visited(2));
    }
}
