//! Single-source shortest paths over static, weighted, undirected graphs.
//!
//! A [`RoutePlanner`] takes an already-parsed [`GraphSnapshot`], checks it
//! against a [`LabelCodec`], and answers start/target queries with a
//! [`Route`]: the path as node labels plus its cost, both as recorded by the
//! search and as re-summed from the edge list.
//!
//! ```
//! use waypoint::{Edge, GraphSnapshot, LabelCodec, Node, RoutePlanner, SearchConfig};
//!
//! let snapshot = GraphSnapshot::new(
//!     vec![Node::new("Erde"), Node::new("node_7"), Node::new("b3-r7-r4nd7")],
//!     vec![Edge::new(18, 7, 2.0), Edge::new(7, 246, 3.0)],
//! );
//! let planner = RoutePlanner::new(snapshot, LabelCodec::default(), SearchConfig::default())?;
//! let route = planner.route_endpoints()?;
//!
//! assert_eq!(route.path(), &["Erde", "node_7", "b3-r7-r4nd7"]);
//! assert_eq!(route.cost().map(|c| c.summed), Some(5.0));
//! # Ok::<(), waypoint::RouteError>(())
//! ```

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod planner;

pub use errors::{ConfigError, IntegrityError, RouteError, ValidationError};
pub use graph::labels::{LabelCodec, ReservedLabel};
pub use graph::neighbors::{NeighborEntry, NeighborIndex};
pub use graph::{Edge, GraphSnapshot, Node, NodeId};
pub use graph_algos::{
    search, CostCheck, CostReport, CostValidator, PathState, PathStateTable, SearchRun,
    SelectionPolicy,
};
pub use planner::{Route, RouteOutcome, RoutePlanner, SearchConfig};
