pub mod engine;
pub mod state;
pub mod validate;
mod shortest_path;

pub(crate) use shortest_path::shortest_path;

pub use engine::{search, SearchRun, SelectionPolicy};
pub use state::{PathState, PathStateTable};
pub use validate::{CostCheck, CostReport, CostValidator};
