//! The taxiing planner: a best-first joint search over aircraft
//! positions that finds a conflict-free, minimum-makespan movement plan.
mod heuristic;
mod search;
mod state;

pub use airport_ir::{Grid, Terrain};
pub use airport_utils::Cell;
pub use heuristic::Heuristic;
pub use search::{search, SearchResult};
pub use state::{successors, JointState};
