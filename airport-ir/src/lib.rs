//! Shared grid and position-domain model used by both solvers.
//!
//! [`Grid`] answers traversability and adjacency questions for the taxiing
//! planner; [`Domain`] classifies the same kind of cells by workshop type
//! for the maintenance scheduler. Both are built once from parsed input and
//! are read-only for the remainder of a run.
mod domain;
mod grid;

pub use airport_utils::Cell;
pub use domain::{Domain, PositionKind};
pub use grid::{Grid, Terrain};
