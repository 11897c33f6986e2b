//! The maintenance scheduler: a backtracking CSP solver that enumerates
//! every feasible assignment of aircraft to workshop/parking cells across
//! a maintenance day.
mod aircraft;
mod constraint;
mod search;

pub use aircraft::{Aircraft, AircraftKind};
pub use constraint::Constraint;
pub use search::{Scheduler, Solution};
