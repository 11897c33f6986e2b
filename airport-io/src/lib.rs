//! Text I/O for both solvers: the maintenance-instance and taxi-map file
//! formats, plus the plan/statistics files the taxiing planner emits.
pub mod maintenance;
pub mod taxi;
