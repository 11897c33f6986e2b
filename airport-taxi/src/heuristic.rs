use crate::state::JointState;
use airport_ir::Grid;
use airport_utils::Cell;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// A goal-distance lookup table for one aircraft, keyed by cell.
/// Unreachable cells simply have no entry.
type DistanceTable = HashMap<Cell, u32>;

/// The two admissible heuristics the planner can use, unified behind one
/// interface so the search engine never has to know which is active.
pub enum Heuristic {
    /// H1: max Manhattan distance to each aircraft's goal.
    Manhattan,
    /// H2: max true shortest-path distance, ignoring other aircraft.
    BfsDistance(Vec<DistanceTable>),
}

impl Heuristic {
    pub fn manhattan() -> Self {
        Heuristic::Manhattan
    }

    /// Builds H2's per-aircraft BFS distance tables, rooted at each
    /// aircraft's goal, over the grid's traversable adjacency graph.
    pub fn bfs_distance(grid: &Grid, goals: &[Cell]) -> Self {
        let graph = grid.adjacency_graph();
        let tables = goals
            .iter()
            .map(|&goal| {
                log::debug!("precomputing BFS distance table rooted at {goal}");
                bfs_from(&graph, goal)
            })
            .collect();
        Heuristic::BfsDistance(tables)
    }

    /// Returns `None` iff some aircraft cannot reach its goal at all --
    /// the instance is infeasible regardless of conflicts.
    pub fn estimate(&self, state: &JointState, goals: &[Cell]) -> Option<u32> {
        match self {
            Heuristic::Manhattan => Some(
                state
                    .positions()
                    .iter()
                    .zip(goals)
                    .map(|(&p, &g)| p.manhattan(g))
                    .max()
                    .unwrap_or(0),
            ),
            Heuristic::BfsDistance(tables) => {
                let mut worst = 0;
                for (table, &p) in tables.iter().zip(state.positions()) {
                    worst = worst.max(*table.get(&p)?);
                }
                Some(worst)
            }
        }
    }
}

fn bfs_from(graph: &petgraph::graphmap::UnGraphMap<Cell, ()>, goal: Cell) -> DistanceTable {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(goal, 0);
    queue.push_back(goal);
    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        for n in graph.neighbors(c) {
            if let Entry::Vacant(e) = dist.entry(n) {
                e.insert(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use airport_ir::Terrain;

    fn open_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(vec![vec![Terrain::Free; cols]; rows])
    }

    #[test]
    fn h2_dominates_h1() {
        let grid = open_grid(3, 3);
        let goal = Cell::new(2, 2);
        let h1 = Heuristic::manhattan();
        let h2 = Heuristic::bfs_distance(&grid, &[goal]);
        for row in 0..3 {
            for col in 0..3 {
                let state = JointState::new(vec![Cell::new(row, col)]);
                let v1 = h1.estimate(&state, &[goal]).unwrap();
                let v2 = h2.estimate(&state, &[goal]).unwrap();
                assert!(v2 >= v1);
            }
        }
    }

    #[test]
    fn unreachable_goal_is_none() {
        let grid = Grid::new(vec![vec![Terrain::Free, Terrain::Blocked, Terrain::Free]]);
        let h2 = Heuristic::bfs_distance(&grid, &[Cell::new(0, 2)]);
        let state = JointState::new(vec![Cell::new(0, 0)]);
        assert_eq!(h2.estimate(&state, &[Cell::new(0, 2)]), None);
    }
}
