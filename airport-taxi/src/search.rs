use crate::heuristic::Heuristic;
use crate::state::{successors, JointState};
use airport_ir::Grid;
use airport_utils::Cell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

/// The result of a successful search: one trajectory per aircraft,
/// `plan[i][k]` being aircraft `i`'s position at tick `k`.
pub struct SearchResult {
    pub plan: Vec<Vec<Cell>>,
    pub makespan: u32,
    pub h0: u32,
    pub expanded: u32,
    pub wall_time: Duration,
}

/// Runs a best-first joint search from `starts` to `goals` on `grid`,
/// using `heuristic` to estimate remaining cost. Returns `None` if the
/// frontier empties before a goal state is reached -- that is a valid
/// "no solution" result, not an error.
pub fn search(
    grid: &Grid,
    starts: &[Cell],
    goals: &[Cell],
    heuristic: &Heuristic,
) -> Option<SearchResult> {
    let start_time = Instant::now();
    let s0 = JointState::new(starts.to_vec());

    if starts.is_empty() {
        return Some(SearchResult {
            plan: Vec::new(),
            makespan: 0,
            h0: 0,
            expanded: 0,
            wall_time: start_time.elapsed(),
        });
    }

    let h0 = heuristic.estimate(&s0, goals)?;

    // Frontier keyed on (f, g): a min-heap on f, ties broken toward the
    // deeper node (larger g), via `Reverse(f)` so `BinaryHeap`'s natural
    // max-ordering pops the smallest f, and comparing `g` directly on a
    // tie pops the larger g first.
    let mut open: BinaryHeap<(Reverse<u32>, u32, JointState)> = BinaryHeap::new();
    open.push((Reverse(h0), 0, s0.clone()));

    let mut visited: HashSet<JointState> = HashSet::new();
    visited.insert(s0.clone());
    let mut parent: HashMap<JointState, JointState> = HashMap::new();

    let mut expanded = 0u32;

    while let Some((_, g, state)) = open.pop() {
        expanded += 1;

        if state.is_goal(goals) {
            let plan = reconstruct(&state, &parent, starts.len());
            log::info!("taxi planner: makespan={g} h0={h0} expanded={expanded}");
            return Some(SearchResult {
                plan,
                makespan: g,
                h0,
                expanded,
                wall_time: start_time.elapsed(),
            });
        }

        for succ in successors(grid, &state) {
            if visited.contains(&succ) {
                continue;
            }
            let Some(hn) = heuristic.estimate(&succ, goals) else {
                continue; // can never reach the goal from here
            };
            let gn = g + 1;
            visited.insert(succ.clone());
            parent.insert(succ.clone(), state.clone());
            open.push((Reverse(gn + hn), gn, succ));
        }
    }

    log::info!("taxi planner: no solution, expanded={expanded}");
    None
}

fn reconstruct(
    goal_state: &JointState,
    parent: &HashMap<JointState, JointState>,
    n: usize,
) -> Vec<Vec<Cell>> {
    let mut path = vec![goal_state.clone()];
    let mut cur = goal_state;
    while let Some(prev) = parent.get(cur) {
        path.push(prev.clone());
        cur = path.last().unwrap();
    }
    path.reverse();

    let mut trajectories = vec![Vec::with_capacity(path.len()); n];
    for state in &path {
        for (i, &c) in state.positions().iter().enumerate() {
            trajectories[i].push(c);
        }
    }
    trajectories
}

#[cfg(test)]
mod tests {
    use super::*;
    use airport_ir::Terrain;

    fn corridor(colors: &str) -> Grid {
        let row = colors
            .split(';')
            .map(|c| Terrain::from_code(c).unwrap())
            .collect();
        Grid::new(vec![row])
    }

    /// A 3-cell corridor `B A B` with a dead-end pocket hanging off the
    /// no-wait door, wide enough for one aircraft to duck aside while
    /// the other passes through. A pure 1-wide corridor can never let
    /// two aircraft cross (no cell to step into out of the way), so
    /// demonstrating a real wait-to-pass requires this side pocket.
    fn corridor_with_passing_pocket() -> Grid {
        Grid::new(vec![
            vec![Terrain::Free, Terrain::NoWait, Terrain::Free],
            vec![Terrain::Blocked, Terrain::Free, Terrain::Blocked],
        ])
    }

    #[test]
    fn swap_on_a_corridor_has_no_solution() {
        let grid = corridor("B;B;B");
        let starts = vec![Cell::new(0, 0), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 2), Cell::new(0, 0)];
        let h = Heuristic::manhattan();
        assert!(search(&grid, &starts, &goals, &h).is_none());
    }

    #[test]
    fn wait_is_required_to_let_the_other_aircraft_pass() {
        // The only way through the no-wait door is one at a time; one
        // aircraft must duck into the pocket (or hold back) while the
        // other crosses.
        let grid = corridor_with_passing_pocket();
        let starts = vec![Cell::new(0, 0), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 2), Cell::new(0, 0)];
        let h = Heuristic::manhattan();
        let result = search(&grid, &starts, &goals, &h).unwrap();
        assert!(result
            .plan
            .iter()
            .any(|trajectory| trajectory.windows(2).any(|w| w[0] == w[1])));
        for trajectory in &result.plan {
            for w in trajectory.windows(2) {
                if w[0] == w[1] {
                    assert!(grid.can_wait(w[0]));
                }
            }
        }
    }

    #[test]
    fn aircraft_already_at_goal_is_a_single_state_plan() {
        let grid = corridor("B;B;B");
        let starts = vec![Cell::new(0, 1)];
        let goals = vec![Cell::new(0, 1)];
        let h = Heuristic::manhattan();
        let result = search(&grid, &starts, &goals, &h).unwrap();
        assert_eq!(result.makespan, 0);
        assert_eq!(result.plan, vec![vec![Cell::new(0, 1)]]);
    }

    #[test]
    fn zero_aircraft_is_an_empty_plan() {
        let grid = corridor("B;B;B");
        let h = Heuristic::manhattan();
        let result = search(&grid, &[], &[], &h).unwrap();
        assert_eq!(result.makespan, 0);
        assert!(result.plan.is_empty());
    }

    #[test]
    fn h1_and_h2_agree_on_makespan() {
        let grid = corridor_with_passing_pocket();
        let starts = vec![Cell::new(0, 0), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 2), Cell::new(0, 0)];
        let h1 = Heuristic::manhattan();
        let h2 = Heuristic::bfs_distance(&grid, &goals);
        let r1 = search(&grid, &starts, &goals, &h1).unwrap();
        let r2 = search(&grid, &starts, &goals, &h2).unwrap();
        assert_eq!(r1.makespan, r2.makespan);
        assert!(r2.expanded <= r1.expanded);
    }

    #[test]
    fn plan_is_conflict_free() {
        let grid = corridor_with_passing_pocket();
        let starts = vec![Cell::new(0, 0), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 2), Cell::new(0, 0)];
        let h = Heuristic::manhattan();
        let result = search(&grid, &starts, &goals, &h).unwrap();
        let steps = result.plan[0].len();
        for t in 1..steps {
            let prev: Vec<Cell> = result.plan.iter().map(|p| p[t - 1]).collect();
            let next: Vec<Cell> = result.plan.iter().map(|p| p[t]).collect();
            assert_ne!(next[0], next[1]);
            assert!(!(prev[0] == next[1] && prev[1] == next[0]));
        }
    }
}
