use crate::aircraft::Aircraft;
use crate::constraint::Constraint;
use airport_ir::{Domain, PositionKind};
use airport_utils::Cell;

/// A single feasible assignment: `solution[a][t]` is the cell aircraft `a`
/// occupies in slot `t`.
pub type Solution = Vec<Vec<Cell>>;

/// The maintenance scheduler. Built once from a parsed instance and then
/// driven by [`Scheduler::enumerate`], which collects every solution.
pub struct Scheduler<'d> {
    domain: &'d Domain,
    aircraft: Vec<Aircraft>,
    slots: usize,
    rows: usize,
    cols: usize,
}

impl<'d> Scheduler<'d> {
    pub fn new(
        domain: &'d Domain,
        aircraft: Vec<Aircraft>,
        slots: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Scheduler {
            domain,
            aircraft,
            slots,
            rows,
            cols,
        }
    }

    /// Enumerates every assignment satisfying all six constraint families.
    /// Returns an empty `Vec` if the instance is infeasible -- that is a
    /// valid result, not an error.
    pub fn enumerate(&self) -> Vec<Solution> {
        let mut search = Search {
            scheduler: self,
            assignment: vec![vec![None; self.slots]; self.aircraft.len()],
            solutions: Vec::new(),
        };
        search.assign_aircraft(0);
        log::info!(
            "maintenance scheduler: {} solution(s) for {} aircraft over {} slots",
            search.solutions.len(),
            self.aircraft.len(),
            self.slots
        );
        search.solutions
    }

    /// The four in-grid neighbours of `c`, bounds-checked against the
    /// matrix dimensions but *not* filtered by domain membership --
    /// suffocation cares about geometric adjacency, not workshop type.
    fn in_grid_neighbours(&self, c: Cell) -> Vec<Cell> {
        c.raw_neighbours4()
            .into_iter()
            .flatten()
            .filter(|n| n.row < self.rows && n.col < self.cols)
            .collect()
    }
}

struct Search<'d, 's> {
    scheduler: &'s Scheduler<'d>,
    assignment: Vec<Vec<Option<Cell>>>,
    solutions: Vec<Solution>,
}

impl<'d, 's> Search<'d, 's> {
    /// Recurses over aircraft in declaration order. Each aircraft's slots
    /// are filled completely (by `assign_slot`) before moving to the next
    /// aircraft -- the variable order required so that a single aircraft's
    /// temporal constraint sees a contiguous, fully-assigned row.
    fn assign_aircraft(&mut self, a: usize) {
        if a == self.scheduler.aircraft.len() {
            self.solutions.push(
                self.assignment
                    .iter()
                    .map(|row| row.iter().map(|c| c.unwrap()).collect())
                    .collect(),
            );
            return;
        }
        self.assign_slot(a, 0);
    }

    fn assign_slot(&mut self, a: usize, t: usize) {
        if t == self.scheduler.slots {
            if self.task_order_ok(a) {
                self.assign_aircraft(a + 1);
            } else {
                log::debug!(
                    "pruned by {:?}: aircraft {}",
                    Constraint::TaskOrder { aircraft: a },
                    self.scheduler.aircraft[a].id
                );
            }
            return;
        }
        for &cell in self.scheduler.domain.cells() {
            self.assignment[a][t] = Some(cell);
            if self.adj_transition_ok(a, t) && self.slot_partial_ok(a, t) {
                self.assign_slot(a, t + 1);
            }
        }
        self.assignment[a][t] = None;
    }

    /// Constraint 6: either equal, workshop-to-workshop, or
    /// workshop-to-parking. Parking-to-parking is forbidden (see
    /// DESIGN.md for the open-question resolution).
    fn adj_transition_ok(&self, a: usize, t: usize) -> bool {
        if t == 0 {
            return true;
        }
        let domain = self.scheduler.domain;
        let prev = self.assignment[a][t - 1].unwrap();
        let cur = self.assignment[a][t].unwrap();
        if prev == cur {
            return true;
        }
        let ok = (domain.is_workshop(prev) && domain.is_workshop(cur))
            || (domain.is_workshop(prev) && domain.is_kind(cur, PositionKind::Prk))
            || (domain.is_kind(prev, PositionKind::Prk) && domain.is_workshop(cur));
        if !ok {
            log::debug!(
                "pruned by {:?}",
                Constraint::AdjTransition {
                    aircraft: a,
                    slot: t
                }
            );
        }
        ok
    }

    /// Constraints 1-4, checked against every aircraft assigned so far for
    /// slot `t` (aircraft `0..=a`). Each check is monotone: once violated
    /// by a subset of the eventual occupants, it stays violated once the
    /// remaining aircraft are assigned. By the time the last aircraft is
    /// reached this check has seen every occupant of the slot, so no
    /// separate whole-slot pass is needed.
    fn slot_partial_ok(&mut self, a: usize, t: usize) -> bool {
        let domain = self.scheduler.domain;
        let occupants: Vec<(usize, Cell)> = (0..=a)
            .filter_map(|i| self.assignment[i][t].map(|c| (i, c)))
            .collect();

        // Constraint 1: workshop capacity <= 2.
        for &(_, c) in &occupants {
            if domain.is_workshop(c) {
                let count = occupants.iter().filter(|&&(_, o)| o == c).count();
                if count > 2 {
                    log::debug!("pruned by {:?}: cell {c}", Constraint::Capacity);
                    return false;
                }
            }
        }

        // Constraint 2: at most one Jumbo per workshop cell.
        for &(i, c) in &occupants {
            if domain.is_workshop(c) && self.scheduler.aircraft[i].is_jumbo() {
                let jumbo_count = occupants
                    .iter()
                    .filter(|&&(j, o)| o == c && self.scheduler.aircraft[j].is_jumbo())
                    .count();
                if jumbo_count > 1 {
                    log::debug!("pruned by {:?}: cell {c}", Constraint::JumboUnique);
                    return false;
                }
            }
        }

        // Constraint 3: no suffocation.
        for &(_, c) in &occupants {
            let neighbours = self.scheduler.in_grid_neighbours(c);
            if !neighbours.is_empty()
                && neighbours
                    .iter()
                    .all(|n| occupants.iter().any(|&(_, o)| o == *n))
            {
                log::debug!("pruned by {:?}: cell {c}", Constraint::NoSuffocate);
                return false;
            }
        }

        // Constraint 4: Jumbo separation (Chebyshev distance > 1).
        let jumbos: Vec<Cell> = occupants
            .iter()
            .filter(|&&(i, _)| self.scheduler.aircraft[i].is_jumbo())
            .map(|&(_, c)| c)
            .collect();
        for i in 0..jumbos.len() {
            for j in (i + 1)..jumbos.len() {
                if jumbos[i].chebyshev(jumbos[j]) <= 1 {
                    log::debug!("pruned by {:?}", Constraint::JumboSeparate);
                    return false;
                }
            }
        }

        true
    }

    /// Constraint 5, evaluated once an aircraft's full temporal sequence
    /// is assigned.
    fn task_order_ok(&self, a: usize) -> bool {
        let aircraft = &self.scheduler.aircraft[a];
        let domain = self.scheduler.domain;
        let seq: Vec<Cell> = self.assignment[a].iter().map(|c| c.unwrap()).collect();
        let (mut r1, mut r2) = (aircraft.t1, aircraft.t2);

        for cell in seq {
            if r1 == 0 && r2 == 0 {
                if !domain.is_kind(cell, PositionKind::Prk) {
                    return false;
                }
                continue;
            }
            if aircraft.strict_order {
                if r2 > 0 {
                    if !domain.is_kind(cell, PositionKind::Spc) {
                        return false;
                    }
                    r2 -= 1;
                } else {
                    if !domain.is_workshop(cell) {
                        return false;
                    }
                    r1 -= 1;
                }
            } else if r1 > 0 && domain.is_kind(cell, PositionKind::Std) {
                r1 -= 1;
            } else if r2 > 0 && domain.is_kind(cell, PositionKind::Spc) {
                r2 -= 1;
            } else if r1 > 0 && domain.is_kind(cell, PositionKind::Spc) {
                // A specialist workshop may absorb a type-1 task once no
                // type-2 tasks remain.
                r1 -= 1;
            } else if (r1 > 0 || r2 > 0) && !domain.is_workshop(cell) {
                return false;
            }
        }

        r1 == 0 && r2 == 0
    }
}
