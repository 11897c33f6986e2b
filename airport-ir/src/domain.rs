use airport_utils::{AirportError, AirportResult, Cell};
use std::collections::HashMap;

/// The role a cell plays in the maintenance scheduler's position domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PositionKind {
    /// Standard workshop: can perform type-1 tasks.
    Std,
    /// Specialist workshop: can perform type-1 and type-2 tasks.
    Spc,
    /// Parking: no tasks performed here.
    Prk,
}

/// The position domain `D = Std ∪ Spc ∪ Prk` shared by reference across
/// every CSP variable. Built once from parsed input; never mutated or
/// cloned for the lifetime of a search.
#[derive(Clone, Debug)]
pub struct Domain {
    /// All cells, in value-assignment order: every `Std` cell, then every
    /// `Spc` cell, then every `Prk` cell.
    cells: Vec<Cell>,
    kind: HashMap<Cell, PositionKind>,
}

impl Domain {
    pub fn new(std: Vec<Cell>, spc: Vec<Cell>, prk: Vec<Cell>) -> AirportResult<Self> {
        let mut kind = HashMap::with_capacity(std.len() + spc.len() + prk.len());
        let mut cells = Vec::with_capacity(std.len() + spc.len() + prk.len());
        for (group, k) in [
            (&std, PositionKind::Std),
            (&spc, PositionKind::Spc),
            (&prk, PositionKind::Prk),
        ] {
            for &c in group {
                if kind.insert(c, k).is_some() {
                    return Err(AirportError::MalformedDomain(format!(
                        "cell {c} appears in more than one position set"
                    )));
                }
                cells.push(c);
            }
        }
        Ok(Domain { cells, kind })
    }

    /// All cells in the domain, in value-assignment order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn kind(&self, c: Cell) -> Option<PositionKind> {
        self.kind.get(&c).copied()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.kind.contains_key(&c)
    }

    pub fn is_kind(&self, c: Cell, k: PositionKind) -> bool {
        self.kind(c) == Some(k)
    }

    pub fn is_workshop(&self, c: Cell) -> bool {
        matches!(
            self.kind(c),
            Some(PositionKind::Std) | Some(PositionKind::Spc)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_overlapping_sets() {
        let c = Cell::new(0, 0);
        let err = Domain::new(vec![c], vec![c], vec![]);
        assert!(err.is_err());
    }

    #[test]
    fn classifies_cells() {
        let std = Cell::new(0, 0);
        let spc = Cell::new(0, 1);
        let prk = Cell::new(0, 2);
        let d = Domain::new(vec![std], vec![spc], vec![prk]).unwrap();
        assert_eq!(d.kind(std), Some(PositionKind::Std));
        assert_eq!(d.kind(spc), Some(PositionKind::Spc));
        assert_eq!(d.kind(prk), Some(PositionKind::Prk));
        assert!(d.is_workshop(std));
        assert!(!d.is_workshop(prk));
        assert_eq!(d.kind(Cell::new(5, 5)), None);
    }
}
