/// An aircraft's maneuverability class. Jumbos are subject to the stricter
/// spatial constraints in `constraint.rs`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AircraftKind {
    Jmb,
    Std,
}

/// An immutable maintenance-day record for one aircraft.
#[derive(Clone, Debug)]
pub struct Aircraft {
    pub id: String,
    pub kind: AircraftKind,
    /// If true, all type-2 tasks must be completed before any type-1 task.
    pub strict_order: bool,
    /// Number of pending type-1 tasks (performable in `Std` or `Spc`).
    pub t1: u32,
    /// Number of pending type-2 tasks (performable only in `Spc`).
    pub t2: u32,
}

impl Aircraft {
    pub fn new(
        id: impl Into<String>,
        kind: AircraftKind,
        strict_order: bool,
        t1: u32,
        t2: u32,
    ) -> Self {
        Aircraft {
            id: id.into(),
            kind,
            strict_order,
            t1,
            t2,
        }
    }

    pub fn is_jumbo(&self) -> bool {
        self.kind == AircraftKind::Jmb
    }
}
