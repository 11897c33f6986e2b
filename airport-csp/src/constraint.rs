//! Constraints are represented as a tagged enum rather than anonymous
//! closures, so that a prune can always name which rule fired (useful for
//! both debug logging and for reasoning about completeness) instead of
//! capturing a mutating loop index inside a closure.

/// The six constraint families the scheduler enforces. Each per-slot
/// variant applies to every slot independently; `TaskOrder` and
/// `AdjTransition` apply per aircraft.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Constraint {
    /// At most 2 aircraft per workshop cell in a slot.
    Capacity,
    /// At most 1 Jumbo per workshop cell in a slot.
    JumboUnique,
    /// No occupied cell may have every in-grid neighbour occupied.
    NoSuffocate,
    /// Two Jumbos must keep Chebyshev distance > 1 in a slot.
    JumboSeparate,
    /// An aircraft's full temporal sequence must complete its tasks and
    /// end in parking, honoring strict ordering if required.
    TaskOrder { aircraft: usize },
    /// Two consecutive slots for one aircraft must be equal, a
    /// workshop-to-workshop move, or a workshop-to-parking move.
    AdjTransition { aircraft: usize, slot: usize },
}
