use std::path::PathBuf;
use thiserror::Error;

/// A type alias for a result with an [`AirportError`] as the error type.
pub type AirportResult<T> = Result<T, AirportError>;

/// Errors produced while reading input, writing output, or driving the CLI.
///
/// The CSP and A* cores never return this type for "no solution": that
/// outcome is modeled as an empty collection / `None` (see the solvers'
/// own result types). `AirportError` is reserved for malformed input,
/// usage mistakes, and internal invariant violations.
#[derive(Error, Debug)]
pub enum AirportError {
    /// A line of an input file did not match the expected grammar.
    #[error("{path}:{line}: {msg}")]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },

    /// The input was syntactically fine but semantically inconsistent
    /// (e.g. a duplicate aircraft id, or a cell listed under two
    /// workshop kinds).
    #[error("{0}")]
    MalformedDomain(String),

    /// Wrong number or shape of CLI arguments.
    #[error("usage error: {0}")]
    Usage(String),

    /// An internal invariant was violated. This indicates a bug in one of
    /// the solvers, not bad input, and is the one error kind that is
    /// appropriate to treat as fatal.
    #[error("internal invariant violated: {0}")]
    Invariant(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
