//! Error types for tipping-dynamics.

use std::fmt;

use thiserror::Error;
use tipping_graph::VertexId;

/// Result type for scoring and scheduling.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the transition rule and the schedulers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed state vector or vertex index.
    #[error(transparent)]
    Graph(#[from] tipping_graph::Error),

    /// An asynchronous update order that is not a permutation of the non-hub vertices.
    #[error("invalid update order: {0}")]
    InvalidOrder(OrderViolation),
}

/// Why an update order was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderViolation {
    /// Order length differs from the number of non-hub vertices
    WrongLength { expected: usize, actual: usize },
    /// A vertex appears more than once
    Duplicate(VertexId),
    /// The hub is never scheduled
    ContainsHub(VertexId),
    /// Not a vertex of the graph
    OutOfRange(VertexId),
}

impl fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderViolation::WrongLength { expected, actual } => {
                write!(f, "expected {expected} vertices, got {actual}")
            }
            OrderViolation::Duplicate(v) => write!(f, "{v} scheduled twice"),
            OrderViolation::ContainsHub(v) => write!(f, "hub {v} cannot be scheduled"),
            OrderViolation::OutOfRange(v) => write!(f, "{v} is not a vertex"),
        }
    }
}
