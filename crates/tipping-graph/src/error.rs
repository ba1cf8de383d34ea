//! Error types for tipping-graph.

use thiserror::Error;

/// Result type for graph and state vector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a graph or state vector is malformed or misused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A state vector does not cover exactly the graph's vertices.
    #[error("invalid state vector: expected {expected} entries, got {actual}")]
    InvalidState { expected: usize, actual: usize },

    /// A vertex index outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// A graph needs at least the hub vertex.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// The `V x V` weight matrix does not fit in memory addressing.
    #[error("{0} vertices is too many for a dense weight matrix")]
    TooManyVertices(usize),

    /// The hub index is not a vertex of the graph.
    #[error("hub {hub} out of range for {vertex_count} vertices")]
    HubOutOfRange { hub: usize, vertex_count: usize },

    /// A weight matrix row has the wrong length.
    #[error("weight matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    /// Edge probability must be a finite value in `[0, 1]`.
    #[error("edge probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    /// Random edge weights are drawn from `[1, max_weight]`.
    #[error("max edge weight must be at least 1")]
    InvalidMaxWeight,
}
