//! Error types for tipping-sweep.

use thiserror::Error;

/// Result type for sweep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a sweep.
#[derive(Debug, Error)]
pub enum Error {
    /// Scheduler or transition rule failure
    #[error(transparent)]
    Dynamics(#[from] tipping_dynamics::Error),

    /// Malformed graph or generator parameters
    #[error(transparent)]
    Graph(#[from] tipping_graph::Error),

    /// At least one asynchronous trial per step is required
    #[error("async_trials must be at least 1")]
    NoTrials,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
