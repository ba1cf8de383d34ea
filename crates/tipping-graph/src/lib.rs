//! Tipping Graph
//!
//! Weighted directed graphs with a single distinguished hub vertex, and the
//! two-state vectors that live on them.
//!
//! # Model
//!
//! - `w[u][v]` is the non-negative influence of `u` on `v`
//! - The hub `g` broadcasts to every other vertex with one uniform weight
//! - Every vertex holds either `Glory` (the hub's state) or `Gnash`
//!
//! The graph is built once, usually by [`generate`], and afterwards only the
//! hub's outgoing row changes.

mod error;
mod generator;
mod graph;
mod state;

pub use error::{Error, Result};
pub use generator::{generate, RandomGraphConfig};
pub use graph::{Graph, VertexId};
pub use state::{State, StateVector};

/// Edge weight.
pub type Weight = u32;

/// Accumulated weight over a column. Wide enough for `V * Weight::MAX`.
pub type Score = u64;

// A column sum of `u32` weights must not overflow the score type
const _: () = assert!(Score::BITS >= 2 * Weight::BITS);
