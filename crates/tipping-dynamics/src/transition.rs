//! The hub-pinned threshold rule.
//!
//! A non-hub vertex compares the weight of its `Glory` in-neighbors against
//! its `Gnash` in-neighbors, with the hub always read as `Glory`:
//!
//! ```text
//! next(v) = Gnash  if SG < SN
//!           Glory  otherwise (ties go to Glory)
//! ```
//!
//! The tie rule is asymmetric on purpose and must not be made symmetric:
//! the sharpness of the transition at `W = max_rest` depends on it.

use tipping_graph::{Graph, State, StateVector, VertexId};

use crate::score::{tally, Tally};
use crate::Result;

/// Copy of `s` with the hub forced to `Glory`. No other entry changes.
pub fn pin_hub_to_glory(graph: &Graph, s: &StateVector) -> Result<StateVector> {
    graph.check_state(s)?;
    let mut pinned = s.clone();
    pinned.set(graph.hub(), State::Glory)?;
    Ok(pinned)
}

/// Outcome of comparing the two scores.
pub const fn decide(tally: Tally) -> State {
    if tally.glory < tally.gnash {
        State::Gnash
    } else {
        State::Glory
    }
}

/// Next state of `v` given the snapshot `s`.
///
/// The hub always answers `Glory`.
pub fn next_state(graph: &Graph, s: &StateVector, v: VertexId) -> Result<State> {
    graph.check_state(s)?;
    graph.check_vertex(v)?;
    if graph.is_hub(v) {
        return Ok(State::Glory);
    }
    Ok(decide(tally(graph, s, v)?))
}
