//! Graph invariants that locate the phase transition.
//!
//! `rest_weight(v)` is the peer pressure on `v` from everyone but the hub.
//! `SN <= rest_weight(v) <= max_rest` for every non-hub `v` and every state,
//! so once the hub broadcast exceeds `max_rest` one synchronous step turns
//! the whole graph `Glory`.

use tipping_graph::{Graph, Score, StateVector, VertexId, Weight};

use crate::score::tally;
use crate::Result;

/// Total incoming weight to `v` from non-hub vertices.
pub fn rest_weight(graph: &Graph, v: VertexId) -> Result<Score> {
    let hub = graph.hub();
    let total = graph
        .incoming(v)?
        .filter(|&(u, _)| u != hub)
        .map(|(_, w)| Score::from(w))
        .sum();
    Ok(total)
}

/// Hub broadcast weight into `v`, `w[hub][v]`.
pub fn hub_weight(graph: &Graph, v: VertexId) -> Result<Weight> {
    Ok(graph.weight(graph.hub(), v)?)
}

/// Largest [`rest_weight`] over the non-hub vertices, `0` if there are none.
pub fn max_rest(graph: &Graph) -> Result<Score> {
    graph
        .non_hubs()
        .try_fold(0, |max, v| Ok(max.max(rest_weight(graph, v)?)))
}

/// Extra hub weight `v` still needs before it turns `Glory` under `s`.
///
/// Zero when `v` would already turn (ties included) and for the hub itself.
pub fn flip_margin(graph: &Graph, s: &StateVector, v: VertexId) -> Result<Score> {
    if graph.is_hub(v) {
        graph.check_state(s)?;
        return Ok(0);
    }
    let t = tally(graph, s, v)?;
    Ok(t.gnash.saturating_sub(t.glory))
}

/// Whether a hub broadcast of `weight` alone beats every vertex's peer pressure.
pub fn hub_dominates(weight: Weight, max_rest: Score) -> bool {
    Score::from(weight) > max_rest
}
