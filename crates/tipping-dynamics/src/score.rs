//! Weighted in-neighbor counts.

use tipping_graph::{Graph, Score, State, StateVector, VertexId};

use crate::Result;

/// Both scores of one vertex, read with the hub pinned to `Glory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub glory: Score,
    pub gnash: Score,
}

impl Tally {
    /// Score of the given state.
    pub const fn of(&self, state: State) -> Score {
        match state {
            State::Glory => self.glory,
            State::Gnash => self.gnash,
        }
    }
}

/// Sum of `w[u][v]` over every `u` with `s[u] == x`.
///
/// Reads `s` exactly as given; the hub is not pinned here.
pub fn score(graph: &Graph, s: &StateVector, x: State, v: VertexId) -> Result<Score> {
    graph.check_state(s)?;
    let total = graph
        .incoming(v)?
        .zip(s.as_slice())
        .filter(|&(_, &su)| su == x)
        .map(|((_, w), _)| Score::from(w))
        .sum();
    Ok(total)
}

/// Glory and Gnash scores of `v` in one pass over its incoming column.
///
/// The hub always counts as `Glory`, whatever `s` says about it. This is the
/// score of `pin_hub_to_glory(s)` without materializing the copy.
pub fn tally(graph: &Graph, s: &StateVector, v: VertexId) -> Result<Tally> {
    graph.check_state(s)?;
    let hub = graph.hub();
    let mut tally = Tally::default();
    for ((u, w), &su) in graph.incoming(v)?.zip(s.as_slice()) {
        let state = if u == hub { State::Glory } else { su };
        match state {
            State::Glory => tally.glory += Score::from(w),
            State::Gnash => tally.gnash += Score::from(w),
        }
    }
    Ok(tally)
}
