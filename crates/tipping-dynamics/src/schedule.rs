//! Synchronous and asynchronous update schedules.
//!
//! # Synchronous
//!
//! Every non-hub vertex reads the same snapshot `s0`; nobody sees another
//! vertex's new value within the step.
//!
//! # Asynchronous
//!
//! One pass over the non-hub vertices in a given order, writing each result
//! back before the next vertex is evaluated. Later vertices see earlier
//! updates, so the outcome depends on the order.

use rand::seq::SliceRandom;
use rand::Rng;
use tipping_graph::{Graph, State, StateVector, VertexId};

use crate::error::OrderViolation;
use crate::transition::next_state;
use crate::{Error, Result};

/// Result of one synchronous step.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    /// State after the step; the hub is `Glory`
    pub state: StateVector,
    /// Fraction of non-hub vertices in `Glory`
    pub glory_fraction: f64,
}

/// Result of one asynchronous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncOutcome {
    /// State after the pass
    pub state: StateVector,
    /// Every non-hub vertex ended in `Glory`
    pub all_glory: bool,
}

/// One synchronous update of every non-hub vertex from `s0`.
pub fn sync_step(graph: &Graph, s0: &StateVector) -> Result<SyncOutcome> {
    graph.check_state(s0)?;
    let mut next = s0.clone();
    next.set(graph.hub(), State::Glory)?;
    for v in graph.non_hubs() {
        next.set(v, next_state(graph, s0, v)?)?;
    }
    let glory_fraction = glory_fraction(graph, &next);
    Ok(SyncOutcome {
        state: next,
        glory_fraction,
    })
}

/// One asynchronous pass from `s0`, updating vertices in `order`.
///
/// `order` must list every non-hub vertex exactly once.
pub fn async_pass(graph: &Graph, s0: &StateVector, order: &[VertexId]) -> Result<AsyncOutcome> {
    graph.check_state(s0)?;
    check_order(graph, order)?;

    let mut s = s0.clone();
    for &v in order {
        let next = next_state(graph, &s, v)?;
        s.set(v, next)?;
    }
    let all_glory = non_hub_glory(graph, &s) == graph.non_hub_count();
    Ok(AsyncOutcome { state: s, all_glory })
}

/// Uniformly random permutation of the non-hub vertices.
pub fn random_order<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Vec<VertexId> {
    let mut order: Vec<_> = graph.non_hubs().collect();
    order.shuffle(rng);
    order
}

/// [`async_pass`] with a freshly drawn [`random_order`].
pub fn async_random_pass<R: Rng + ?Sized>(
    graph: &Graph,
    s0: &StateVector,
    rng: &mut R,
) -> Result<AsyncOutcome> {
    let order = random_order(graph, rng);
    async_pass(graph, s0, &order)
}

/// Verify `order` is a permutation of the non-hub vertices.
pub fn check_order(graph: &Graph, order: &[VertexId]) -> Result<()> {
    let expected = graph.non_hub_count();
    if order.len() != expected {
        return Err(Error::InvalidOrder(OrderViolation::WrongLength {
            expected,
            actual: order.len(),
        }));
    }

    let mut seen = vec![false; graph.vertex_count()];
    for &v in order {
        let violation = match seen.get_mut(v.index()) {
            None => Some(OrderViolation::OutOfRange(v)),
            Some(_) if graph.is_hub(v) => Some(OrderViolation::ContainsHub(v)),
            Some(true) => Some(OrderViolation::Duplicate(v)),
            Some(slot) => {
                *slot = true;
                None
            }
        };
        if let Some(violation) = violation {
            return Err(Error::InvalidOrder(violation));
        }
    }
    Ok(())
}

fn non_hub_glory(graph: &Graph, s: &StateVector) -> usize {
    graph
        .non_hubs()
        .filter(|&v| matches!(s.get(v), Ok(State::Glory)))
        .count()
}

/// A hub-only graph counts as fully `Glory`.
fn glory_fraction(graph: &Graph, s: &StateVector) -> f64 {
    match graph.non_hub_count() {
        0 => 1.0,
        n => non_hub_glory(graph, s) as f64 / n as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{graph_and_state, v};
    use crate::threshold::max_rest;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Hub 0 broadcasting 2. Vertex 1 leans Glory; vertex 2 only flips once
    /// vertex 1 has.
    fn chain() -> Graph {
        let mut g = Graph::new(3, v(0)).unwrap();
        g.set_weight(v(2), v(1), 1).unwrap();
        g.set_weight(v(1), v(2), 3).unwrap();
        g.set_hub_weight(2);
        g
    }

    #[test]
    fn sync_reads_one_snapshot() {
        let g = chain();
        let s0 = StateVector::initial(3, v(0)).unwrap();
        let out = sync_step(&g, &s0).unwrap();

        // Vertex 2 still sees vertex 1 as Gnash
        assert_eq!(out.state.get(v(1)).unwrap(), State::Glory);
        assert_eq!(out.state.get(v(2)).unwrap(), State::Gnash);
        assert_eq!(out.glory_fraction, 0.5);
    }

    #[test]
    fn sync_sets_hub_directly() {
        let g = chain();
        let s0 = StateVector::uniform(3, State::Gnash);
        let out = sync_step(&g, &s0).unwrap();
        assert_eq!(out.state.get(v(0)).unwrap(), State::Glory);
    }

    #[test]
    fn async_outcome_depends_on_order() {
        let g = chain();
        let s0 = StateVector::initial(3, v(0)).unwrap();

        let forward = async_pass(&g, &s0, &[v(1), v(2)]).unwrap();
        assert!(forward.all_glory);

        let backward = async_pass(&g, &s0, &[v(2), v(1)]).unwrap();
        assert!(!backward.all_glory);
        assert_eq!(backward.state.get(v(2)).unwrap(), State::Gnash);
        assert_eq!(backward.state.get(v(1)).unwrap(), State::Glory);
    }

    #[test]
    fn async_is_a_single_pass() {
        // Vertex 1 flips only after vertex 2 has; updating 1 first leaves it
        // Gnash because there is no second pass.
        let mut g = Graph::new(3, v(0)).unwrap();
        g.set_weight(v(2), v(1), 3).unwrap();
        g.set_hub_weight(2);
        let s0 = StateVector::initial(3, v(0)).unwrap();

        let out = async_pass(&g, &s0, &[v(1), v(2)]).unwrap();
        assert_eq!(out.state.get(v(1)).unwrap(), State::Gnash);
        assert_eq!(out.state.get(v(2)).unwrap(), State::Glory);
        assert!(!out.all_glory);
    }

    #[test]
    fn invalid_orders_are_rejected() {
        let g = Graph::new(4, v(1)).unwrap();
        let s0 = StateVector::initial(4, v(1)).unwrap();
        let cases = [
            (vec![v(0), v(2)], OrderViolation::WrongLength { expected: 3, actual: 2 }),
            (vec![v(0), v(2), v(3), v(0)], OrderViolation::WrongLength { expected: 3, actual: 4 }),
            (vec![v(0), v(2), v(2)], OrderViolation::Duplicate(v(2))),
            (vec![v(0), v(1), v(3)], OrderViolation::ContainsHub(v(1))),
            (vec![v(0), v(2), v(4)], OrderViolation::OutOfRange(v(4))),
        ];
        for (order, violation) in cases {
            assert_eq!(
                async_pass(&g, &s0, &order),
                Err(Error::InvalidOrder(violation)),
                "order {:?}",
                order
            );
        }
    }

    #[test]
    fn mismatched_state_is_rejected() {
        let g = chain();
        let short = StateVector::uniform(2, State::Gnash);
        assert!(matches!(sync_step(&g, &short), Err(Error::Graph(_))));
        assert!(matches!(async_pass(&g, &short, &[v(1), v(2)]), Err(Error::Graph(_))));
    }

    #[test]
    fn hub_only_graph_is_trivially_glory() {
        let g = Graph::new(1, v(0)).unwrap();
        let s0 = StateVector::initial(1, v(0)).unwrap();
        assert_eq!(sync_step(&g, &s0).unwrap().glory_fraction, 1.0);
        assert!(async_pass(&g, &s0, &[]).unwrap().all_glory);
        assert!(random_order(&g, &mut StdRng::seed_from_u64(0)).is_empty());
    }

    #[test]
    fn random_order_is_a_permutation() {
        let g = Graph::new(10, v(4)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let order = random_order(&g, &mut rng);
            assert!(check_order(&g, &order).is_ok());
        }
    }

    #[test]
    fn random_orders_reach_both_outcomes() {
        let g = chain();
        let s0 = StateVector::initial(3, v(0)).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let outcomes: HashSet<bool> = (0..64)
            .map(|_| async_random_pass(&g, &s0, &mut rng).unwrap().all_glory)
            .collect();
        assert_eq!(outcomes.len(), 2);
    }

    proptest! {
        #[test]
        fn sync_is_deterministic((g, s) in graph_and_state()) {
            let a = sync_step(&g, &s).unwrap();
            let b = sync_step(&g, &s).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn hub_above_max_rest_wins_everything((g, s) in graph_and_state(), extra in 1u32..5) {
            let mut g = g;
            let rest = max_rest(&g).unwrap();
            g.set_hub_weight(rest as u32 + extra);
            let out = sync_step(&g, &s).unwrap();
            prop_assert_eq!(out.glory_fraction, 1.0);
            let order: Vec<_> = g.non_hubs().collect();
            prop_assert!(async_pass(&g, &s, &order).unwrap().all_glory);
        }

        #[test]
        fn async_only_touches_scheduled_vertices((g, s) in graph_and_state(), seed in any::<u64>()) {
            let out = async_random_pass(&g, &s, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(out.state.get(g.hub()).unwrap(), s.get(g.hub()).unwrap());
            prop_assert_eq!(out.state.len(), s.len());
        }
    }
}
