//! The hub-weight sweep.
//!
//! For each broadcast weight `W` the driver rewrites the hub row, starts
//! from the canonical vector (hub `Glory`, everyone else `Gnash`) and runs:
//!
//! - one synchronous step, recording the fraction of `Glory` vertices
//! - `async_trials` asynchronous passes in fresh random orders, recording
//!   the fraction of passes that end all-`Glory`

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tipping_dynamics::{async_random_pass, hub_dominates, max_rest, sync_step};
use tipping_graph::{Graph, Score, StateVector, Weight};

use crate::render::RecordSink;
use crate::{Error, Result};

/// Statistics for one sweep step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// Hub broadcast weight for this step
    #[serde(rename = "W")]
    pub hub_weight: Weight,
    /// Largest non-hub in-weight, constant across the sweep
    pub max_rest: Score,
    /// Fraction of non-hub vertices in `Glory` after one synchronous step
    pub percent_glory_sync: f64,
    /// Fraction of asynchronous passes ending with every non-hub in `Glory`
    pub success_prob_async: f64,
    /// Passes ending all-`Glory`
    pub async_successes: u32,
    /// Passes run
    pub async_trials: u32,
}

/// Owns the graph and the random source for a sweep.
pub struct SweepDriver<R> {
    graph: Graph,
    max_rest: Score,
    async_trials: u32,
    rng: R,
}

impl<R: Rng> SweepDriver<R> {
    /// Prepare a sweep over `graph`. Computes `max_rest` once, up front.
    pub fn new(graph: Graph, async_trials: u32, rng: R) -> Result<Self> {
        if async_trials == 0 {
            return Err(Error::NoTrials);
        }
        let max_rest = max_rest(&graph)?;
        Ok(Self {
            graph,
            max_rest,
            async_trials,
            rng,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn max_rest(&self) -> Score {
        self.max_rest
    }

    pub fn async_trials(&self) -> u32 {
        self.async_trials
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Run a single sweep step at hub weight `hub_weight`.
    pub fn step(&mut self, hub_weight: Weight) -> Result<SweepRecord> {
        self.graph.set_hub_weight(hub_weight);
        let s0 = StateVector::initial(self.graph.vertex_count(), self.graph.hub())?;

        let sync = sync_step(&self.graph, &s0)?;

        let mut async_successes = 0;
        for _ in 0..self.async_trials {
            if async_random_pass(&self.graph, &s0, &mut self.rng)?.all_glory {
                async_successes += 1;
            }
        }
        let success_prob_async = f64::from(async_successes) / f64::from(self.async_trials);

        debug!(
            w = hub_weight,
            sync = sync.glory_fraction,
            async_successes,
            dominant = hub_dominates(hub_weight, self.max_rest),
            "sweep step"
        );

        Ok(SweepRecord {
            hub_weight,
            max_rest: self.max_rest,
            percent_glory_sync: sync.glory_fraction,
            success_prob_async,
            async_successes,
            async_trials: self.async_trials,
        })
    }

    /// Sweep `w_min..=w_max`, feeding each record to `sink`.
    ///
    /// Returns the number of records produced. `w_min > w_max` is an empty
    /// sweep, not an error.
    pub fn run_into<S: RecordSink + ?Sized>(
        &mut self,
        w_min: Weight,
        w_max: Weight,
        sink: &mut S,
    ) -> Result<usize> {
        info!(
            vertices = self.graph.vertex_count(),
            hub = %self.graph.hub(),
            max_rest = self.max_rest,
            w_min,
            w_max,
            trials = self.async_trials,
            "starting sweep"
        );

        sink.begin()?;
        let mut produced = 0;
        for w in w_min..=w_max {
            let record = self.step(w)?;
            sink.record(&record)?;
            produced += 1;
        }
        sink.finish()?;

        info!(records = produced, "sweep complete");
        Ok(produced)
    }

    /// Sweep `w_min..=w_max` and collect the records.
    pub fn run(&mut self, w_min: Weight, w_max: Weight) -> Result<Vec<SweepRecord>> {
        let mut records = Vec::new();
        self.run_into(w_min, w_max, &mut records)?;
        Ok(records)
    }
}

/// Sweep the hub weight of `graph` over `w_min..=w_max`.
pub fn run_sweep<R: Rng>(
    graph: Graph,
    w_min: Weight,
    w_max: Weight,
    async_trials: u32,
    rng: R,
) -> Result<Vec<SweepRecord>> {
    SweepDriver::new(graph, async_trials, rng)?.run(w_min, w_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tipping_graph::VertexId;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    /// Hub 0; vertex 1 resists weakly, vertex 2 flips only once vertex 1 has.
    fn chain() -> Graph {
        let mut g = Graph::new(3, v(0)).unwrap();
        g.set_weight(v(2), v(1), 1).unwrap();
        g.set_weight(v(1), v(2), 3).unwrap();
        g
    }

    #[test]
    fn zero_trials_rejected() {
        let err = SweepDriver::new(chain(), 0, StdRng::seed_from_u64(0)).err();
        assert!(matches!(err, Some(Error::NoTrials)));
    }

    #[test]
    fn max_rest_computed_up_front() {
        let driver = SweepDriver::new(chain(), 1, StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(driver.max_rest(), 3);
    }

    #[test]
    fn step_rewrites_hub_row() {
        let mut driver = SweepDriver::new(chain(), 4, StdRng::seed_from_u64(0)).unwrap();
        driver.step(9).unwrap();
        let g = driver.graph();
        assert_eq!(g.weight(v(0), v(1)).unwrap(), 9);
        assert_eq!(g.weight(v(0), v(2)).unwrap(), 9);
        assert_eq!(g.weight(v(0), v(0)).unwrap(), 0);
        assert_eq!(g.weight(v(1), v(2)).unwrap(), 3);
    }

    #[test]
    fn order_sensitive_step_is_partial() {
        // At W = 2 only the order [1, 2] succeeds
        let mut driver = SweepDriver::new(chain(), 200, StdRng::seed_from_u64(9)).unwrap();
        let r = driver.step(2).unwrap();
        assert_eq!(r.percent_glory_sync, 0.5);
        assert!(r.async_successes > 0 && r.async_successes < 200);
        assert_eq!(r.success_prob_async, f64::from(r.async_successes) / 200.0);
    }

    #[test]
    fn inverted_bounds_give_empty_sweep() {
        let records = run_sweep(chain(), 5, 4, 3, StdRng::seed_from_u64(1)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn records_follow_sweep_order() {
        let records = run_sweep(chain(), 0, 6, 5, StdRng::seed_from_u64(2)).unwrap();
        let ws: Vec<_> = records.iter().map(|r| r.hub_weight).collect();
        assert_eq!(ws, (0..=6).collect::<Vec<_>>());
        assert!(records.iter().all(|r| r.max_rest == 3 && r.async_trials == 5));
    }

    #[test]
    fn hub_only_graph_is_all_glory() {
        let g = Graph::new(1, v(0)).unwrap();
        let records = run_sweep(g, 0, 2, 3, StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(records.len(), 3);
        for r in records {
            assert_eq!(r.max_rest, 0);
            assert_eq!(r.percent_glory_sync, 1.0);
            assert_eq!(r.success_prob_async, 1.0);
        }
    }

    #[test]
    fn edgeless_graph_ties_to_glory_at_zero() {
        let g = Graph::new(6, v(3)).unwrap();
        let records = run_sweep(g, 0, 0, 2, StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(records[0].percent_glory_sync, 1.0);
        assert_eq!(records[0].success_prob_async, 1.0);
    }
}
