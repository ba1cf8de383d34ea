//! Tipping Sweep
//!
//! Sweeps the hub broadcast weight `W` of a random peer graph and measures
//! how the graph tips from `Gnash` consensus to the hub's `Glory`.
//!
//! # Architecture
//!
//! - **Config**: graph parameters, sweep bounds, trials, seed
//! - **Driver**: owns the graph, rewrites the hub row per step, runs the
//!   synchronous step and the randomized asynchronous passes
//! - **Render**: streams records as CSV or JSON lines
//!
//! # Usage
//!
//! ```no_run
//! use tipping_sweep::{run_config, CsvSink, SweepConfig};
//!
//! let config = SweepConfig { seed: Some(7), ..Default::default() };
//! let mut sink = CsvSink::new(std::io::stdout());
//! run_config(&config, &mut sink).unwrap();
//! ```

mod config;
mod driver;
mod error;
mod render;

pub use config::SweepConfig;
pub use driver::{run_sweep, SweepDriver, SweepRecord};
pub use error::{Error, Result};
pub use render::{CsvSink, JsonLinesSink, RecordSink};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Generate a graph from `config` and sweep it into `sink`.
///
/// A single seeded stream drives both the graph and the update orders, so a
/// fixed `seed` reproduces the whole run.
pub fn run_config<S: RecordSink + ?Sized>(config: &SweepConfig, sink: &mut S) -> Result<usize> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = tipping_graph::generate(&config.graph, &mut rng)?;
    info!(edges = graph.edge_count(), seed = ?config.seed, "graph generated");

    SweepDriver::new(graph, config.async_trials, rng)?.run_into(config.w_min, config.w_max, sink)
}
