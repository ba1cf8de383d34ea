//! Random peer graphs around a hub.
//!
//! Every ordered pair of distinct non-hub vertices gets an edge with
//! probability `edge_probability`, weighted uniformly in `[1, max_weight]`.
//! The hub's row and column start at zero; the sweep owns the hub row.

use rand::Rng;
use tracing::trace;

use crate::{Error, Graph, Result, VertexId, Weight};

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomGraphConfig {
    /// Total vertices including the hub
    pub vertex_count: usize,
    /// Hub index
    pub hub: usize,
    /// Chance of an edge between two distinct non-hub vertices
    pub edge_probability: f64,
    /// Upper bound for a random edge weight
    pub max_weight: Weight,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertex_count: 50,
            hub: 0,
            edge_probability: 0.1,
            max_weight: 10,
        }
    }
}

impl RandomGraphConfig {
    /// Check the parameters without drawing anything.
    pub fn validate(&self) -> Result<()> {
        if self.vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }
        if self.vertex_count.checked_mul(self.vertex_count).is_none() {
            return Err(Error::TooManyVertices(self.vertex_count));
        }
        if self.hub >= self.vertex_count {
            return Err(Error::HubOutOfRange {
                hub: self.hub,
                vertex_count: self.vertex_count,
            });
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(Error::InvalidProbability(self.edge_probability));
        }
        if self.max_weight == 0 {
            return Err(Error::InvalidMaxWeight);
        }
        Ok(())
    }
}

/// Draw a graph from `config` using `rng`.
pub fn generate<R: Rng + ?Sized>(config: &RandomGraphConfig, rng: &mut R) -> Result<Graph> {
    config.validate()?;

    let hub = VertexId::new(config.hub);
    let mut graph = Graph::new(config.vertex_count, hub)?;

    for u in 0..config.vertex_count {
        if u == config.hub {
            continue;
        }
        for v in 0..config.vertex_count {
            if v == config.hub || u == v {
                continue;
            }
            if rng.gen::<f64>() < config.edge_probability {
                let w = rng.gen_range(1..=config.max_weight);
                graph.set_weight(VertexId::new(u), VertexId::new(v), w)?;
            }
        }
    }

    trace!(
        vertices = config.vertex_count,
        edges = graph.edge_count(),
        "generated random graph"
    );
    Ok(graph)
}
