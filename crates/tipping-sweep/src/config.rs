//! Sweep configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tipping_graph::{RandomGraphConfig, Weight};

use crate::{Error, Result};

/// Everything needed to generate a graph and sweep its hub weight.
///
/// Loaded from JSON; missing fields fall back to [`SweepConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Random graph parameters
    #[serde(flatten)]
    pub graph: RandomGraphConfig,
    /// First hub broadcast weight
    pub w_min: Weight,
    /// Last hub broadcast weight (inclusive)
    pub w_max: Weight,
    /// Asynchronous passes per sweep step
    pub async_trials: u32,
    /// Seed for graph generation and update orders; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            graph: RandomGraphConfig::default(),
            w_min: 0,
            w_max: 150,
            async_trials: 100,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reject parameters the sweep cannot run with.
    ///
    /// `w_min > w_max` is accepted and produces an empty sweep.
    pub fn validate(&self) -> Result<()> {
        self.graph.validate()?;
        if self.async_trials == 0 {
            return Err(Error::NoTrials);
        }
        Ok(())
    }
}
