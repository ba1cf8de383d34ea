//! Tipping sweep runner
//!
//! Generate a random peer graph around a hub, sweep the hub broadcast
//! weight and print one record per step.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tipping_graph::Weight;
use tipping_sweep::{run_config, CsvSink, JsonLinesSink, RecordSink, SweepConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(name = "tipping-sweep", about = "Sweep hub weight and measure the Gnash -> Glory transition")]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total vertices including the hub
    #[arg(long)]
    vertices: Option<usize>,

    /// Hub vertex index
    #[arg(long)]
    hub: Option<usize>,

    /// Edge probability between non-hub vertices
    #[arg(long)]
    edge_probability: Option<f64>,

    /// Maximum non-hub edge weight
    #[arg(long)]
    max_weight: Option<Weight>,

    /// First hub weight
    #[arg(long)]
    w_min: Option<Weight>,

    /// Last hub weight (inclusive)
    #[arg(long)]
    w_max: Option<Weight>,

    /// Asynchronous passes per hub weight
    #[arg(long)]
    trials: Option<u32>,

    /// RNG seed for a reproducible run
    #[arg(long, env = "TIPPING_SEED")]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write results here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply(&self, mut config: SweepConfig) -> SweepConfig {
        if let Some(n) = self.vertices {
            config.graph.vertex_count = n;
        }
        if let Some(hub) = self.hub {
            config.graph.hub = hub;
        }
        if let Some(p) = self.edge_probability {
            config.graph.edge_probability = p;
        }
        if let Some(w) = self.max_weight {
            config.graph.max_weight = w;
        }
        if let Some(w) = self.w_min {
            config.w_min = w;
        }
        if let Some(w) = self.w_max {
            config.w_max = w;
        }
        if let Some(t) = self.trials {
            config.async_trials = t;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tipping_sweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => SweepConfig::from_json_file(path)?,
        None => SweepConfig::default(),
    };
    let config = args.apply(base);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink: Box<dyn RecordSink> = match args.format {
        Format::Csv => Box::new(CsvSink::new(out)),
        Format::Jsonl => Box::new(JsonLinesSink::new(out)),
    };

    run_config(&config, sink.as_mut())?;
    Ok(())
}
