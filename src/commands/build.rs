use std::path::PathBuf;

use anyhow::Result;
use jiff::Timestamp;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::mapper::to_display_model;
use crate::models::{Artifact, Metric, Outcome};
use crate::render::render;
use crate::resolver::resolve;
use crate::rng::{XorShift64, time_seed};
use crate::writer;

/// What a build run produced, for terminal or JSON reporting.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    outcome: Outcome,
    path: PathBuf,
    bytes: usize,
    timestamp: Timestamp,
    seed: u64,
    metrics: Vec<Metric>,
}

impl BuildReport {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Seed the metrics were sampled with. `--seed <seed>` replays them.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }
}

/// The configured seed, or a fresh one from the clock. Logged either way so
/// any run can be replayed.
pub fn seed_for(config: &Config) -> u64 {
    match config.seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            seed
        }
        None => {
            let seed = time_seed();
            debug!(seed, "using time-derived seed");
            seed
        }
    }
}

/// Resolve, map, render and write, in that order.
pub fn pipeline(
    config: &Config,
    signal: Option<&str>,
    now: Timestamp,
    seed: u64,
) -> Result<BuildReport> {
    let outcome = resolve(signal);
    let model = to_display_model(outcome, now, &mut XorShift64::new(seed));
    let artifact = Artifact::new(render(&model), config.output_path());

    writer::write(&artifact)?;

    Ok(BuildReport {
        outcome,
        path: artifact.path().to_path_buf(),
        bytes: artifact.len(),
        timestamp: model.timestamp(),
        seed,
        metrics: model.metrics().to_vec(),
    })
}

/// Reads the failure toggle named in `config` once, then runs the pipeline.
pub fn run(config: &Config) -> Result<BuildReport> {
    let signal = std::env::var(&config.fail_env).ok();
    let seed = seed_for(config);

    let report = pipeline(config, signal.as_deref(), Timestamp::now(), seed)?;
    info!(outcome = %report.outcome(), seed, "build dashboard rendered");
    Ok(report)
}
