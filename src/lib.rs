#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod mapper;
pub mod models;
pub mod output;
pub mod render;
pub mod resolver;
pub mod rng;
pub mod sum;
pub mod writer;

use anyhow::Result;

use cli::{Cli, Commands};
use config::Config;
use output::Output;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Build {
            out_dir,
            seed,
            json,
        } => {
            let config = config.with_overrides(out_dir, seed);
            let report = commands::build::run(&config)?;
            Output::new(json).built(&report)
        }
        Commands::Outcome { json } => {
            let outcome = commands::outcome::run(&config);
            Output::new(json).outcome(outcome, &config.fail_env)
        }
    }
}
