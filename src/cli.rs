use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "demo-ci")]
#[command(about = "Render a build status dashboard for the demo CI pipeline", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./demo-ci.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard and write it to the output directory (default)
    Build {
        /// Directory to write the dashboard into
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Fixed seed for the sampled metrics
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved build outcome without rendering
    Outcome {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Build {
            out_dir: None,
            seed: None,
            json: false,
        }
    }
}
