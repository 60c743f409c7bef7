use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use demo_ci::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match demo_ci::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("demo_ci=debug")
    } else {
        EnvFilter::new("demo_ci=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
