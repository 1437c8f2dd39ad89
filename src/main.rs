// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, run the
//   single inference round trip.
// - Returns `anyhow::Result` so every failure prints once and exits.

use clap::Parser;
use inferview_cli::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(Args::parse())
}
