mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use cli::{Cli, Commands};
use commands::{check, conflicts};

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose { 0 => "warn", 1 => "info", 2 => "debug", _ => "trace" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<bool> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Check(args) => check::run(&cli, args),
        Commands::Conflicts(args) => conflicts::run(&cli, args),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    Ok(if run()? { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
