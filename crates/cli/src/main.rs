mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{LookupCommand, RunCommand};
use tracing_subscriber::EnvFilter;

/// Beacon CLI - external address discovery and service config updater
#[derive(Debug, Parser)]
#[command(
    name = "beacon",
    version,
    about = "Discovers the host's externally reachable address and rewrites dependent service configuration files"
)]
struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the configured lookup and rewrite all target files
    Run(RunCommand),
    /// Resolve a lookup descriptor and print the discovered address
    Lookup(LookupCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Commands::Run(cmd) => cmd.execute()?,
        Commands::Lookup(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "beacon_core=debug,beacon=debug"
    } else {
        "beacon_core=info,beacon=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
