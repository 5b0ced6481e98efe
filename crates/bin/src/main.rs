use clap::Parser;
use tracing_subscriber::EnvFilter;

mod board;
mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boardrank=warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Between(args) => commands::between::run(args, cli.format),
        Commands::Move(args) => commands::moves::run(args, cli.format),
        Commands::Rebalance(args) => commands::rebalance::run(args, cli.format),
        Commands::Audit(args) => commands::audit::run(args, cli.format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
