//! lookahead CLI - exhaustive tic-tac-toe look-ahead
//!
//! This CLI provides:
//! - Enumeration of every continuation from a position
//! - Backward-induction selection of the best immediate move
//! - An interactive terminal game with on-demand hints

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lookahead")]
#[command(version, about = "Exhaustive tic-tac-toe look-ahead", long_about = None)]
struct Cli {
    /// Log debug events (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate continuations of a position and pick the best move
    Analyze(lookahead::cli::commands::analyze::AnalyzeArgs),

    /// Play an interactive game
    Play(lookahead::cli::commands::play::PlayArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => lookahead::cli::commands::analyze::execute(args),
        Commands::Play(args) => lookahead::cli::commands::play::execute(args),
    }
}
