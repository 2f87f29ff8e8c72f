//! Analyze command - enumerate continuations and pick the best move

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::to_writer_pretty;

use super::parse_player_token;
use crate::{
    analysis::analyze,
    app::AnalysisConfig,
    cli::output,
    tictactoe::{Board, ExpansionPolicy},
};

/// Trees with at least this many empty cells get a spinner
const SPINNER_THRESHOLD: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Enumerate every continuation of a position and pick the best move")]
pub struct AnalyzeArgs {
    /// Board as nine cells, row-major (X, O, and '.', '-' or '_' for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Player placing the next mark (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub to_move: String,

    /// Player whose outcome is maximized; overrides the config file, which in
    /// turn defaults to the player to move
    #[arg(long)]
    pub maximizing: Option<String>,

    /// Number of sequences to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Stop expanding a branch once either player has completed a line
    #[arg(long)]
    pub stop_at_win: bool,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Merge the config file (if any) with command-line overrides
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AnalysisConfig::new(),
    };

    if let Some(maximizing) = &args.maximizing {
        config = config.with_maximizing(parse_player_token(maximizing, "--maximizing")?);
    }
    if let Some(limit) = args.limit {
        config = config.with_display_limit(limit);
    }
    if args.stop_at_win {
        config = config.with_expansion(ExpansionPolicy::StopAtWin);
    }
    Ok(config)
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("invalid --board '{}'", args.board))?;
    let to_move = parse_player_token(&args.to_move, "--to-move")?;
    let config = resolve_config(&args)?;

    let spinner = if args.format == OutputFormat::Text
        && board.empty_positions().len() >= SPINNER_THRESHOLD
    {
        Some(output::create_spinner("Expanding move tree...")?)
    } else {
        None
    };

    let report = analyze(&board, to_move, &config);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match args.format {
        OutputFormat::Text => output::print_report(&report),
        OutputFormat::Json => {
            to_writer_pretty(io::stdout().lock(), &report).context("writing JSON report")?;
            println!();
        }
    }

    Ok(())
}
