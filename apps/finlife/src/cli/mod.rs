//! # finlife CLI Module
//!
//! Argument surface of the searcher binary: one optional positional
//! argument naming the checkpoint file, plus tuning flags. Flags override
//! the optional configuration file, which overrides built-in defaults.

mod commands;

use crate::config::{Config, Settings};
use clap::Parser;
use finlife_core::LifeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// finlife - exhaustive cycle search over finite Life boards
///
/// Scans every board encoding of an n-by-n toroidal Life grid in
/// increasing order, pruning symmetric duplicates, and records every board
/// that enters a cycle. Progress is checkpointed so a run can be
/// interrupted and resumed.
#[derive(Parser, Debug)]
#[command(name = "finlife")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Checkpoint file to resume from and write to
    #[arg(value_name = "CHECKPOINT")]
    pub checkpoint: Option<PathBuf>,

    /// Board side length (cells per row)
    #[arg(short, long)]
    pub side: Option<u32>,

    /// Candidates scanned between checkpoints
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress banner output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final report in JSON format (for programmatic access)
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), LifeError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::merge(config, cli.side, cli.checkpoint, cli.interval);

    cmd_search(&settings, cli.json)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_checkpoint_is_optional() {
        let cli = Cli::try_parse_from(["finlife"]).expect("parse");
        assert!(cli.checkpoint.is_none());

        let cli = Cli::try_parse_from(["finlife", "torus4.dump"]).expect("parse");
        assert_eq!(cli.checkpoint, Some(PathBuf::from("torus4.dump")));
    }

    #[test]
    fn flags_parse_alongside_the_positional() {
        let cli = Cli::try_parse_from([
            "finlife",
            "--side",
            "5",
            "--interval",
            "65536",
            "--json",
            "torus5.dump",
        ])
        .expect("parse");

        assert_eq!(cli.side, Some(5));
        assert_eq!(cli.interval, Some(65536));
        assert!(cli.json);
        assert_eq!(cli.checkpoint, Some(PathBuf::from("torus5.dump")));
    }

    #[test]
    fn a_second_positional_is_rejected() {
        assert!(Cli::try_parse_from(["finlife", "a.dump", "b.dump"]).is_err());
    }
}
