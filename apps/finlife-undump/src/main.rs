//! # finlife-undump - Dump Post-Processor
//!
//! Expands a raw search dump into exact cycle periods:
//!
//! ```bash
//! cat life.dump | finlife-undump > life.undump
//! ```
//!
//! The searcher dumps quasiperiods — unverified markers that a cycle
//! exists. This filter re-simulates each surviving entry for its exact
//! period, dropping vanishing boards, duplicates of already-expanded
//! cycles, and the degenerate empty board. Output is one
//! `<board> <period>` pair per line.
//!
//! The board side must match the one the dump was produced with.

use clap::Parser;
use finlife_core::primitives::DEFAULT_SIDE;
use finlife_core::{CycleCache, LifeError, ToroidalLife, explain_dump};
use std::io::BufWriter;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// finlife-undump - expand finlife search dumps into exact cycle periods
#[derive(Parser, Debug)]
#[command(name = "finlife-undump")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board side length the dump was produced with
    #[arg(short, long, default_value_t = DEFAULT_SIDE)]
    side: u32,
}

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Logging to stderr only — stdout is reserved for the (board, period)
    // stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LifeError> {
    let rule = ToroidalLife::new(cli.side)?;
    let mut cache = CycleCache::new();

    let stdin = std::io::stdin().lock();
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    let report = explain_dump(&rule, &mut cache, stdin, &mut stdout)?;

    tracing::info!(
        emitted = report.emitted,
        skipped = report.skipped,
        "dump expanded"
    );
    Ok(())
}
