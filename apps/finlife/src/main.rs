//! # finlife - Finite Life Cycle Search
//!
//! The searcher binary for the finlife engine.
//!
//! Enumerates every board encoding of a finite Life grid, detects the
//! boards that enter a cycle, and keeps a checkpoint file on disk so the
//! run can be interrupted and resumed without redoing work.
//!
//! ## Usage
//!
//! ```bash
//! # Fresh search with the default checkpoint file (life.dump)
//! finlife
//!
//! # Resume from (and keep writing) a named checkpoint
//! finlife torus4.dump
//!
//! # A 5x5 board, checkpointing every 2^16 candidates
//! finlife --side 5 --interval 65536 torus5.dump
//! ```
//!
//! Set `FINLIFE_LOG_FORMAT=json` for machine-parseable log output.

mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — FINLIFE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("FINLIFE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "finlife=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute the search
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the finlife startup banner.
fn print_banner() {
    println!(
        "finlife v{} — exhaustive cycle search over finite Life boards",
        env!("CARGO_PKG_VERSION")
    );
}
