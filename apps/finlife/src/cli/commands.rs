//! # CLI Command Implementations
//!
//! This module contains the actual implementation of the search command.

use crate::config::Settings;
use finlife_core::primitives::TRAJECTORY_CAPACITY;
use finlife_core::{
    CheckpointFile, CycleCache, Exhaustion, LifeError, Rule, ToroidalLife, Trajectory,
};

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Run the exhaustive search to completion, resuming from the checkpoint
/// when one exists.
pub fn cmd_search(settings: &Settings, json_mode: bool) -> Result<(), LifeError> {
    let rule = ToroidalLife::new(settings.side)?;
    let checkpoint = CheckpointFile::new(&settings.checkpoint);

    let mut cache = CycleCache::new();
    let start = checkpoint.load(&mut cache)?;
    let domain = rule.domain_size();

    if start >= domain {
        tracing::info!(
            checkpoint = %settings.checkpoint.display(),
            "checkpoint marks the search as complete; re-dumping and exiting"
        );
    } else {
        tracing::info!(
            side = settings.side,
            domain,
            start,
            entries = cache.len(),
            checkpoint = %settings.checkpoint.display(),
            "starting exhaustive search"
        );
    }

    let mut trajectory = Trajectory::new(TRAJECTORY_CAPACITY);
    let mut driver = Exhaustion::new(&rule, &mut cache, &mut trajectory, checkpoint)
        .with_interval(settings.interval);

    let report = driver.run(start, |progress| {
        let pct = progress.percent_hundredths();
        tracing::info!(
            position = progress.position,
            cached = progress.cached,
            "scanned up to {} of {} boards, {}.{:02} % complete",
            progress.position,
            progress.domain,
            pct / 100,
            pct % 100
        );
    })?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Search complete");
        println!("  Domain:          {}", domain);
        println!("  Cache entries:   {}", report.cache_entries);
        println!("  Cycles recorded: {}", report.cycles_recorded);
        println!("  Checkpoint:      {}", settings.checkpoint.display());
    }

    Ok(())
}
