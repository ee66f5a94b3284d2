//! # Dump Post-Processing
//!
//! Expands a raw search dump into exact cycle periods. The search records
//! quasiperiods — unverified markers that a cycle exists — so each surviving
//! entry is re-simulated from scratch: the walk records every canonical form
//! it visits, which also filters later entries that belong to an
//! already-expanded cycle.

use crate::checkpoint::{parse_entry_line, parse_resume_line};
use crate::primitives::MAX_PERIOD_STEPS;
use crate::rule::Rule;
use crate::{Board, CycleCache, LifeError, Tag};
use serde::Serialize;
use std::io::{BufRead, Write};

// =============================================================================
// PERIOD MEASUREMENT
// =============================================================================

/// Measure the exact period of `initial` by direct simulation.
///
/// Every canonical form visited along the way is recorded in `cache` with
/// [`Tag::CYCLE`], so duplicate entries of the same cycle can be filtered by
/// the caller. Fails with [`LifeError::PeriodOverrun`] if the walk does not
/// return to `initial` within `limit` steps — the dump's quasiperiod was
/// wrong.
pub fn measure_period<R: Rule>(
    rule: &R,
    cache: &mut CycleCache,
    initial: Board,
    limit: u64,
) -> Result<u64, LifeError> {
    let mut board = initial;
    let mut period = 0u64;
    loop {
        cache.insert(rule.normalize(board, Board::EMPTY), Tag::CYCLE);
        period += 1;
        board = rule.evolve(board);
        if board == initial {
            return Ok(period);
        }
        if period >= limit {
            return Err(LifeError::PeriodOverrun {
                board: initial,
                limit,
            });
        }
    }
}

// =============================================================================
// DUMP EXPANSION
// =============================================================================

/// Counters for one dump expansion.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct UndumpReport {
    /// `(board, period)` pairs written to the output sink.
    pub emitted: usize,
    /// Entries filtered as degenerate, vanishing or duplicate.
    pub skipped: usize,
}

/// Read a checkpoint-shaped dump from `input` and write `(board, exact
/// period)` pairs to `output`.
///
/// Per entry, the degenerate board, zero quasiperiods and boards whose full
/// canonical form is already cached are skipped; everything else is
/// re-simulated for its exact period. Malformed lines stop the stream with
/// an error — no partial or garbled pairs are emitted past them.
pub fn explain_dump<R, I, O>(
    rule: &R,
    cache: &mut CycleCache,
    input: I,
    mut output: O,
) -> Result<UndumpReport, LifeError>
where
    R: Rule,
    I: BufRead,
    O: Write,
{
    let io_err = |e: std::io::Error| LifeError::Io(e.to_string());
    let mut lines = input.lines();

    // The leading resume position is validated for format compatibility but
    // otherwise unused here.
    let first = lines
        .next()
        .ok_or_else(|| LifeError::MalformedCheckpoint {
            line: 1,
            reason: "missing resume position".to_string(),
        })?
        .map_err(io_err)?;
    let _resume = parse_resume_line(&first)?;

    let mut report = UndumpReport::default();
    let mut line_no = 1;
    for line in lines {
        line_no += 1;
        let line = line.map_err(io_err)?;
        let (board, quasiperiod) = parse_entry_line(&line, line_no)?;

        if board == Board::EMPTY
            || quasiperiod.value() == 0
            || cache.contains(rule.normalize(board, Board::EMPTY))
        {
            report.skipped += 1;
            continue;
        }

        let period = measure_period(rule, cache, board, MAX_PERIOD_STEPS)?;
        if period == 0 {
            report.skipped += 1;
            continue;
        }

        writeln!(output, "{} {}", board.value(), period).map_err(io_err)?;
        report.emitted += 1;
    }

    output.flush().map_err(io_err)?;
    Ok(report)
}

// =============================================================================
// TESTS
// =============================================================================
