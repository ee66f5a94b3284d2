//! # Exhaustive Search Driver
//!
//! Enumerates candidate board encodings in increasing order, prunes
//! non-canonical candidates, walks forward trajectories until they either
//! fall below the candidate (their orbit is owned by a smaller symmetry
//! class) or close a cycle, and records discovered cycle members in the
//! cache. State is snapshotted to disk every checkpoint interval, so an
//! interrupted run loses at most one interval of work.

use crate::checkpoint::CheckpointFile;
use crate::primitives::CHECKPOINT_INTERVAL;
use crate::rule::Rule;
use crate::{Board, CycleCache, LifeError, Tag, Trajectory};
use serde::Serialize;

// =============================================================================
// PROGRESS & REPORT
// =============================================================================

/// Snapshot of the driver's position, handed to the progress observer at
/// every checkpoint interval.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Progress {
    /// Candidate index about to be scanned.
    pub position: u64,
    /// Exclusive upper bound of the enumeration.
    pub domain: u64,
    /// Cache entries accumulated so far.
    pub cached: usize,
}

impl Progress {
    /// Fraction of the domain covered, in integer hundredths of a percent.
    #[must_use]
    pub fn percent_hundredths(&self) -> u64 {
        if self.domain == 0 {
            return 0;
        }
        self.position.saturating_mul(10_000) / self.domain
    }
}

/// Summary of a completed (or resumed-to-completion) search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchReport {
    /// Resume position stored in the final checkpoint; equals the domain
    /// bound, which signals "search complete" to future invocations.
    pub resume_position: u64,
    /// Total cache entries at shutdown.
    pub cache_entries: usize,
    /// Candidates examined by this run.
    pub candidates_scanned: u64,
    /// Cycles recorded by this run.
    pub cycles_recorded: u64,
}

// =============================================================================
// EXHAUSTION DRIVER
// =============================================================================

/// The checkpointed exhaustive-search driver.
///
/// Borrows its cache and trajectory tracker: both are created by the caller,
/// which keeps their lifecycle explicit and lets tests run with fresh
/// instances.
pub struct Exhaustion<'a, R: Rule> {
    rule: &'a R,
    cache: &'a mut CycleCache,
    trajectory: &'a mut Trajectory,
    checkpoint: CheckpointFile,
    interval: u64,
}

impl<'a, R: Rule> Exhaustion<'a, R> {
    /// Assemble a driver over the given rule, cache, tracker and checkpoint
    /// file, with the default checkpoint interval.
    pub fn new(
        rule: &'a R,
        cache: &'a mut CycleCache,
        trajectory: &'a mut Trajectory,
        checkpoint: CheckpointFile,
    ) -> Self {
        Self {
            rule,
            cache,
            trajectory,
            checkpoint,
            interval: CHECKPOINT_INTERVAL,
        }
    }

    /// Override the checkpoint interval. Mainly for tests; production runs
    /// keep the default.
    #[must_use]
    pub fn with_interval(self, interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            ..self
        }
    }

    /// Run the enumeration from `start` to the domain bound, exclusive.
    ///
    /// `observe` is called once per checkpoint interval with the current
    /// position. On success the final checkpoint has been written with the
    /// domain bound as its resume position.
    pub fn run<F>(&mut self, start: u64, mut observe: F) -> Result<SearchReport, LifeError>
    where
        F: FnMut(&Progress),
    {
        // The sentinel is re-asserted on every run, whether or not a
        // checkpoint was loaded.
        self.cache.insert(Board::EMPTY, Tag::STABLE);

        let domain = self.rule.domain_size();
        let mut scanned = 0u64;
        let mut cycles = 0u64;

        for position in start..domain {
            if position % self.interval == 0 {
                observe(&Progress {
                    position,
                    domain,
                    cached: self.cache.len(),
                });
                self.checkpoint.save(position, self.cache)?;
            }

            scanned += 1;
            let outcome = self.walk_candidate(Board::new(position));
            // The tracker is reused across candidates; clear it even when
            // the walk failed so the caller can retry.
            self.trajectory.clear();
            if let Some(closing) = outcome? {
                self.cache.insert(closing, Tag::CYCLE);
                cycles += 1;
            }
        }

        self.checkpoint.save(domain, self.cache)?;
        Ok(SearchReport {
            resume_position: domain,
            cache_entries: self.cache.len(),
            candidates_scanned: scanned,
            cycles_recorded: cycles,
        })
    }

    /// Walk one candidate's forward trajectory.
    ///
    /// Returns `Some(board)` with the repeated canonical board when the
    /// trajectory closes a cycle, `None` when the orbit is owned by a
    /// smaller-indexed symmetry class (already or eventually processed
    /// there).
    fn walk_candidate(&mut self, bound: Board) -> Result<Option<Board>, LifeError> {
        let mut board = self.rule.normalize(bound, bound);
        if board < bound {
            // Not the minimal representative of its class.
            return Ok(None);
        }

        loop {
            self.trajectory.push(board)?;
            board = self.rule.evolve(board);
            if board < bound {
                return Ok(None);
            }
            board = self.rule.normalize(board, bound);
            if board < bound {
                return Ok(None);
            }
            if self.trajectory.contains(board) {
                return Ok(Some(board));
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
