//! # Core Type Definitions
//!
//! This module contains the value types shared by every finlife component:
//! - Board encodings (`Board`)
//! - Cache tags (`Tag`)
//! - Error types (`LifeError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// BOARD
// =============================================================================

/// An encoded finite grid configuration, the unit of state in the search
/// space.
///
/// Bit `r*n + c` of the encoding holds the cell at row `r`, column `c` of an
/// n-by-n grid. A board has no identity beyond its numeric value; the numeric
/// order is the order used for symmetry pruning and for checkpoint dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Board(pub u64);

impl Board {
    /// The empty (all-dead) board.
    pub const EMPTY: Self = Self(0);

    /// Create a board from its raw encoding.
    #[must_use]
    pub const fn new(encoding: u64) -> Self {
        Self(encoding)
    }

    /// Get the raw encoding.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// TAG
// =============================================================================

/// The small integer associated with a cached board.
///
/// The search driver only ever writes two values: [`Tag::STABLE`] for the
/// degenerate empty board and [`Tag::CYCLE`] for members of discovered
/// cycles. In a raw dump the same field carries the quasiperiod that the
/// post-processor later expands into an exact period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Tag(pub u32);

impl Tag {
    /// Sentinel tag for the empty board. Zero, so the post-processor's
    /// zero-tag filter covers the sentinel entry.
    pub const STABLE: Self = Self(0);

    /// Tag for a board that is a member of a discovered cycle.
    pub const CYCLE: Self = Self(1);

    /// Create a tag with the given value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw tag value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the finlife system.
///
/// - No silent failures
/// - Use `Result<T, LifeError>` for fallible operations
/// - The core never panics; the binaries decide between propagate-and-exit
///   and retry
#[derive(Debug, Error)]
pub enum LifeError {
    /// An I/O error occurred while reading or writing a checkpoint.
    #[error("I/O error: {0}")]
    Io(String),

    /// A persisted dump violated the checkpoint line format.
    #[error("malformed checkpoint data at line {line}: {reason}")]
    MalformedCheckpoint {
        /// 1-based line number within the stream.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The trajectory tracker ran out of capacity mid-walk.
    ///
    /// A missed cycle detection would corrupt the search results, so the walk
    /// must not continue. Callers may retry the candidate with a larger
    /// tracker.
    #[error("trajectory capacity exceeded ({capacity} boards)")]
    TrajectoryOverflow {
        /// The capacity that was exhausted.
        capacity: usize,
    },

    /// A board assumed present in the cache was not found.
    ///
    /// This indicates a logic bug in the caller, not bad data.
    #[error("board {0:?} missing from cache")]
    MissingEntry(Board),

    /// A dump entry claimed a cycle that direct simulation could not close.
    #[error("no finite period for board {board:?} within {limit} steps")]
    PeriodOverrun {
        /// The board whose period was being measured.
        board: Board,
        /// The step bound that was exhausted.
        limit: u64,
    },

    /// The requested board side length is outside the supported range.
    #[error("unsupported board side {0}: must be between 2 and 7")]
    InvalidSide(u32),

    /// The application configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

// =============================================================================
// TESTS
// =============================================================================
