//! # Innate Primitives
//!
//! Hardcoded runtime constants for the finlife search.
//!
//! These values are compiled into the binaries and are immutable at runtime;
//! the app layer may override the ones that are tunable (checkpoint path,
//! interval, board side) through its configuration surface.

/// How many candidates are scanned between checkpoints.
///
/// Every `CHECKPOINT_INTERVAL` candidates the driver emits a progress report
/// and rewrites the checkpoint file. On interruption, at most one interval of
/// work is redone after resume.
pub const CHECKPOINT_INTERVAL: u64 = 1 << 20;

/// Default capacity of the trajectory tracker.
///
/// Bounds the memory used for in-trajectory cycle detection to the longest
/// orbit actually encountered. Exceeding it is a reportable error, never a
/// silent truncation.
pub const TRAJECTORY_CAPACITY: usize = 10_240;

/// Default checkpoint filename when none is given on the command line.
pub const DEFAULT_CHECKPOINT_FILE: &str = "life.dump";

/// The enumeration index a fresh search starts from.
///
/// Index 0 is the empty board, which is seeded into the cache as a sentinel
/// rather than enumerated.
pub const START_POSITION: u64 = 1;

/// Default board side length (cells per row).
pub const DEFAULT_SIDE: u32 = 4;

/// Smallest supported board side.
pub const MIN_SIDE: u32 = 2;

/// Largest supported board side.
///
/// The domain is `2^(side*side)` encodings; side 7 (49 bits) is the largest
/// square that fits a `u64` with room for the exclusive upper bound.
pub const MAX_SIDE: u32 = 7;

/// Safety bound for exact period measurement in the post-processor.
///
/// A dump entry whose cycle does not close within this many steps is treated
/// as a data error rather than simulated forever.
pub const MAX_PERIOD_STEPS: u64 = 1 << 20;
