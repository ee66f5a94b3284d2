//! # finlife-core
//!
//! The deterministic search engine for finlife - THE LOGIC.
//!
//! This crate implements an exhaustive search over every encoding of a
//! finite Life board, discovering which boards eventually enter a cycle
//! under the evolution rule. Knowledge accumulates in an ordered
//! canonical-state cache that is periodically checkpointed to disk, so the
//! (very long-running) search can be interrupted and resumed without
//! redoing work. A post-processing stage expands raw findings into exact
//! cycle periods.
//!
//! ## Architectural Constraints
//!
//! - Single-threaded: the cache and trajectory tracker are exclusively
//!   owned by one driver; no locking discipline exists or is needed
//! - Deterministic: `BTreeMap` for ordered state, integer arithmetic only
//! - No async, no network dependencies (pure Rust)
//! - The evolution rule and the symmetry canonicalization sit behind the
//!   [`Rule`] trait, so alternative rule sets substitute without touching
//!   the drivers

// =============================================================================
// MODULES
// =============================================================================

pub mod cache;
pub mod checkpoint;
pub mod primitives;
pub mod rule;
pub mod search;
pub mod tracker;
pub mod types;
pub mod undump;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Board, LifeError, Tag};

// =============================================================================
// RE-EXPORTS: Search Machinery
// =============================================================================

pub use cache::CycleCache;
pub use checkpoint::CheckpointFile;
pub use rule::{Rule, ToroidalLife};
pub use search::{Exhaustion, Progress, SearchReport};
pub use tracker::Trajectory;
pub use undump::{UndumpReport, explain_dump, measure_period};
