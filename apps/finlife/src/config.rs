//! # Configuration
//!
//! Optional TOML configuration for the searcher, merged with CLI flags.
//! Precedence: CLI flag > config file > built-in default.
//!
//! ```toml
//! # finlife.toml
//! side = 5
//! checkpoint = "torus5.dump"
//! interval = 65536
//! ```

use finlife_core::LifeError;
use finlife_core::primitives::{CHECKPOINT_INTERVAL, DEFAULT_CHECKPOINT_FILE, DEFAULT_SIDE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// CONFIG FILE
// =============================================================================

/// Contents of an optional configuration file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Board side length (cells per row).
    pub side: Option<u32>,
    /// Checkpoint file to resume from and write to.
    pub checkpoint: Option<PathBuf>,
    /// Candidates scanned between checkpoints.
    pub interval: Option<u64>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, LifeError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LifeError::Io(format!("cannot read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| LifeError::Config(e.to_string()))
    }
}

// =============================================================================
// EFFECTIVE SETTINGS
// =============================================================================

/// The settings a run actually uses, after merging every source.
#[derive(Debug, Clone)]
pub struct Settings {
    pub side: u32,
    pub checkpoint: PathBuf,
    pub interval: u64,
}

impl Settings {
    /// Merge CLI flags over config-file values over built-in defaults.
    #[must_use]
    pub fn merge(
        config: Config,
        side: Option<u32>,
        checkpoint: Option<PathBuf>,
        interval: Option<u64>,
    ) -> Self {
        Self {
            side: side.or(config.side).unwrap_or(DEFAULT_SIDE),
            checkpoint: checkpoint
                .or(config.checkpoint)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKPOINT_FILE)),
            interval: interval.or(config.interval).unwrap_or(CHECKPOINT_INTERVAL),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
