//! # Checkpoint Format
//!
//! Durable snapshots of the cache plus the search's resume position, in a
//! line-oriented text format kept byte-compatible with existing dumps:
//!
//! ```text
//! <resume_position>
//! <board_1> <tag_1>
//! <board_2> <tag_2>
//! ...
//! ```
//!
//! Parsing is strict: a resume line or entry line with the wrong field count
//! is a fatal error, never skipped — a silently dropped entry would corrupt
//! the completeness guarantee of the exhaustive search.
//!
//! [`CheckpointFile`] adds the on-disk lifecycle: writes go to a sibling
//! temporary file that is synced and atomically renamed over the target, so
//! an interrupted dump leaves the previous checkpoint intact.

use crate::primitives::START_POSITION;
use crate::{Board, CycleCache, LifeError, Tag};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

fn io_err(e: std::io::Error) -> LifeError {
    LifeError::Io(e.to_string())
}

// =============================================================================
// STREAM CODEC
// =============================================================================

/// Write the resume position and every cache entry to `writer`.
///
/// Entries appear in ascending board order, one `<board> <tag>` pair per
/// line. This is a pure stream transformation; the atomic-replace dance
/// lives in [`CheckpointFile::save`].
pub fn write_checkpoint<W: Write>(
    mut writer: W,
    resume: u64,
    cache: &CycleCache,
) -> Result<(), LifeError> {
    writeln!(writer, "{resume}").map_err(io_err)?;
    for (board, tag) in cache.iter() {
        writeln!(writer, "{} {}", board.value(), tag.value()).map_err(io_err)?;
    }
    Ok(())
}

/// Populate `cache` from a checkpoint stream and return the stored resume
/// position.
///
/// Fails with [`LifeError::MalformedCheckpoint`] on any malformed line; the
/// cache may then hold a partial load and must be discarded by the caller.
pub fn read_checkpoint<R: BufRead>(reader: R, cache: &mut CycleCache) -> Result<u64, LifeError> {
    let mut lines = reader.lines();

    let first = lines
        .next()
        .ok_or_else(|| LifeError::MalformedCheckpoint {
            line: 1,
            reason: "missing resume position".to_string(),
        })?
        .map_err(io_err)?;
    let resume = parse_resume_line(&first)?;

    let mut line_no = 1;
    for line in lines {
        line_no += 1;
        let line = line.map_err(io_err)?;
        let (board, tag) = parse_entry_line(&line, line_no)?;
        cache.insert(board, tag);
    }
    Ok(resume)
}

/// Parse the leading resume-position line: exactly one unsigned integer.
pub fn parse_resume_line(line: &str) -> Result<u64, LifeError> {
    let malformed = |reason: String| LifeError::MalformedCheckpoint { line: 1, reason };

    let mut fields = line.split_whitespace();
    let (Some(value), None) = (fields.next(), fields.next()) else {
        return Err(malformed(format!(
            "expected 1 field, found {}",
            line.split_whitespace().count()
        )));
    };
    value
        .parse()
        .map_err(|e| malformed(format!("invalid resume position: {e}")))
}

/// Parse one entry line: exactly two whitespace-separated unsigned integers.
///
/// The second field is the tag in a checkpoint and the quasiperiod in a raw
/// dump; both ride in the same slot.
pub fn parse_entry_line(line: &str, line_no: usize) -> Result<(Board, Tag), LifeError> {
    let malformed = |reason: String| LifeError::MalformedCheckpoint {
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let (Some(board), Some(tag), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed(format!(
            "expected 2 fields, found {}",
            line.split_whitespace().count()
        )));
    };

    let board: u64 = board
        .parse()
        .map_err(|e| malformed(format!("invalid board encoding: {e}")))?;
    let tag: u32 = tag
        .parse()
        .map_err(|e| malformed(format!("invalid tag: {e}")))?;
    Ok((Board::new(board), Tag::new(tag)))
}

// =============================================================================
// CHECKPOINT FILE
// =============================================================================

/// Path-owning handle for the on-disk checkpoint.
#[derive(Debug, Clone)]
pub struct CheckpointFile {
    path: PathBuf,
}

impl CheckpointFile {
    /// Create a handle for the given path. Nothing is touched on disk until
    /// [`save`](Self::save) or [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The checkpoint path this handle writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically replace the checkpoint with the current cache contents and
    /// resume position.
    ///
    /// The dump is written to `<path>.tmp`, synced, then renamed over the
    /// target, so a crash mid-dump leaves the previous checkpoint intact.
    pub fn save(&self, resume: u64, cache: &CycleCache) -> Result<(), LifeError> {
        let tmp = self.temp_path();

        let file = fs::File::create(&tmp).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        write_checkpoint(&mut writer, resume, cache)?;
        writer.flush().map_err(io_err)?;
        let file = writer.into_inner().map_err(|e| io_err(e.into_error()))?;
        file.sync_all().map_err(io_err)?;

        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    /// Populate `cache` from the checkpoint and return the stored resume
    /// position.
    ///
    /// An absent file is a fresh start and yields [`START_POSITION`] without
    /// error; a present-but-malformed file is fatal.
    pub fn load(&self, cache: &mut CycleCache) -> Result<u64, LifeError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(START_POSITION),
            Err(e) => return Err(io_err(e)),
        };
        read_checkpoint(BufReader::new(file), cache)
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw = self.path.as_os_str().to_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================
