//! # Search Integration Tests
//!
//! End-to-end runs of the exhaustive driver over a small real domain
//! (side-3 torus, 512 boards), exercising checkpointing, resume and the
//! post-processing pipeline together.

use finlife_core::primitives::TRAJECTORY_CAPACITY;
use finlife_core::{
    Board, CheckpointFile, CycleCache, Exhaustion, Rule, Tag, ToroidalLife, Trajectory,
    explain_dump, measure_period,
};
use std::io::Cursor;
use std::path::Path;

/// Delegating wrapper that caps the enumeration domain, used to emulate a
/// run interrupted at a known position.
struct Capped<'a, R: Rule> {
    inner: &'a R,
    cap: u64,
}

impl<R: Rule> Rule for Capped<'_, R> {
    fn evolve(&self, board: Board) -> Board {
        self.inner.evolve(board)
    }

    fn normalize(&self, board: Board, bound: Board) -> Board {
        self.inner.normalize(board, bound)
    }

    fn domain_size(&self) -> u64 {
        self.cap
    }
}

fn run_search<R: Rule>(rule: &R, cache: &mut CycleCache, path: &Path, start: u64) {
    let mut trajectory = Trajectory::new(TRAJECTORY_CAPACITY);
    let checkpoint = CheckpointFile::new(path);
    Exhaustion::new(rule, cache, &mut trajectory, checkpoint)
        .run(start, |_| {})
        .expect("search");
}

#[test]
fn full_side3_search_records_only_canonical_boards() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rule = ToroidalLife::new(3).expect("side 3");

    let mut cache = CycleCache::new();
    run_search(&rule, &mut cache, &dir.path().join("side3.dump"), 1);

    assert_eq!(cache.get(Board::EMPTY).expect("sentinel"), Tag::STABLE);
    assert!(cache.len() > 1, "a 3x3 torus has still lifes at least");

    for (board, tag) in cache.iter() {
        if board == Board::EMPTY {
            continue;
        }
        assert_eq!(tag, Tag::CYCLE);
        assert_eq!(
            rule.normalize(board, Board::EMPTY),
            board,
            "cache keys must be canonical forms"
        );
    }
}

#[test]
fn recorded_cycles_close_under_direct_simulation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rule = ToroidalLife::new(3).expect("side 3");

    let mut cache = CycleCache::new();
    run_search(&rule, &mut cache, &dir.path().join("side3.dump"), 1);

    for (board, tag) in cache.iter() {
        if tag != Tag::CYCLE {
            continue;
        }
        let mut scratch = CycleCache::new();
        let period = measure_period(&rule, &mut scratch, board, TRAJECTORY_CAPACITY as u64)
            .expect("every recorded cycle member lies on a finite orbit");
        assert!(period >= 1);
    }
}

#[test]
fn split_run_resumes_to_the_same_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rule = ToroidalLife::new(3).expect("side 3");

    // Uninterrupted reference run.
    let mut whole = CycleCache::new();
    run_search(&rule, &mut whole, &dir.path().join("whole.dump"), 1);

    // First half: same dynamics, domain capped at 200, so the final
    // checkpoint records resume position 200 with the cache as of that
    // synchronization point.
    let split_path = dir.path().join("split.dump");
    let capped = Capped {
        inner: &rule,
        cap: 200,
    };
    let mut first_half = CycleCache::new();
    run_search(&capped, &mut first_half, &split_path, 1);

    // Second half: rehydrate and continue over the full domain.
    let mut resumed = CycleCache::new();
    let start = CheckpointFile::new(&split_path)
        .load(&mut resumed)
        .expect("load");
    assert_eq!(start, 200);
    run_search(&rule, &mut resumed, &split_path, start);

    assert_eq!(resumed, whole);
}

#[test]
fn search_dump_feeds_the_post_processor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("side3.dump");
    let rule = ToroidalLife::new(3).expect("side 3");

    let mut cache = CycleCache::new();
    run_search(&rule, &mut cache, &path, 1);

    let dump = std::fs::read_to_string(&path).expect("read dump");
    let mut fresh = CycleCache::new();
    let mut output = Vec::new();
    let report = explain_dump(&rule, &mut fresh, Cursor::new(dump), &mut output)
        .expect("expand");

    assert_eq!(report.emitted + report.skipped, cache.len());

    // Each emitted pair carries the exact period of its board.
    let text = String::from_utf8(output).expect("utf8");
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        let board: u64 = fields.next().expect("board").parse().expect("numeric");
        let period: u64 = fields.next().expect("period").parse().expect("numeric");
        assert!(fields.next().is_none());

        let mut scratch = CycleCache::new();
        let measured = measure_period(
            &rule,
            &mut scratch,
            Board::new(board),
            TRAJECTORY_CAPACITY as u64,
        )
        .expect("period");
        assert_eq!(measured, period);
    }
}
