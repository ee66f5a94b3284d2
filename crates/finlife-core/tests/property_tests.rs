//! # Property-Based Tests
//!
//! Invariants of the rule, tracker and checkpoint codec under arbitrary
//! inputs.

use finlife_core::checkpoint::{read_checkpoint, write_checkpoint};
use finlife_core::{Board, CycleCache, Rule, Tag, ToroidalLife, Trajectory};
use proptest::collection::vec;
use proptest::prelude::*;
use std::io::Cursor;

fn life4() -> ToroidalLife {
    ToroidalLife::new(4).expect("side 4 is supported")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Full canonicalization never increases a board and is idempotent.
    #[test]
    fn normalize_is_contracting_and_idempotent(raw in 0u64..(1 << 16)) {
        let rule = life4();
        let board = Board::new(raw);

        let canonical = rule.normalize(board, Board::EMPTY);
        prop_assert!(canonical <= board);
        prop_assert_eq!(rule.normalize(canonical, Board::EMPTY), canonical);
    }

    /// The early-abort scan agrees with full canonicalization about whether
    /// a smaller representative exists.
    #[test]
    fn early_abort_matches_full_canonicalization(raw in 0u64..(1 << 16)) {
        let rule = life4();
        let board = Board::new(raw);

        let aborted = rule.normalize(board, board);
        let canonical = rule.normalize(board, Board::EMPTY);
        prop_assert_eq!(aborted < board, canonical < board);
    }

    /// Canonicalization commutes with evolution: symmetry-equivalent boards
    /// stay symmetry-equivalent one step later.
    #[test]
    fn canonicalization_commutes_with_evolution(raw in 0u64..(1 << 16)) {
        let rule = life4();
        let board = Board::new(raw);
        let canonical = rule.normalize(board, Board::EMPTY);

        prop_assert_eq!(
            rule.normalize(rule.evolve(canonical), Board::EMPTY),
            rule.normalize(rule.evolve(board), Board::EMPTY)
        );
    }

    /// Checkpoint streams round-trip arbitrary caches bit-exactly.
    #[test]
    fn checkpoint_round_trip(
        entries in vec((0u64..(1 << 16), 0u32..4), 0..64),
        resume in 0u64..(1 << 16)
    ) {
        let mut cache = CycleCache::new();
        for &(board, tag) in &entries {
            cache.insert(Board::new(board), Tag::new(tag));
        }

        let mut buffer = Vec::new();
        write_checkpoint(&mut buffer, resume, &cache).expect("write");

        let mut restored = CycleCache::new();
        let stored = read_checkpoint(Cursor::new(&buffer), &mut restored).expect("read");

        prop_assert_eq!(stored, resume);
        prop_assert_eq!(restored, cache);
    }

    /// Every board pushed within capacity is found by the membership scan.
    #[test]
    fn tracker_membership_covers_all_pushed_boards(
        boards in vec(0u64..(1 << 16), 1..64)
    ) {
        let mut trajectory = Trajectory::new(64);
        for &raw in &boards {
            trajectory.push(Board::new(raw)).expect("within capacity");
        }

        for &raw in &boards {
            prop_assert!(trajectory.contains(Board::new(raw)));
        }
    }
}
