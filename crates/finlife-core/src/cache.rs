//! # Canonical-State Cache
//!
//! The in-memory half of the persistent cache: an ordered map from board
//! encoding to tag. `BTreeMap` keeps full traversals in ascending board
//! order, which makes checkpoint dumps deterministic and re-parseable.
//!
//! Durability lives in the [`checkpoint`] module; this structure is pure
//! state.
//!
//! [`checkpoint`]: crate::checkpoint

use crate::{Board, LifeError, Tag};
use std::collections::BTreeMap;

// =============================================================================
// CYCLE CACHE
// =============================================================================

/// Ordered map of every canonical board the search has accounted for.
///
/// Keys are unique; entries live until the cache is dropped or overwritten
/// by a checkpoint load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleCache {
    entries: BTreeMap<Board, Tag>,
}

impl CycleCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test against the current in-memory state.
    #[must_use]
    pub fn contains(&self, board: Board) -> bool {
        self.entries.contains_key(&board)
    }

    /// Read the tag recorded for a board.
    ///
    /// Returns [`LifeError::MissingEntry`] if the board was never recorded.
    /// A miss here is a logic bug in the caller, not bad data; callers that
    /// cannot tolerate it should halt the run.
    pub fn get(&self, board: Board) -> Result<Tag, LifeError> {
        self.entries
            .get(&board)
            .copied()
            .ok_or(LifeError::MissingEntry(board))
    }

    /// Insert a new entry or overwrite the existing tag for `board`.
    ///
    /// Idempotent for the same (board, tag) pair.
    pub fn insert(&mut self, board: Board, tag: Tag) {
        self.entries.insert(board, tag);
    }

    /// Number of entries, used for diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate every entry in ascending board order.
    pub fn iter(&self) -> impl Iterator<Item = (Board, Tag)> + '_ {
        self.entries.iter().map(|(&board, &tag)| (board, tag))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_contains_and_get() {
        let mut cache = CycleCache::new();
        cache.insert(Board::new(12), Tag::CYCLE);

        assert!(cache.contains(Board::new(12)));
        assert_eq!(cache.get(Board::new(12)).expect("present"), Tag::CYCLE);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_on_missing_board_is_an_error() {
        let cache = CycleCache::new();
        assert!(matches!(
            cache.get(Board::new(7)),
            Err(LifeError::MissingEntry(Board(7)))
        ));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut cache = CycleCache::new();
        cache.insert(Board::EMPTY, Tag::STABLE);
        cache.insert(Board::EMPTY, Tag::CYCLE);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Board::EMPTY).expect("present"), Tag::CYCLE);
    }

    #[test]
    fn iteration_is_in_ascending_board_order() {
        let mut cache = CycleCache::new();
        cache.insert(Board::new(9), Tag::CYCLE);
        cache.insert(Board::new(3), Tag::CYCLE);
        cache.insert(Board::EMPTY, Tag::STABLE);

        let boards: Vec<u64> = cache.iter().map(|(b, _)| b.value()).collect();
        assert_eq!(boards, vec![0, 3, 9]);
    }
}
