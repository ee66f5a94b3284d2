//! # Trajectory Tracker
//!
//! The bounded stack of boards visited while walking one candidate's forward
//! trajectory. The driver tests membership against it to detect cycle
//! closure, so an overflowing push must fail loudly: silently dropping a
//! board could hide a cycle and corrupt the search results.

use crate::{Board, LifeError};

// =============================================================================
// TRAJECTORY
// =============================================================================

/// Fixed-capacity ordered record of recently visited boards.
///
/// Single-owner, single-threaded; reused across candidates via [`clear`].
///
/// [`clear`]: Trajectory::clear
#[derive(Debug, Clone)]
pub struct Trajectory {
    boards: Vec<Board>,
    capacity: usize,
}

impl Trajectory {
    /// Create a tracker with an explicit capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            boards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a board as the new head.
    ///
    /// Returns [`LifeError::TrajectoryOverflow`] when the capacity is
    /// exhausted; the caller may retry the candidate with a larger tracker.
    pub fn push(&mut self, board: Board) -> Result<(), LifeError> {
        if self.boards.len() >= self.capacity {
            return Err(LifeError::TrajectoryOverflow {
                capacity: self.capacity,
            });
        }
        self.boards.push(board);
        Ok(())
    }

    /// Check whether a board is present, scanning from the most recent
    /// element backward.
    #[must_use]
    pub fn contains(&self, board: Board) -> bool {
        self.boards.iter().rev().any(|&b| b == board)
    }

    /// Discard every element in O(1).
    pub fn clear(&mut self) {
        self.boards.clear();
    }

    /// Number of boards currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether the tracker is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The fixed capacity this tracker was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_contains() {
        let mut trajectory = Trajectory::new(8);
        trajectory.push(Board::new(5)).expect("push");
        trajectory.push(Board::new(12)).expect("push");

        assert!(trajectory.contains(Board::new(5)));
        assert!(trajectory.contains(Board::new(12)));
        assert!(!trajectory.contains(Board::new(7)));
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn clear_empties_the_tracker() {
        let mut trajectory = Trajectory::new(8);
        trajectory.push(Board::new(5)).expect("push");

        trajectory.clear();

        assert!(trajectory.is_empty());
        assert!(!trajectory.contains(Board::new(5)));
    }

    #[test]
    fn overflow_is_a_distinct_error() {
        let mut trajectory = Trajectory::new(2);
        trajectory.push(Board::new(1)).expect("push");
        trajectory.push(Board::new(2)).expect("push");

        let err = trajectory.push(Board::new(3));
        assert!(matches!(
            err,
            Err(LifeError::TrajectoryOverflow { capacity: 2 })
        ));
        // Nothing was dropped and nothing was added.
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn tracker_is_reusable_after_clear() {
        let mut trajectory = Trajectory::new(1);
        trajectory.push(Board::new(1)).expect("push");
        assert!(trajectory.push(Board::new(2)).is_err());

        trajectory.clear();
        trajectory.push(Board::new(2)).expect("push after clear");
        assert!(trajectory.contains(Board::new(2)));
    }
}
