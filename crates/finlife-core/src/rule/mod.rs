//! # Evolution Rules
//!
//! The oracle seam between the search machinery and the cellular automaton
//! it explores. The driver and post-processor only ever call the two
//! operations of the [`Rule`] trait; alternative rule sets or symmetry
//! groups substitute without touching either.

mod torus;

pub use torus::ToroidalLife;

use crate::Board;

// =============================================================================
// RULE TRAIT
// =============================================================================

/// A deterministic evolution rule over a finite board domain, together with
/// the symmetry group used for canonical pruning.
///
/// Both operations must be pure and total over the domain, and every
/// symmetry transform must commute with `evolve` — the search relies on a
/// repeated canonical form implying a genuine cycle in the raw dynamics.
pub trait Rule {
    /// Advance a board by one discrete time step.
    fn evolve(&self, board: Board) -> Board;

    /// Apply every symmetry transform to `board` and return the minimum
    /// image.
    ///
    /// The scan aborts and returns immediately once any transform yields a
    /// value strictly below `bound`: the caller then only needs to know the
    /// minimum is below the bound, not its exact value. `bound = 0` disables
    /// the abort and computes the true canonical form.
    fn normalize(&self, board: Board, bound: Board) -> Board;

    /// Exclusive upper bound of the board domain.
    fn domain_size(&self) -> u64;
}
