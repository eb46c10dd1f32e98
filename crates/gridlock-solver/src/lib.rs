//! The Gridlock solving engine.
//!
//! Solving combines two mechanisms:
//!
//! - **Propagation** ([`rule`]): the [`NakedSubsets`](rule::NakedSubsets)
//!   intra-unit elimination plus three cross-block rules
//!   ([`LockedRows`](rule::LockedRows), [`LockedColumns`](rule::LockedColumns),
//!   [`LockedIntersection`](rule::LockedIntersection)) that exploit block
//!   neighbour geometry. The [`Solver`] runs them in a fixed sequence until a
//!   full pass changes nothing.
//! - **Backtracking**: when propagation stalls, the engine guesses candidates
//!   of the first unsolved cell on cloned boards, recursing into the full
//!   pipeline per guess. The first solution wins; exhaustion returns the
//!   board unsolved.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Board;
//! use gridlock_solver::{SolveStats, Solver};
//!
//! let board = Board::from_rows(&[
//!     "....9..16",
//!     "..7..6.42",
//!     "..8..7...",
//!     "135...9..",
//!     "...18.5..",
//!     "........7",
//!     "3567....1",
//!     "..9....3.",
//!     "8...3....",
//! ])?;
//!
//! let solver = Solver::new();
//! let mut stats = SolveStats::default();
//! let solved = solver.solve_with_stats(&board, &mut stats)?;
//!
//! assert!(solved.is_solved());
//! println!("{solved}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod rule;
pub mod testing;

mod brute_force;
mod error;
mod solver;

pub use self::{
    error::SolverError,
    rule::Rule,
    solver::{SolveStats, Solver},
};
