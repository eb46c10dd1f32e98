//! Propagation rules.
//!
//! Each rule implements the [`Rule`] trait: given a unit on a board, it
//! removes candidates (or forces a value) that the unit's constraints rule
//! out, and reports whether anything changed. Rules are stateless; the
//! [`Solver`](crate::Solver) decides which units each rule sees and how often
//! it runs.

use std::fmt::Debug;

use gridlock_core::{Board, Unit};

pub use self::{
    locked_columns::LockedColumns, locked_intersection::LockedIntersection,
    locked_rows::LockedRows, naked_subsets::NakedSubsets,
};
use crate::SolverError;

mod locked_columns;
mod locked_intersection;
mod locked_rows;
mod naked_subsets;

/// A propagation rule applied to one unit of a board.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Applies the rule to the given unit, mutating the board's cells.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The rule changed at least one cell
    /// * `Ok(false)` - The rule was applied but nothing changed
    ///
    /// # Errors
    ///
    /// Returns an error if the rule detects an invalid board state. On
    /// boards whose givens passed validation, rules only err after a wrong
    /// backtracking guess has made the board inconsistent.
    fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError>;
}
