//! Test utilities for rule implementations.
//!
//! [`RuleTester`] tracks the initial and current state of a board, applies
//! rules to chosen units, and asserts the resulting candidate changes by
//! coordinate.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{Coord, Digit, Unit};
//! use gridlock_solver::{rule::NakedSubsets, testing::RuleTester};
//!
//! RuleTester::from_rows(&[
//!     "5........",
//!     ".........",
//!     ".........",
//!     ".........",
//!     ".........",
//!     ".........",
//!     ".........",
//!     ".........",
//!     ".........",
//! ])
//! .apply_once(&NakedSubsets::new(), &Unit::row(1))
//! .assert_removed_exact(Coord::new(2, 1), [Digit::D5]);
//! ```

use gridlock_core::{Board, Coord, Digit, DigitSet, Unit};

use crate::rule::Rule;

/// A test harness for verifying rule implementations.
///
/// All methods return `self` for fluent chaining, and all assertions panic
/// with detailed messages on failure, using `#[track_caller]` to report the
/// correct source location.
#[derive(Debug)]
pub struct RuleTester {
    initial: Board,
    current: Board,
}

impl RuleTester {
    /// Creates a tester from an initial board state.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from 9 rows of grid text.
    ///
    /// # Panics
    ///
    /// Panics if the rows cannot be parsed as a valid board.
    #[track_caller]
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let board = Board::from_rows(rows).unwrap();
        Self::new(board)
    }

    /// Applies the rule once to the given unit.
    ///
    /// # Panics
    ///
    /// Panics if the rule returns an error.
    #[track_caller]
    #[must_use]
    pub fn apply_once<R>(mut self, rule: &R, unit: &Unit) -> Self
    where
        R: Rule,
    {
        rule.apply(&mut self.current, unit).unwrap();
        self
    }

    /// Applies the rule to the unit repeatedly until it reports no change.
    ///
    /// # Panics
    ///
    /// Panics if the rule returns an error.
    #[track_caller]
    #[must_use]
    pub fn apply_until_stuck<R>(mut self, rule: &R, unit: &Unit) -> Self
    where
        R: Rule,
    {
        while rule.apply(&mut self.current, unit).unwrap() {}
        self
    }

    /// Asserts that a cell was placed (solved) with the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was not placed as expected.
    #[track_caller]
    #[must_use]
    pub fn assert_placed(self, coord: Coord, digit: Digit) -> Self {
        let initial = self.initial.cell(coord).candidates();
        let current = self.current.cell(coord).candidates();

        assert!(
            initial.len() > 1,
            "Expected initial cell at {coord} to be unsolved, but candidates are {initial:?}"
        );
        assert_eq!(
            current.len(),
            1,
            "Expected cell at {coord} to be solved, but candidates are {current:?}"
        );
        assert!(
            current.contains(digit),
            "Expected cell at {coord} to hold {digit}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// Other candidates may also have been removed; only the specified ones
    /// are checked.
    ///
    /// # Panics
    ///
    /// Panics if any of the specified digits is still a candidate.
    #[track_caller]
    #[must_use]
    pub fn assert_removed_includes<C>(self, coord: Coord, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.cell(coord).candidates();
        let current = self.current.cell(coord).candidates();
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {coord} to include {digits:?}, but they are {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits:?} removed from {coord}, but {current:?} still holds {:?}",
            current & digits
        );
        self
    }

    /// Asserts that exactly the specified candidates were removed from a
    /// cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from the specified one.
    #[track_caller]
    #[must_use]
    pub fn assert_removed_exact<C>(self, coord: Coord, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.cell(coord).candidates();
        let current = self.current.cell(coord).candidates();
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits:?} removed from {coord}, but removed candidates are {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    #[must_use]
    pub fn assert_no_change(self, coord: Coord) -> Self {
        let initial = self.initial.cell(coord).candidates();
        let current = self.current.cell(coord).candidates();
        assert_eq!(
            initial, current,
            "Expected no change at {coord}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolverError;

    // A rule that removes D9 from the unit's first cell.
    #[derive(Debug)]
    struct DropNineFromFirst;

    impl Rule for DropNineFromFirst {
        fn name(&self) -> &'static str {
            "drop-nine-from-first"
        }

        fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError> {
            let coord = unit.coords()[0];
            let changed = board
                .cell_mut(coord)
                .remove_candidate(Digit::D9)
                .map_err(SolverError::from)?;
            Ok(changed)
        }
    }

    #[derive(Debug)]
    struct NoOpRule;

    impl Rule for NoOpRule {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn apply(&self, _board: &mut Board, _unit: &Unit) -> Result<bool, SolverError> {
            Ok(false)
        }
    }

    #[test]
    fn test_apply_and_assert_chain() {
        RuleTester::new(Board::new())
            .apply_once(&DropNineFromFirst, &Unit::row(2))
            .assert_removed_exact(Coord::new(1, 2), [Digit::D9])
            .assert_no_change(Coord::new(2, 2))
            .apply_once(&NoOpRule, &Unit::row(2))
            .assert_removed_exact(Coord::new(1, 2), [Digit::D9]);
    }

    #[test]
    fn test_apply_until_stuck_reaches_fixpoint() {
        // The second application reports no change and ends the loop.
        RuleTester::new(Board::new())
            .apply_until_stuck(&DropNineFromFirst, &Unit::row(1))
            .assert_removed_exact(Coord::new(1, 1), [Digit::D9]);
    }

    #[test]
    #[should_panic(expected = "Expected no change at")]
    fn test_assert_no_change_fails_when_changed() {
        let _ = RuleTester::new(Board::new())
            .apply_once(&DropNineFromFirst, &Unit::row(1))
            .assert_no_change(Coord::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "Expected cell at")]
    fn test_assert_placed_fails_when_not_placed() {
        let _ = RuleTester::new(Board::new())
            .apply_once(&NoOpRule, &Unit::row(1))
            .assert_placed(Coord::new(1, 1), Digit::D1);
    }
}
