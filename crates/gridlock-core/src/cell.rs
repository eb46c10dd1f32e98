//! A single board cell holding a candidate set.

use crate::{digit::Digit, digit_set::DigitSet, error::Contradiction};

/// A cell on the board, holding the set of values it could still take.
///
/// A fresh cell holds all nine candidates. Propagation removes candidates;
/// direct assignment (initial givens, search guesses) replaces the set with a
/// single value. A cell is *solved* once exactly one candidate remains. The
/// candidate set is never empty: removing a solved cell's sole candidate is a
/// [`Contradiction`].
///
/// # Examples
///
/// ```
/// use gridlock_core::{Cell, Digit};
///
/// let mut cell = Cell::new();
/// assert!(!cell.is_solved());
/// assert_eq!(cell.candidates().len(), 9);
///
/// cell.set_value(Digit::D4);
/// assert!(cell.is_solved());
/// assert_eq!(cell.solution(), Some(Digit::D4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    candidates: DigitSet,
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates an unsolved cell holding all nine candidates.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            candidates: DigitSet::FULL,
        }
    }

    /// Returns `true` if the value is still a candidate for this cell.
    #[must_use]
    #[inline]
    pub fn has_candidate(&self, digit: Digit) -> bool {
        self.candidates.contains(digit)
    }

    /// Returns the cell's candidate set.
    #[must_use]
    #[inline]
    pub fn candidates(&self) -> DigitSet {
        self.candidates
    }

    /// Removes a candidate. Returns `true` if it was present and removed.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction::LastCandidate`] if the cell is solved and the
    /// removal target is its sole remaining candidate.
    pub fn remove_candidate(&mut self, digit: Digit) -> Result<bool, Contradiction> {
        if !self.candidates.contains(digit) {
            return Ok(false);
        }
        if self.candidates.len() == 1 {
            return Err(Contradiction::LastCandidate { digit });
        }
        self.candidates.remove(digit);
        Ok(true)
    }

    /// Removes every candidate in `values` that is present. Returns the
    /// number of candidates removed.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction::LastCandidate`] if a removal would strip the
    /// cell's sole remaining candidate.
    pub fn remove_candidates(&mut self, values: DigitSet) -> Result<u8, Contradiction> {
        let mut removed = 0;
        for digit in values {
            if self.remove_candidate(digit)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Assigns a definitive value, replacing the candidate set with `{digit}`.
    #[inline]
    pub fn set_value(&mut self, digit: Digit) {
        self.candidates = DigitSet::from_elem(digit);
    }

    /// Returns `true` if exactly one candidate remains.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Returns the cell's value if solved, else `None`.
    #[must_use]
    #[inline]
    pub fn solution(&self) -> Option<Digit> {
        self.candidates.single()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_cell_is_unsolved_with_all_candidates() {
        let cell = Cell::new();
        assert!(!cell.is_solved());
        assert_eq!(cell.solution(), None);
        for digit in Digit::ALL {
            assert!(cell.has_candidate(digit));
        }
    }

    #[test]
    fn test_solve_by_set_value() {
        let mut cell = Cell::new();
        cell.set_value(Digit::D9);
        assert!(cell.is_solved());
        assert_eq!(cell.solution(), Some(Digit::D9));
        assert!(cell.has_candidate(Digit::D9));
        assert!(!cell.has_candidate(Digit::D1));
    }

    #[test]
    fn test_solve_by_removing_candidates() {
        let mut cell = Cell::new();
        for digit in &Digit::ALL[..8] {
            assert_eq!(cell.remove_candidate(*digit), Ok(true));
        }
        assert!(cell.is_solved());
        assert_eq!(cell.solution(), Some(Digit::D9));
    }

    #[test]
    fn test_remove_absent_candidate_is_a_no_op() {
        let mut cell = Cell::new();
        cell.set_value(Digit::D2);
        assert_eq!(cell.remove_candidate(Digit::D7), Ok(false));
        assert_eq!(cell.solution(), Some(Digit::D2));
    }

    #[test]
    fn test_removing_last_candidate_is_a_contradiction() {
        let mut cell = Cell::new();
        cell.set_value(Digit::D3);
        assert_eq!(
            cell.remove_candidate(Digit::D3),
            Err(Contradiction::LastCandidate { digit: Digit::D3 })
        );
        // The guard leaves the cell untouched.
        assert_eq!(cell.solution(), Some(Digit::D3));
    }

    #[test]
    fn test_remove_candidates_counts_removals() {
        let mut cell = Cell::new();
        let values = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        assert_eq!(cell.remove_candidates(values), Ok(3));
        assert_eq!(cell.remove_candidates(values), Ok(0));
        assert_eq!(cell.candidates().len(), 6);
    }

    proptest! {
        #[test]
        fn prop_candidate_set_never_empties(values in prop::collection::vec(1u8..=9, 0..64)) {
            let mut cell = Cell::new();
            for value in values {
                let digit = Digit::new(value).unwrap();
                let _ = cell.remove_candidate(digit);
                prop_assert!(!cell.candidates().is_empty());
                prop_assert!(cell.candidates().len() <= 9);
            }
        }

        #[test]
        fn prop_removal_is_monotonic(values in prop::collection::vec(1u8..=9, 0..64)) {
            let mut cell = Cell::new();
            for value in values {
                let before = cell.candidates().len();
                let _ = cell.remove_candidate(Digit::new(value).unwrap());
                prop_assert!(cell.candidates().len() <= before);
            }
        }
    }
}
