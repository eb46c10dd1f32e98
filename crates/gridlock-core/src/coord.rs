//! Board coordinates.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    iter::FusedIterator,
};

/// A cell coordinate on the 9×9 board.
///
/// Both components are in the range 1-9: `x` counts columns left to right,
/// `y` counts rows top to bottom. Coordinates order row-major: `(1, 1)`,
/// `(2, 1)`, …, `(9, 1)`, `(1, 2)`, ….
///
/// # Examples
///
/// ```
/// use gridlock_core::Coord;
///
/// let coord = Coord::new(4, 7);
/// assert_eq!(coord.x(), 4);
/// assert_eq!(coord.y(), 7);
/// assert_eq!(Coord::all().count(), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Creates a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 1-9.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            (1..=9).contains(&x) && (1..=9).contains(&y),
            "coordinate components must be in range 1-9, got ({x}, {y})"
        );
        Self { x, y }
    }

    /// Returns the column component (1-9).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row component (1-9).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this coordinate (0-80).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 1).index(), 0);
    /// assert_eq!(Coord::new(9, 1).index(), 8);
    /// assert_eq!(Coord::new(1, 2).index(), 9);
    /// assert_eq!(Coord::new(9, 9).index(), 80);
    /// ```
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        (self.y as usize - 1) * 9 + (self.x as usize - 1)
    }

    /// Returns the horizontal band (block row) this coordinate lies in (0-2).
    #[must_use]
    #[inline]
    pub const fn band(self) -> u8 {
        (self.y - 1) / 3
    }

    /// Returns the vertical stack (block column) this coordinate lies in (0-2).
    #[must_use]
    #[inline]
    pub const fn stack(self) -> u8 {
        (self.x - 1) / 3
    }

    /// Returns the row index of this coordinate within its block (0-2).
    #[must_use]
    #[inline]
    pub const fn row_in_block(self) -> u8 {
        (self.y - 1) % 3
    }

    /// Returns the column index of this coordinate within its block (0-2).
    #[must_use]
    #[inline]
    pub const fn col_in_block(self) -> u8 {
        (self.x - 1) % 3
    }

    /// Returns an iterator over all 81 coordinates in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Coord;
    ///
    /// let mut all = Coord::all();
    /// assert_eq!(all.next(), Some(Coord::new(1, 1)));
    /// assert_eq!(all.next(), Some(Coord::new(2, 1)));
    /// assert_eq!(all.last(), Some(Coord::new(9, 9)));
    /// ```
    pub fn all() -> impl FusedIterator<Item = Self> {
        (1..=9).flat_map(|y| (1..=9).map(move |x| Self::new(x, y)))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    #[should_panic(expected = "coordinate components must be in range 1-9")]
    fn test_new_rejects_zero() {
        let _ = Coord::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "coordinate components must be in range 1-9")]
    fn test_new_rejects_ten() {
        let _ = Coord::new(3, 10);
    }

    #[test]
    fn test_block_geometry() {
        let coord = Coord::new(5, 9);
        assert_eq!(coord.stack(), 1);
        assert_eq!(coord.band(), 2);
        assert_eq!(coord.col_in_block(), 1);
        assert_eq!(coord.row_in_block(), 2);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Coord::new(9, 1) < Coord::new(1, 2));
        assert!(Coord::new(4, 5) < Coord::new(5, 5));
    }

    #[test]
    fn test_all_is_row_major_and_distinct() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 81);
        for pair in coords.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(x in 1u8..=9, y in 1u8..=9) {
            let coord = Coord::new(x, y);
            let from_index = Coord::all().nth(coord.index()).unwrap();
            prop_assert_eq!(coord, from_index);
        }
    }
}
