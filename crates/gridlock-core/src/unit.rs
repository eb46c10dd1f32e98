//! Row, column, and block units.

use derive_more::Display;

use crate::{
    board::Board,
    coord::Coord,
    digit::Digit,
    digit_set::DigitSet,
    error::{Contradiction, StructureError},
};

/// The kind of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnitKind {
    /// A horizontal line of 9 cells.
    #[display("row")]
    Row,
    /// A vertical line of 9 cells.
    #[display("column")]
    Column,
    /// A 3×3 sub-grid of cells.
    #[display("block")]
    Block,
}

/// A group of 9 cells whose solved values must be mutually distinct.
///
/// A unit owns no cells; it holds the coordinates of its members and reads
/// them through the owning [`Board`]. Rows and columns behave alike; blocks
/// additionally know their geometric neighbours within the same band (block
/// row) or stack (block column).
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Coord, Unit, UnitKind};
///
/// let board = Board::new();
/// let row = Unit::row(3);
/// assert_eq!(row.kind(), UnitKind::Row);
/// assert!(row.contains(Coord::new(7, 3)));
/// assert!(!row.is_solved(&board));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    coords: [Coord; 9],
}

impl Unit {
    /// Creates a unit from an arbitrary coordinate list, validating count,
    /// distinctness, and kind-specific alignment.
    ///
    /// The infallible [`row`](Self::row), [`column`](Self::column), and
    /// [`block`](Self::block) builders cover ordinary construction; this
    /// constructor exists for callers assembling coordinates by hand.
    ///
    /// # Errors
    ///
    /// - [`StructureError::CellCount`] if `coords` is not 9 long.
    /// - [`StructureError::DuplicateCoord`] if a coordinate repeats.
    /// - [`StructureError::Misaligned`] if the coordinates do not share a row
    ///   (for [`UnitKind::Row`]), a column (for [`UnitKind::Column`]), or a
    ///   3×3 band and stack (for [`UnitKind::Block`]).
    pub fn new(kind: UnitKind, coords: &[Coord]) -> Result<Self, StructureError> {
        let coords: [Coord; 9] = coords
            .try_into()
            .map_err(|_| StructureError::CellCount {
                count: coords.len(),
            })?;
        for (i, coord) in coords.iter().enumerate() {
            if coords[..i].contains(coord) {
                return Err(StructureError::DuplicateCoord { coord: *coord });
            }
        }
        let first = coords[0];
        let aligned = match kind {
            UnitKind::Row => coords.iter().all(|c| c.y() == first.y()),
            UnitKind::Column => coords.iter().all(|c| c.x() == first.x()),
            UnitKind::Block => coords
                .iter()
                .all(|c| c.band() == first.band() && c.stack() == first.stack()),
        };
        if !aligned {
            return Err(StructureError::Misaligned { kind });
        }
        Ok(Self { kind, coords })
    }

    /// Creates the row unit for row `y`, cells ordered left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 1-9.
    #[must_use]
    pub fn row(y: u8) -> Self {
        Self {
            kind: UnitKind::Row,
            coords: std::array::from_fn(|i| {
                let i = u8::try_from(i).unwrap_or_default();
                Coord::new(i + 1, y)
            }),
        }
    }

    /// Creates the column unit for column `x`, cells ordered top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 1-9.
    #[must_use]
    pub fn column(x: u8) -> Self {
        Self {
            kind: UnitKind::Column,
            coords: std::array::from_fn(|i| {
                let i = u8::try_from(i).unwrap_or_default();
                Coord::new(x, i + 1)
            }),
        }
    }

    /// Creates the block unit at the given band (block row) and stack (block
    /// column), cells ordered row-major within the block.
    ///
    /// # Panics
    ///
    /// Panics if `band` or `stack` is not in the range 0-2.
    #[must_use]
    pub fn block(band: u8, stack: u8) -> Self {
        assert!(
            band <= 2 && stack <= 2,
            "band and stack must be in range 0-2, got ({band}, {stack})"
        );
        Self {
            kind: UnitKind::Block,
            coords: std::array::from_fn(|i| {
                let i = u8::try_from(i).unwrap_or_default();
                Coord::new(stack * 3 + i % 3 + 1, band * 3 + i / 3 + 1)
            }),
        }
    }

    /// Returns the unit's kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the unit's member coordinates, in unit order.
    #[must_use]
    #[inline]
    pub fn coords(&self) -> &[Coord; 9] {
        &self.coords
    }

    /// Returns `true` if the coordinate belongs to this unit.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Returns `true` if every cell in the unit is solved.
    #[must_use]
    pub fn is_solved(&self, board: &Board) -> bool {
        self.coords.iter().all(|&c| board.cell(c).is_solved())
    }

    /// Returns `true` if the unit contains a cell solved with `digit`.
    #[must_use]
    pub fn has_solved_cell_with_value(&self, board: &Board, digit: Digit) -> bool {
        self.coords
            .iter()
            .any(|&c| board.cell(c).solution() == Some(digit))
    }

    /// Checks that no two solved cells in the unit share a value.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction::DuplicateValue`] on the first duplicate.
    pub fn validate(&self, board: &Board) -> Result<(), Contradiction> {
        let mut seen = DigitSet::EMPTY;
        for &coord in &self.coords {
            if let Some(digit) = board.cell(coord).solution() {
                if !seen.insert(digit) {
                    return Err(Contradiction::DuplicateValue {
                        digit,
                        kind: self.kind,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the two blocks sharing this block's band, left/right of it.
    ///
    /// # Errors
    ///
    /// - [`StructureError::NotABlock`] if invoked on a row or column unit.
    /// - [`StructureError::NeighbourCount`] if the board does not hold
    ///   exactly 2 such blocks (unreachable on a well-formed board).
    pub fn horizontal_neighbours(&self, board: &Board) -> Result<[Self; 2], StructureError> {
        self.neighbours(board, "horizontal", |a, b| a.band() == b.band())
    }

    /// Returns the two blocks sharing this block's stack, above/below it.
    ///
    /// # Errors
    ///
    /// - [`StructureError::NotABlock`] if invoked on a row or column unit.
    /// - [`StructureError::NeighbourCount`] if the board does not hold
    ///   exactly 2 such blocks (unreachable on a well-formed board).
    pub fn vertical_neighbours(&self, board: &Board) -> Result<[Self; 2], StructureError> {
        self.neighbours(board, "vertical", |a, b| a.stack() == b.stack())
    }

    fn neighbours(
        &self,
        board: &Board,
        axis: &'static str,
        shares_band: impl Fn(Coord, Coord) -> bool,
    ) -> Result<[Self; 2], StructureError> {
        if self.kind != UnitKind::Block {
            return Err(StructureError::NotABlock { kind: self.kind });
        }
        let mut found = [None; 2];
        let mut count = 0;
        for block in board.blocks() {
            if block != self && shares_band(block.coords[0], self.coords[0]) {
                if count < 2 {
                    found[count] = Some(*block);
                }
                count += 1;
            }
        }
        match (found[0], found[1]) {
            (Some(a), Some(b)) if count == 2 => Ok([a, b]),
            _ => Err(StructureError::NeighbourCount { axis, count }),
        }
    }

    /// Returns the in-block row index (0-2) holding every cell of this block
    /// that still has `digit` as a candidate, or `None` if the candidate is
    /// absent or spread over more than one row.
    ///
    /// Solved cells whose value is `digit` participate: a placed value pins
    /// its row just as a confined candidate does. Meaningful for block units.
    #[must_use]
    pub fn unique_row_for_candidate(&self, board: &Board, digit: Digit) -> Option<u8> {
        self.unique_line_for_candidate(board, digit, Coord::row_in_block)
    }

    /// Returns the in-block column index (0-2) holding every cell of this
    /// block that still has `digit` as a candidate, or `None` if the
    /// candidate is absent or spread over more than one column.
    ///
    /// Solved cells whose value is `digit` participate. Meaningful for block
    /// units.
    #[must_use]
    pub fn unique_column_for_candidate(&self, board: &Board, digit: Digit) -> Option<u8> {
        self.unique_line_for_candidate(board, digit, Coord::col_in_block)
    }

    fn unique_line_for_candidate(
        &self,
        board: &Board,
        digit: Digit,
        line_of: impl Fn(Coord) -> u8,
    ) -> Option<u8> {
        let mut line = None;
        for &coord in &self.coords {
            if !board.cell(coord).has_candidate(digit) {
                continue;
            }
            match line {
                None => line = Some(line_of(coord)),
                Some(l) if l == line_of(coord) => {}
                Some(_) => return None,
            }
        }
        line
    }
}
