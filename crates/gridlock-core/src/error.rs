//! Error taxonomy for board construction and solving.
//!
//! Three distinct failure classes exist:
//!
//! - [`InputError`] — malformed initial grid text; user-facing and
//!   recoverable by re-entry.
//! - [`StructureError`] — malformed unit or board construction; unreachable
//!   given correct construction code.
//! - [`Contradiction`] — a board invariant broken at runtime: a duplicate
//!   solved value in a unit, or an attempted removal of a cell's last
//!   candidate. Caught locally by the backtracking search to prune a branch.
//!
//! [`BoardError`] is the umbrella returned by [`Board::from_rows`].
//!
//! [`Board::from_rows`]: crate::Board::from_rows

use derive_more::{Display, Error, From};

use crate::{coord::Coord, digit::Digit, unit::UnitKind};

/// A malformed initial grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The grid does not contain exactly 9 rows.
    #[display("row count must be 9, found {count}")]
    RowCount {
        /// Number of rows supplied.
        count: usize,
    },
    /// A row does not contain exactly 9 characters.
    #[display("row length must be 9, found {len} in row {row}")]
    RowLength {
        /// 1-based row number.
        row: usize,
        /// Number of characters in the row.
        len: usize,
    },
    /// A row contains a character other than `'.'` or `'1'..='9'`.
    #[display("illegal character '{ch}' in row {row}; only digits 1-9 or '.' are allowed")]
    IllegalCharacter {
        /// 1-based row number.
        row: usize,
        /// The offending character.
        ch: char,
    },
    /// A cell value outside the range 1-9.
    #[display("cell value must be in range 1-9, got {value}")]
    InvalidValue {
        /// The offending value.
        value: u8,
    },
}

/// A malformed unit or board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StructureError {
    /// A unit was built from a coordinate list that is not 9 long.
    #[display("unit must contain exactly 9 cells, found {count}")]
    CellCount {
        /// Number of coordinates supplied.
        count: usize,
    },
    /// A unit was built from a coordinate list with repeats.
    #[display("unit contains duplicate coordinate {coord}")]
    DuplicateCoord {
        /// The repeated coordinate.
        coord: Coord,
    },
    /// A unit's coordinates do not align for its kind.
    #[display("{kind} unit coordinates are not aligned")]
    Misaligned {
        /// The unit kind whose alignment rule was violated.
        kind: UnitKind,
    },
    /// A block did not have exactly 2 neighbours along an axis.
    #[display("block must have exactly 2 {axis} neighbours, found {count}")]
    NeighbourCount {
        /// `"horizontal"` or `"vertical"`.
        axis: &'static str,
        /// Number of neighbours found.
        count: usize,
    },
    /// A block-only operation was invoked on a row or column unit.
    #[display("operation requires a block unit, got a {kind} unit")]
    NotABlock {
        /// The kind of the unit the operation was invoked on.
        kind: UnitKind,
    },
}

/// A board invariant broken at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Contradiction {
    /// Two solved cells in one unit hold the same value.
    #[display("value {digit} appears more than once in a {kind} unit")]
    DuplicateValue {
        /// The duplicated value.
        digit: Digit,
        /// The kind of unit containing the duplicate.
        kind: UnitKind,
    },
    /// An attempt to remove a solved cell's sole remaining candidate.
    #[display("cannot remove last candidate {digit} from a solved cell")]
    LastCandidate {
        /// The candidate whose removal was attempted.
        digit: Digit,
    },
    /// An inference forced a value onto an already-solved cell.
    #[display("cell {coord} forced by intersection is already solved")]
    AlreadySolved {
        /// The affected cell.
        coord: Coord,
    },
}

/// Any error produced while constructing a board from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum BoardError {
    /// Malformed grid text.
    #[display("{_0}")]
    Input(#[error(source)] InputError),
    /// Malformed unit or board construction.
    #[display("{_0}")]
    Structure(#[error(source)] StructureError),
    /// Contradictory givens.
    #[display("{_0}")]
    Contradiction(#[error(source)] Contradiction),
}
