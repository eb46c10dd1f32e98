//! The 9×9 board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    cell::Cell,
    coord::Coord,
    digit::Digit,
    error::{BoardError, Contradiction, InputError},
    unit::Unit,
};

/// A 9×9 puzzle board.
///
/// The board owns 81 [`Cell`]s in row-major order together with the fixed set
/// of 27 [`Unit`]s (9 rows, 9 columns, 9 blocks) constraining them. Cloning a
/// board copies every cell, so a clone can be mutated freely without touching
/// the original. The backtracking search relies on this to explore guesses on
/// throwaway copies.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Coord, Digit};
///
/// let board = Board::from_rows(&[
///     "....9..16",
///     "..7..6.42",
///     "..8..7...",
///     "135...9..",
///     "...18.5..",
///     "........7",
///     "3567....1",
///     "..9....3.",
///     "8...3....",
/// ])?;
///
/// assert_eq!(board.cell(Coord::new(5, 1)).solution(), Some(Digit::D9));
/// assert!(!board.is_solved());
/// # Ok::<(), gridlock_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
    units: [Unit; 27],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board where every cell holds all nine candidates.
    #[must_use]
    pub fn new() -> Self {
        let units = std::array::from_fn(|i| {
            let i = u8::try_from(i).unwrap_or_default();
            match i {
                0..=8 => Unit::row(i + 1),
                9..=17 => Unit::column(i - 8),
                _ => Unit::block((i - 18) / 3, (i - 18) % 3),
            }
        });
        Self {
            cells: [Cell::new(); 81],
            units,
        }
    }

    /// Creates a board from 9 rows of 9 characters, where `'1'..='9'` are
    /// given values and `'.'` marks an empty cell.
    ///
    /// Givens are validated as they are placed, so a contradictory grid is
    /// rejected at the first offending value.
    ///
    /// # Errors
    ///
    /// - [`InputError::RowCount`] / [`InputError::RowLength`] /
    ///   [`InputError::IllegalCharacter`] for malformed text.
    /// - [`Contradiction::DuplicateValue`] if two givens collide in a unit.
    ///
    /// [`Contradiction::DuplicateValue`]: crate::Contradiction::DuplicateValue
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != 9 {
            return Err(InputError::RowCount { count: rows.len() }.into());
        }
        let mut board = Self::new();
        for (i, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != 9 {
                return Err(InputError::RowLength { row: i + 1, len }.into());
            }
            for (j, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let Some(digit) = Digit::from_char(ch) else {
                    return Err(InputError::IllegalCharacter { row: i + 1, ch }.into());
                };
                let x = u8::try_from(j + 1).unwrap_or_default();
                let y = u8::try_from(i + 1).unwrap_or_default();
                board.set_cell_value(Coord::new(x, y), digit);
                board.validate()?;
            }
        }
        Ok(board)
    }

    /// Returns the cell at the coordinate.
    #[must_use]
    #[inline]
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    /// Returns a mutable reference to the cell at the coordinate.
    #[inline]
    pub fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.index()]
    }

    /// Assigns a definitive value to the cell at the coordinate.
    #[inline]
    pub fn set_cell_value(&mut self, coord: Coord, digit: Digit) {
        self.cell_mut(coord).set_value(digit);
    }

    /// Returns all 27 units: rows 1-9, then columns 1-9, then blocks in
    /// band-major order.
    #[must_use]
    #[inline]
    pub fn units(&self) -> &[Unit; 27] {
        &self.units
    }

    /// Returns the 9 row units, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &Unit> {
        self.units[0..9].iter()
    }

    /// Returns the 9 column units, left to right.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = &Unit> {
        self.units[9..18].iter()
    }

    /// Returns the 9 block units in band-major order.
    #[inline]
    pub fn blocks(&self) -> impl Iterator<Item = &Unit> {
        self.units[18..27].iter()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Returns the first unsolved cell in row-major order, or `None` if the
    /// board is solved.
    #[must_use]
    pub fn first_unsolved_cell(&self) -> Option<Coord> {
        Coord::all().find(|&c| !self.cell(c).is_solved())
    }

    /// Checks every unit for duplicate solved values.
    ///
    /// # Errors
    ///
    /// Returns the first [`Contradiction`] found.
    pub fn validate(&self) -> Result<(), Contradiction> {
        for unit in &self.units {
            unit.validate(self)?;
        }
        Ok(())
    }
}

impl Display for Board {
    /// Renders the board as 9 lines of space-padded cells, solved cells as
    /// their digit and unsolved cells as `'.'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=9 {
            for x in 1..=9 {
                let ch = self
                    .cell(Coord::new(x, y))
                    .solution()
                    .map_or('.', Digit::to_char);
                write!(f, " {ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the same layout [`Display`] produces. Spaces within a line are
    /// ignored, so compact 9-character rows parse too.
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let rows: Vec<String> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|line: &String| !line.is_empty())
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;

    const GRID: [&str; 9] = [
        "....9..16",
        "..7..6.42",
        "..8..7...",
        "135...9..",
        "...18.5..",
        "........7",
        "3567....1",
        "..9....3.",
        "8...3....",
    ];

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_solved());
        assert_eq!(board.first_unsolved_cell(), Some(Coord::new(1, 1)));
        for coord in Coord::all() {
            assert_eq!(board.cell(coord).candidates().len(), 9);
        }
    }

    #[test]
    fn test_from_rows_places_givens() {
        let board = Board::from_rows(&GRID).unwrap();
        assert_eq!(board.cell(Coord::new(9, 1)).solution(), Some(Digit::D6));
        assert_eq!(board.cell(Coord::new(1, 4)).solution(), Some(Digit::D1));
        assert_eq!(board.cell(Coord::new(1, 1)).solution(), None);
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert_eq!(
            Board::from_rows(&GRID[..8]),
            Err(BoardError::Input(InputError::RowCount { count: 8 }))
        );

        let mut rows = GRID;
        rows[4] = "..18.5..";
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::Input(InputError::RowLength { row: 5, len: 8 }))
        );
    }

    #[test]
    fn test_from_rows_rejects_illegal_character() {
        let mut rows = GRID;
        rows[2] = "..8..7..x";
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::Input(InputError::IllegalCharacter {
                row: 3,
                ch: 'x'
            }))
        );
    }

    #[test]
    fn test_from_rows_rejects_contradictory_givens() {
        let mut rows = GRID;
        rows[0] = "9...9..16";
        let err = Board::from_rows(&rows);
        assert!(matches!(err, Err(BoardError::Contradiction(_))));
    }

    #[test]
    fn test_units_cover_every_coordinate_three_times() {
        let board = Board::new();
        for coord in Coord::all() {
            let covering = board.units().iter().filter(|u| u.contains(coord)).count();
            assert_eq!(covering, 3);
        }
    }

    #[test]
    fn test_clone_is_isolated() {
        let board = Board::from_rows(&GRID).unwrap();
        let mut clone = board.clone();
        clone.set_cell_value(Coord::new(1, 1), Digit::D2);
        assert_eq!(board.cell(Coord::new(1, 1)).solution(), None);
        assert_ne!(board, clone);
    }

    #[test]
    fn test_display_from_str_round_trip() {
        let board = Board::from_rows(&GRID).unwrap();
        let rendered = board.to_string();
        assert!(rendered.lines().next().is_some_and(|l| l.contains(" 9 ")));
        let reparsed: Board = rendered.parse().unwrap();
        for coord in Coord::all() {
            assert_eq!(
                board.cell(coord).solution(),
                reparsed.cell(coord).solution()
            );
        }
    }

    #[test]
    fn test_from_str_accepts_compact_rows() {
        let board: Board = GRID.join("\n").parse().unwrap();
        assert_eq!(board.cell(Coord::new(5, 1)).solution(), Some(Digit::D9));
    }

    #[test]
    fn test_neighbour_lookup_through_board() {
        // Exercised here since the neighbour scan reads the board's block
        // list.
        let board = Board::new();
        let corner = Unit::block(0, 0);
        let result = corner.horizontal_neighbours(&board);
        assert_eq!(result, Ok([Unit::block(0, 1), Unit::block(0, 2)]));
        let err = Unit::column(1).vertical_neighbours(&board);
        assert_eq!(
            err,
            Err(StructureError::NotABlock {
                kind: crate::UnitKind::Column
            })
        );
    }
}
