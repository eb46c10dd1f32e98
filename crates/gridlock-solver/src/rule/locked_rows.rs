use gridlock_core::{Board, Digit, Unit, UnitKind};

use crate::{SolverError, rule::Rule};

const NAME: &str = "Locked Rows";

/// Cross-block elimination along rows.
///
/// For each value not yet placed in a block: if one of the block's two
/// horizontal neighbours confines that value to a single in-block row, the
/// value must occupy that row inside the neighbour, so it cannot occupy the
/// same row of this block. The value is removed from the 3 cells of that row
/// here.
///
/// Applied to a row or column unit the rule is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedRows {}

impl LockedRows {
    /// Creates a new `LockedRows` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for LockedRows {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError> {
        if unit.kind() != UnitKind::Block || unit.is_solved(board) {
            return Ok(false);
        }
        let neighbours = unit.horizontal_neighbours(board)?;

        let mut changed = false;
        for digit in Digit::ALL {
            if unit.has_solved_cell_with_value(board, digit) {
                continue;
            }
            for neighbour in neighbours {
                let Some(row) = neighbour.unique_row_for_candidate(board, digit) else {
                    continue;
                };
                for i in usize::from(row) * 3..usize::from(row) * 3 + 3 {
                    let coord = unit.coords()[i];
                    changed |= board
                        .cell_mut(coord)
                        .remove_candidate(digit)
                        .map_err(SolverError::from)?;
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::Coord;

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_pinned_row_in_neighbour_eliminates_here() {
        // In the middle block of the top band, confine D4 to the top in-block
        // row. The left block must then drop D4 from its own top row.
        let mut board = Board::new();
        for &coord in Unit::block(0, 1).coords() {
            if coord.row_in_block() != 0 {
                board.cell_mut(coord).remove_candidate(Digit::D4).unwrap();
            }
        }

        RuleTester::new(board)
            .apply_once(&LockedRows::new(), &Unit::block(0, 0))
            .assert_removed_exact(Coord::new(1, 1), [Digit::D4])
            .assert_removed_exact(Coord::new(2, 1), [Digit::D4])
            .assert_removed_exact(Coord::new(3, 1), [Digit::D4])
            .assert_no_change(Coord::new(1, 2))
            .assert_no_change(Coord::new(1, 3));
    }

    #[test]
    fn test_skips_values_already_solved_in_block() {
        let mut board = Board::new();
        for &coord in Unit::block(0, 1).coords() {
            if coord.row_in_block() != 0 {
                board.cell_mut(coord).remove_candidate(Digit::D4).unwrap();
            }
        }
        // D4 already placed in the left block, second row.
        board.set_cell_value(Coord::new(2, 2), Digit::D4);

        RuleTester::new(board)
            .apply_once(&LockedRows::new(), &Unit::block(0, 0))
            .assert_no_change(Coord::new(1, 1))
            .assert_no_change(Coord::new(3, 1));
    }

    #[test]
    fn test_unconfined_neighbour_changes_nothing() {
        RuleTester::new(Board::new())
            .apply_once(&LockedRows::new(), &Unit::block(1, 1))
            .assert_no_change(Coord::new(4, 4))
            .assert_no_change(Coord::new(6, 6));
    }

    #[test]
    fn test_non_block_unit_is_a_no_op() {
        let mut board = Board::new();
        let changed = LockedRows::new()
            .apply(&mut board, &Unit::row(3))
            .unwrap();
        assert!(!changed);
        assert_eq!(board, Board::new());
    }
}
