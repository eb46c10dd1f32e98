use gridlock_core::{Board, Digit, Unit, UnitKind};

use crate::{SolverError, rule::Rule};

const NAME: &str = "Locked Columns";

/// Cross-block elimination along columns.
///
/// The vertical counterpart of [`LockedRows`]: for each value not yet placed
/// in a block, if one of the block's two vertical neighbours confines that
/// value to a single in-block column, the value is removed from the 3 cells
/// of that column here.
///
/// Applied to a row or column unit the rule is a no-op.
///
/// [`LockedRows`]: crate::rule::LockedRows
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedColumns {}

impl LockedColumns {
    /// Creates a new `LockedColumns` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for LockedColumns {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError> {
        if unit.kind() != UnitKind::Block || unit.is_solved(board) {
            return Ok(false);
        }
        let neighbours = unit.vertical_neighbours(board)?;

        let mut changed = false;
        for digit in Digit::ALL {
            if unit.has_solved_cell_with_value(board, digit) {
                continue;
            }
            for neighbour in neighbours {
                let Some(column) = neighbour.unique_column_for_candidate(board, digit) else {
                    continue;
                };
                for i in [column, column + 3, column + 6] {
                    let coord = unit.coords()[usize::from(i)];
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
