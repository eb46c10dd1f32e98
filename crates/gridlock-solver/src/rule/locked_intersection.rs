use gridlock_core::{Board, Contradiction, Digit, Unit, UnitKind};
use tinyvec::{ArrayVec, array_vec};

use crate::{SolverError, rule::Rule};

const NAME: &str = "Locked Intersection";

/// Bidirectional cross-block forcing.
///
/// For each value not yet placed in a block, the two horizontal neighbours
/// may each pin the value to one in-block row, and the two vertical
/// neighbours to one in-block column. Starting from row set `{0, 1, 2}` minus
/// the pinned rows and the analogous column set, the sets are refined against
/// cells already solved in this block: a row all of whose cells at the
/// current column set are solved cannot host the value, and symmetrically for
/// columns. If both sets reduce to a single index, the cell at their
/// intersection must hold the value and is assigned directly.
///
/// The deduction leans on every value appearing exactly 3 times per band, so
/// it is only sound after naked-subset and locked row/column elimination have
/// already run in the same pass; the solver sequences it last.
///
/// Applied to a row or column unit the rule is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedIntersection {}

impl LockedIntersection {
    /// Creates a new `LockedIntersection` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

/// `{0, 1, 2}` minus the indices pinned by the two neighbours.
fn open_lines(pinned: [Option<u8>; 2]) -> ArrayVec<[u8; 3]> {
    let mut lines = array_vec![[u8; 3] => 0, 1, 2];
    for pin in pinned.into_iter().flatten() {
        lines.retain(|&line| line != pin);
    }
    lines
}

impl Rule for LockedIntersection {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError> {
        if unit.kind() != UnitKind::Block || unit.is_solved(board) {
            return Ok(false);
        }
        let horizontal = unit.horizontal_neighbours(board)?;
        let vertical = unit.vertical_neighbours(board)?;

        let mut changed = false;
        for digit in Digit::ALL {
            if unit.has_solved_cell_with_value(board, digit) {
                continue;
            }

            let mut rows = open_lines(
                horizontal.map(|neighbour| neighbour.unique_row_for_candidate(board, digit)),
            );
            let mut cols = open_lines(
                vertical.map(|neighbour| neighbour.unique_column_for_candidate(board, digit)),
            );

            if rows.len() != 1 || cols.len() != 1 {
                // Refine against solved cells, iterating over snapshots of
                // both sets so removals do not feed back into the checks.
                let row_snapshot = rows;
                let col_snapshot = cols;
                let solved_at = |row: u8, col: u8| {
                    board
                        .cell(unit.coords()[usize::from(3 * row + col)])
                        .is_solved()
                };
                for &row in &row_snapshot {
                    if col_snapshot.iter().all(|&col| solved_at(row, col)) {
                        rows.retain(|&r| r != row);
                    }
                }
                for &col in &col_snapshot {
                    if row_snapshot.iter().all(|&row| solved_at(row, col)) {
                        cols.retain(|&c| c != col);
                    }
                }
            }

            let (&[row], &[col]) = (rows.as_slice(), cols.as_slice()) else {
                continue;
            };
            let coord = unit.coords()[usize::from(3 * row + col)];
            if board.cell(coord).is_solved() {
                return Err(Contradiction::AlreadySolved { coord }.into());
            }
            board.set_cell_value(coord, digit);
            changed = true;
        }
        Ok(changed)
    }
}
