//! Propagation orchestration and solving entry point.

use gridlock_core::{Board, Unit};
use log::{debug, trace};

use crate::{
    SolverError, brute_force,
    rule::{LockedColumns, LockedIntersection, LockedRows, NakedSubsets, Rule},
};

/// Statistics collected during a solve.
///
/// Tracks, per rule, how many applications changed the board, plus the number
/// of propagation passes, backtracking invocations, and guesses tried. The
/// backtracking counters make "this puzzle needed no guessing" observable.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::{SolveStats, Solver};
///
/// let board = Board::new();
/// let solver = Solver::new();
/// let mut stats = SolveStats::default();
///
/// let solved = solver.solve_with_stats(&board, &mut stats)?;
/// assert!(solved.is_solved());
/// println!(
///     "passes: {}, guesses: {}",
///     stats.passes(),
///     stats.guesses()
/// );
/// # Ok::<(), gridlock_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    naked_subsets: usize,
    locked_rows: usize,
    locked_columns: usize,
    locked_intersection: usize,
    passes: usize,
    brute_force_calls: usize,
    guesses: usize,
}

impl SolveStats {
    /// Returns how many [`NakedSubsets`] applications changed the board.
    #[must_use]
    pub fn naked_subsets(&self) -> usize {
        self.naked_subsets
    }

    /// Returns how many [`LockedRows`] applications changed the board.
    #[must_use]
    pub fn locked_rows(&self) -> usize {
        self.locked_rows
    }

    /// Returns how many [`LockedColumns`] applications changed the board.
    #[must_use]
    pub fn locked_columns(&self) -> usize {
        self.locked_columns
    }

    /// Returns how many [`LockedIntersection`] applications changed the board.
    #[must_use]
    pub fn locked_intersection(&self) -> usize {
        self.locked_intersection
    }

    /// Returns the number of full propagation passes run, across all
    /// backtracking branches.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns how many times the backtracking search was entered.
    #[must_use]
    pub fn brute_force_calls(&self) -> usize {
        self.brute_force_calls
    }

    /// Returns the number of candidate guesses tried by the search.
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Returns `true` if the solve needed the backtracking search at all.
    #[must_use]
    pub fn has_backtracked(&self) -> bool {
        self.brute_force_calls > 0
    }

    pub(crate) fn record_brute_force_call(&mut self) {
        self.brute_force_calls += 1;
    }

    pub(crate) fn record_guess(&mut self) {
        self.guesses += 1;
    }
}

/// The solving engine: propagation to fixpoint, then backtracking.
///
/// One propagation pass applies [`NakedSubsets`] to all 27 units, then walks
/// the 9 blocks running [`LockedRows`], [`LockedColumns`], and
/// [`LockedIntersection`] with a naked-subset cleanup after each, skipping
/// ahead whenever the block becomes solved. Passes repeat until one changes
/// nothing; if the board is still unsolved, the clone-isolated backtracking
/// search takes over, recursing into this same pipeline per guess.
///
/// The input board is never mutated; the result is a new board. An
/// exhausted search returns the propagated board unsolved rather than
/// erring.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::Solver;
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
/// let solved = Solver::new().solve(&board)?;
/// assert!(solved.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    naked_subsets: NakedSubsets,
    locked_rows: LockedRows,
    locked_columns: LockedColumns,
    locked_intersection: LockedIntersection,
}

impl Solver {
    /// Creates a solver with the standard rule pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            naked_subsets: NakedSubsets::new(),
            locked_rows: LockedRows::new(),
            locked_columns: LockedColumns::new(),
            locked_intersection: LockedIntersection::new(),
        }
    }

    /// Solves the board, returning a new board with the result.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the board's givens are contradictory.
    /// Contradictions arising from guesses are handled internally.
    pub fn solve(&self, board: &Board) -> Result<Board, SolverError> {
        let mut stats = SolveStats::default();
        self.solve_with_stats(board, &mut stats)
    }

    /// Solves the board, accumulating statistics into `stats`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the board's givens are contradictory.
    pub fn solve_with_stats(
        &self,
        board: &Board,
        stats: &mut SolveStats,
    ) -> Result<Board, SolverError> {
        self.solve_board(board.clone(), stats)
    }

    /// Runs the full pipeline on an owned board: propagation to fixpoint,
    /// then the backtracking search. Also the recursion target for each
    /// search guess.
    pub(crate) fn solve_board(
        &self,
        mut board: Board,
        stats: &mut SolveStats,
    ) -> Result<Board, SolverError> {
        self.propagate(&mut board, stats)?;
        if board.is_solved() {
            board.validate().map_err(SolverError::from)?;
            return Ok(board);
        }
        brute_force::search(self, &board, stats)
    }

    /// Repeats propagation passes until the board is solved or a pass
    /// changes nothing.
    fn propagate(&self, board: &mut Board, stats: &mut SolveStats) -> Result<(), SolverError> {
        while !board.is_solved() {
            let changed = self.run_pass(board, stats)?;
            stats.passes += 1;
            debug!("pass {} changed={changed}", stats.passes);
            if !changed {
                break;
            }
        }
        Ok(())
    }

    fn run_pass(&self, board: &mut Board, stats: &mut SolveStats) -> Result<bool, SolverError> {
        // Units are copied out because rules need the board mutably.
        let units = *board.units();
        let mut changed = false;

        for unit in &units {
            changed |=
                Self::apply_counted(&self.naked_subsets, board, unit, &mut stats.naked_subsets)?;
        }

        for block in &units[18..] {
            if block.is_solved(board) {
                continue;
            }
            changed |=
                Self::apply_counted(&self.locked_rows, board, block, &mut stats.locked_rows)?;
            if block.is_solved(board) {
                continue;
            }
            changed |=
                Self::apply_counted(&self.naked_subsets, board, block, &mut stats.naked_subsets)?;
            if block.is_solved(board) {
                continue;
            }
            changed |=
                Self::apply_counted(&self.locked_columns, board, block, &mut stats.locked_columns)?;
            if block.is_solved(board) {
                continue;
            }
            changed |=
                Self::apply_counted(&self.naked_subsets, board, block, &mut stats.naked_subsets)?;
            if block.is_solved(board) {
                continue;
            }
            changed |= Self::apply_counted(
                &self.locked_intersection,
                board,
                block,
                &mut stats.locked_intersection,
            )?;
            if block.is_solved(board) {
                continue;
            }
            changed |=
                Self::apply_counted(&self.naked_subsets, board, block, &mut stats.naked_subsets)?;
        }

        Ok(changed)
    }

    fn apply_counted(
        rule: &dyn Rule,
        board: &mut Board,
        unit: &Unit,
        counter: &mut usize,
    ) -> Result<bool, SolverError> {
        let changed = rule.apply(board, unit)?;
        if changed {
            *counter += 1;
            trace!("{} changed a {} unit", rule.name(), unit.kind());
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Coord, Digit};

    use super::*;

    #[test]
    fn test_solve_leaves_input_untouched() {
        let board = Board::from_rows(&[
            "....9..16",
            "..7..6.42",
            "..8..7...",
            "135...9..",
            "...18.5..",
            "........7",
            "3567....1",
            "..9....3.",
            "8...3....",
        ])
        .unwrap();
        let reference = board.clone();

        let solved = Solver::new().solve(&board).unwrap();
        assert!(solved.is_solved());
        assert_eq!(board, reference);
    }

    #[test]
    fn test_propagation_solves_single_blank_per_unit() {
        let mut board = Board::new();
        // A solved row except for one cell: the naked-single sweep finishes
        // it without guessing.
        let values = [
            Digit::D2,
            Digit::D4,
            Digit::D3,
            Digit::D8,
            Digit::D9,
            Digit::D5,
            Digit::D7,
            Digit::D1,
        ];
        for (i, digit) in values.into_iter().enumerate() {
            let x = u8::try_from(i + 1).unwrap();
            board.set_cell_value(Coord::new(x, 1), digit);
        }

        let mut stats = SolveStats::default();
        let mut propagated = board.clone();
        Solver::new()
            .propagate(&mut propagated, &mut stats)
            .unwrap();
        assert_eq!(
            propagated.cell(Coord::new(9, 1)).solution(),
            Some(Digit::D6)
        );
        assert!(!stats.has_backtracked());
    }

    #[test]
    fn test_stats_count_changed_applications_only() {
        // Propagation on an all-blank board is a no-op: one pass, no
        // applications.
        let mut board = Board::new();
        let mut stats = SolveStats::default();
        Solver::new().propagate(&mut board, &mut stats).unwrap();

        assert_eq!(stats.passes(), 1);
        assert_eq!(stats.naked_subsets(), 0);
        assert_eq!(stats.locked_rows(), 0);
        assert_eq!(stats.locked_columns(), 0);
        assert_eq!(stats.locked_intersection(), 0);
    }
}
