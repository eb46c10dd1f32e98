//! Clone-isolated backtracking search.
//!
//! Invoked when propagation reaches a fixpoint on an unsolved board. Every
//! guess runs on its own clone of the board; a failed guess's clone is
//! discarded wholesale, so partial mutations never leak into sibling guesses
//! or the caller's board. Recursion depth is bounded by the number of
//! unsolved cells.

use gridlock_core::Board;
use log::{debug, trace};

use crate::{SolveStats, Solver, SolverError};

/// Searches for a solution by guessing candidates of the first unsolved cell
/// in row-major order, ascending.
///
/// Each candidate is assigned on a fresh clone, validated, and on success fed
/// back into the full solve pipeline. The first fully solved board wins.
/// Exhausting every candidate returns a copy of the input board unchanged;
/// an unsolved result is not an error.
pub(crate) fn search(
    solver: &Solver,
    board: &Board,
    stats: &mut SolveStats,
) -> Result<Board, SolverError> {
    if board.is_solved() {
        return Ok(board.clone());
    }
    let Some(coord) = board.first_unsolved_cell() else {
        return Ok(board.clone());
    };
    stats.record_brute_force_call();

    let candidates = board.cell(coord).candidates();
    debug!("guessing at {coord} among {candidates:?}");
    for digit in candidates {
        stats.record_guess();
        let mut clone = board.clone();
        clone.set_cell_value(coord, digit);
        if let Err(err) = clone.validate() {
            trace!("guess {digit} at {coord} rejected: {err}");
            continue;
        }
        match solver.solve_board(clone, stats) {
            Ok(result) if result.is_solved() => return Ok(result),
            Ok(_) => {}
            Err(SolverError::Contradiction(err)) => {
                trace!("guess {digit} at {coord} pruned: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(board.clone())
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Coord, Digit};

    use super::*;

    #[test]
    fn test_solved_board_is_returned_as_is() {
        // Build a solved board through the solver itself.
        let solver = Solver::new();
        let solved = solver.solve(&Board::new()).unwrap();
        assert!(solved.is_solved());

        let mut stats = SolveStats::default();
        let result = search(&solver, &solved, &mut stats).unwrap();
        assert_eq!(result, solved);
        assert_eq!(stats.brute_force_calls(), 0);
    }

    #[test]
    fn test_search_counts_guesses() {
        let solver = Solver::new();
        let mut stats = SolveStats::default();
        let result = search(&solver, &Board::new(), &mut stats).unwrap();

        assert!(result.is_solved());
        assert!(stats.brute_force_calls() >= 1);
        assert!(stats.guesses() >= 1);
    }

    #[test]
    fn test_failed_guesses_do_not_leak_into_input() {
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

        let mut stats = SolveStats::default();
        let _ = search(&Solver::new(), &board, &mut stats).unwrap();
        assert_eq!(board, reference);
    }

    #[test]
    fn test_exhausted_search_returns_input_unsolved() {
        // (1, 1) is restricted to {1, 2}, but both values are already placed
        // in row 1: every guess fails validation and the search exhausts.
        let mut board = Board::new();
        board.set_cell_value(Coord::new(5, 1), Digit::D1);
        board.set_cell_value(Coord::new(6, 1), Digit::D2);
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                board
                    .cell_mut(Coord::new(1, 1))
                    .remove_candidate(digit)
                    .unwrap();
            }
        }

        let mut stats = SolveStats::default();
        let result = search(&Solver::new(), &board, &mut stats).unwrap();
        assert_eq!(result, board);
        assert!(!result.is_solved());
        assert_eq!(stats.guesses(), 2);
    }
}
