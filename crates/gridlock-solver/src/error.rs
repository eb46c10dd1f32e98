//! Solver error type.

use derive_more::{Display, Error, From};
use gridlock_core::{Contradiction, StructureError};

/// Any error produced by the solving engine.
///
/// A [`Contradiction`] marks a board state that cannot lead to a solution;
/// the backtracking search catches it locally to prune a branch. A
/// [`StructureError`] marks malformed board geometry and is unreachable on
/// boards built through [`gridlock_core::Board`]'s constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// A board invariant was broken while solving.
    #[display("{_0}")]
    Contradiction(#[error(source)] Contradiction),
    /// Malformed board geometry.
    #[display("{_0}")]
    Structure(#[error(source)] StructureError),
}

impl SolverError {
    /// Returns `true` for the [`Contradiction`] variant.
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction(_))
    }
}
