use gridlock_core::{Board, DigitSet, Unit};
use tinyvec::ArrayVec;

use crate::{SolverError, rule::Rule};

const NAME: &str = "Naked Subsets";

/// Intra-unit naked-subset elimination, generalized over subset size.
///
/// For each subset size n from 1 to 8, cells of the unit are grouped by
/// identical candidate sets of exactly n values. A group of exactly n such
/// cells claims those n values: no other cell of the unit can hold any of
/// them, so they are removed everywhere else. With n = 1 this degenerates to
/// the classic naked single, which also propagates solved cells into their
/// units.
///
/// Groupings are computed fresh for each size within a single invocation;
/// reaching a fixpoint requires the caller to loop until a pass reports no
/// change.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubsets {}

impl NakedSubsets {
    /// Creates a new `NakedSubsets` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedSubsets {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board, unit: &Unit) -> Result<bool, SolverError> {
        let mut changed = false;
        for n in 1..=8 {
            // Group cell indices by identical candidate set of size n. The
            // second element is a bitmask over the unit's 9 positions.
            let mut groups: ArrayVec<[(DigitSet, u16); 9]> = ArrayVec::new();
            for (i, &coord) in unit.coords().iter().enumerate() {
                let candidates = board.cell(coord).candidates();
                if candidates.len() != n {
                    continue;
                }
                match groups.iter_mut().find(|(set, _)| *set == candidates) {
                    Some((_, members)) => *members |= 1 << i,
                    None => groups.push((candidates, 1 << i)),
                }
            }

            for (set, members) in groups {
                if members.count_ones() != u32::from(n) {
                    continue;
                }
                for (i, &coord) in unit.coords().iter().enumerate() {
                    if members & (1 << i) != 0 {
                        continue;
                    }
                    let removed = board
                        .cell_mut(coord)
                        .remove_candidates(set)
                        .map_err(SolverError::from)?;
                    changed |= removed > 0;
                }
            }
        }
        Ok(changed)
    }
}
