//! Twist reduction: dimension-aware elimination with eager creator
//! clearing.

use crate::matrix::{BoundaryMatrix, ColumnStorage};
use crate::pers_error::PersMatrixError;
use crate::reduction::pairing::PersistencePairing;
use crate::reduction::{ReductionAlgorithm, record_pair};

/// Reduction that sweeps columns one dimension at a time, in descending
/// dimension order, and clears the creator column of every pair the moment
/// the pair is found.
///
/// A destroyer lives one dimension above its creator, so the descending
/// sweep reaches destroyers before their creators. A column known to be a
/// destroyer's pivot target reduces to zero anyway and can never become a
/// pivot target of a higher column; zeroing it up front removes it from
/// every elimination step that would otherwise have added through it. The
/// elimination rule itself is identical to [`StandardReduction`], and so is
/// the resulting pairing.
///
/// [`StandardReduction`]: crate::reduction::StandardReduction
#[derive(Debug, Default, Clone, Copy)]
pub struct TwistReduction;

impl ReductionAlgorithm for TwistReduction {
    fn reduce<S: ColumnStorage>(
        &self,
        matrix: &mut BoundaryMatrix<S>,
        pairing: &mut PersistencePairing,
    ) -> Result<(), PersMatrixError> {
        let num_columns = matrix.num_columns();
        let dualized = matrix.is_dualized();

        // Snapshot the column dimensions before touching the matrix:
        // additions and clears change column sizes, and a mutated column
        // must not migrate into a later sweep.
        let mut dimensions = Vec::with_capacity(num_columns);
        for j in 0..num_columns {
            dimensions.push(matrix.column_dimension(j)?);
        }
        let max_dimension = matrix.dimension();

        let mut pivot_column: Vec<Option<usize>> = vec![None; num_columns];
        let mut additions = 0usize;
        let mut cleared = 0usize;

        // The sweep runs down to dimension 0: primal dimension-0 columns
        // are empty and cost nothing, but dualized matrices carry
        // non-empty size-derived dimension-0 columns whose pairs would
        // otherwise be dropped.
        for dimension in (0..=max_dimension).rev() {
            for j in 0..num_columns {
                if dimensions[j] != dimension {
                    continue;
                }
                while let Some(low) = matrix.maximum_index(j)? {
                    match pivot_column[low] {
                        Some(i) => {
                            matrix.add_columns(i, j)?;
                            additions += 1;
                        }
                        None => break,
                    }
                }
                if let Some(low) = matrix.maximum_index(j)? {
                    pivot_column[low] = Some(j);
                    record_pair(pairing, dualized, num_columns, low, j);
                    matrix.clear_column(low)?;
                    cleared += 1;
                }
            }
        }

        log::debug!(
            "twist reduction: {num_columns} columns, {additions} column additions, {cleared} creators cleared"
        );
        Ok(())
    }
}
