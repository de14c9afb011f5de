//! Standard left-to-right reduction.

use crate::matrix::{BoundaryMatrix, ColumnStorage};
use crate::pers_error::PersMatrixError;
use crate::reduction::pairing::PersistencePairing;
use crate::reduction::{ReductionAlgorithm, record_pair};

/// Baseline reduction: process columns left to right, eliminating each
/// column against the earlier column sharing its pivot until the pivot is
/// unclaimed or the column is empty.
///
/// Every elimination strictly decreases the pivot or empties the column,
/// so the per-column loop terminates. The pivot→column lookup is a dense
/// table local to one run; no state survives between calls. Worst-case
/// work is bounded by the number of column additions, which can degrade
/// toward cubic on adversarial inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardReduction;

impl ReductionAlgorithm for StandardReduction {
    fn reduce<S: ColumnStorage>(
        &self,
        matrix: &mut BoundaryMatrix<S>,
        pairing: &mut PersistencePairing,
    ) -> Result<(), PersMatrixError> {
        let num_columns = matrix.num_columns();
        let dualized = matrix.is_dualized();
        let mut pivot_column: Vec<Option<usize>> = vec![None; num_columns];
        let mut additions = 0usize;

        for j in 0..num_columns {
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
            }
        }

        log::debug!("standard reduction: {num_columns} columns, {additions} column additions");
        Ok(())
    }
}
