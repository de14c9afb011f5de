//! Dualization: the anti-transpose transform.
//!
//! Every boundary relation "simplex `r` is a facet of simplex `i`" (`r < i`)
//! is rewritten as the relation between the complemented indices `N-1-i`
//! and `N-1-r` with source and target swapped. The result is the coboundary
//! matrix of the complex under the reversed filtration, whose
//! persistence-pairing structure is identical to the original's once pair
//! indices are mapped back through `idx → N-1-idx`. Either reduction
//! algorithm therefore doubles as a coreduction algorithm with no extra
//! logic.

use crate::matrix::boundary::BoundaryMatrix;
use crate::matrix::storage::ColumnStorage;
use crate::pers_error::PersMatrixError;

/// Anti-transpose `matrix` into a fresh, independently owned matrix.
///
/// The `dualized` flag of the result is the negation of the input's, so
/// `dualize(dualize(m))` reconstructs `m` exactly.
///
/// # Errors
/// [`PersMatrixError::EmptyMatrix`] if the matrix has no columns.
pub fn dualize<S: ColumnStorage>(
    matrix: &BoundaryMatrix<S>,
) -> Result<BoundaryMatrix<S>, PersMatrixError> {
    let n = matrix.num_columns();
    if n == 0 {
        return Err(PersMatrixError::EmptyMatrix);
    }

    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for r in matrix.column(i)? {
            columns[n - 1 - r].push(n - 1 - i);
        }
    }

    let mut dual = BoundaryMatrix::with_columns(n);
    for (j, mut entries) in columns.into_iter().enumerate() {
        if entries.is_empty() {
            continue;
        }
        // Entries arrive in descending source order; set_column wants them
        // ascending.
        entries.reverse();
        dual.set_column(j, &entries)?;
    }
    dual.set_dualized(!matrix.is_dualized());
    Ok(dual)
}
