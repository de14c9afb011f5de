//! Boundary-matrix reduction algorithms.
//!
//! Two strategies produce the persistence pairing of a boundary matrix:
//! - [`StandardReduction`]: the baseline left-to-right column elimination
//! - [`TwistReduction`]: dimension-aware elimination that eagerly clears
//!   creator columns, shortcutting most of the work on typical inputs
//!
//! Both yield identical pairings. Reduction consumes and mutates its input
//! matrix; clone the matrix first if the original is still needed. A run is
//! strictly sequential and atomic: column `j` depends on the final reduced
//! state of earlier columns, nothing suspends or blocks, and the matrix is
//! exclusively owned by the single call. Reducing independent matrices
//! concurrently requires nothing beyond giving each thread its own matrix.
//!
//! When the input matrix [is dualized](crate::matrix::BoundaryMatrix::is_dualized),
//! the algorithms map each recorded pair back through `idx → N-1-idx` with
//! creator and destroyer roles swapped, so the finished pairing is always
//! expressed in primal indices regardless of how it was computed.

pub mod pairing;
pub mod standard;
pub mod twist;

pub use pairing::PersistencePairing;
pub use standard::StandardReduction;
pub use twist::TwistReduction;

use crate::matrix::{BoundaryMatrix, ColumnStorage};
use crate::pers_error::PersMatrixError;

/// A boundary-matrix reduction strategy.
pub trait ReductionAlgorithm: Default {
    /// Reduce `matrix` in place, recording every `(creator, destroyer)`
    /// pair into `pairing`. The driver derives the unpaired set afterwards.
    fn reduce<S: ColumnStorage>(
        &self,
        matrix: &mut BoundaryMatrix<S>,
        pairing: &mut PersistencePairing,
    ) -> Result<(), PersMatrixError>;
}

/// Reduce `matrix` with algorithm `A` and return its persistence pairing.
///
/// The matrix is destroyed in the process (its columns end up reduced).
///
/// ```
/// use pers_matrix::prelude::*;
///
/// let mut matrix: BoundaryMatrix = BoundaryMatrix::from_columns(&[
///     vec![],
///     vec![],
///     vec![],
///     vec![0, 1],
///     vec![0, 2],
///     vec![1, 2],
///     vec![3, 4, 5],
/// ])?;
/// let pairing = compute_persistence_pairs::<TwistReduction, _>(&mut matrix)?;
/// assert_eq!(pairing.pairs(), &[(1, 3), (2, 4), (5, 6)]);
/// assert_eq!(pairing.unpaired(), &[0]);
/// # Ok::<(), pers_matrix::pers_error::PersMatrixError>(())
/// ```
pub fn compute_persistence_pairs<A, S>(
    matrix: &mut BoundaryMatrix<S>,
) -> Result<PersistencePairing, PersMatrixError>
where
    A: ReductionAlgorithm,
    S: ColumnStorage,
{
    let algorithm = A::default();
    let mut pairing = PersistencePairing::new();
    algorithm.reduce(matrix, &mut pairing)?;
    pairing.finalize(matrix.num_columns());
    Ok(pairing)
}

/// Record a raw `(low, column)` pair found during reduction, mapping back
/// to primal indices when the matrix is dualized.
#[inline]
pub(crate) fn record_pair(
    pairing: &mut PersistencePairing,
    dualized: bool,
    num_columns: usize,
    low: usize,
    column: usize,
) {
    if dualized {
        pairing.add(num_columns - 1 - column, num_columns - 1 - low);
    } else {
        pairing.add(low, column);
    }
}
