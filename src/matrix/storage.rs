//! `ColumnStorage`: the column-level operation set of a boundary matrix.
//!
//! A boundary matrix over the two-element field is stored column by column;
//! column `j` is the ascending set of row indices of the simplices that
//! appear an odd number of times in the boundary of simplex `j`. The single
//! mutation primitive used by every reduction step is [`add_columns`], the
//! symmetric difference of two columns.
//!
//! # Errors
//! * [`PersMatrixError::ColumnOutOfBounds`]: a column index outside
//!   `[0, num_columns)` was passed to any operation.
//! * [`PersMatrixError::UnsortedColumnEntries`] /
//!   [`PersMatrixError::EntryOutOfRange`]: `set_column` received entries
//!   that are not strictly ascending, or that reference a row at or above
//!   the column itself (the boundary operator is acyclic: a simplex's
//!   boundary only references strictly earlier simplices in filtration
//!   order, and the anti-transpose preserves this).
//!
//! [`add_columns`]: ColumnStorage::add_columns

use crate::pers_error::PersMatrixError;

/// Sparse column store for a square matrix over the two-element field.
///
/// Implementations own `num_columns` columns, each an ascending set of row
/// indices strictly below the column's own index. The maximum entry of a
/// column is its *pivot*, the elimination target of the reduction
/// algorithms.
pub trait ColumnStorage: Clone + Default {
    /// Resize the store to `num_columns` columns, truncating or extending
    /// with empty columns.
    fn set_num_columns(&mut self, num_columns: usize);

    /// Number of columns currently stored.
    fn num_columns(&self) -> usize;

    /// Replace the contents of `column` with `entries`.
    ///
    /// Entries must be unique, strictly ascending, and strictly smaller
    /// than `column`; violations are reported as deterministic errors.
    fn set_column(&mut self, column: usize, entries: &[usize]) -> Result<(), PersMatrixError>;

    /// Ascending row indices of `column`.
    fn column(&self, column: usize) -> Result<Vec<usize>, PersMatrixError>;

    /// Empty `column`. Used for simplices with empty boundary (vertices)
    /// and by the twist reduction's eager creator clearing.
    fn clear_column(&mut self, column: usize) -> Result<(), PersMatrixError>;

    /// `target ^= source` over the two-element field (symmetric difference
    /// of the two entry sets). Adding a column to itself empties it.
    fn add_columns(&mut self, source: usize, target: usize) -> Result<(), PersMatrixError>;

    /// Pivot of `column`: its maximum row index, or `None` if empty.
    fn maximum_index(&self, column: usize) -> Result<Option<usize>, PersMatrixError>;

    /// Column dimension: number of entries minus one, or 0 for an empty
    /// column by convention.
    fn column_dimension(&self, column: usize) -> Result<usize, PersMatrixError>;

    /// Maximum column dimension over the whole store.
    fn dimension(&self) -> usize;
}

/// Bounds check shared by every storage implementation.
#[inline]
pub(crate) fn check_column(column: usize, num_columns: usize) -> Result<(), PersMatrixError> {
    if column < num_columns {
        Ok(())
    } else {
        Err(PersMatrixError::ColumnOutOfBounds {
            column,
            num_columns,
        })
    }
}

/// Entry validation shared by `set_column` implementations and the
/// filtration builder: strictly ascending, unique, strictly below `column`.
pub(crate) fn check_entries(column: usize, entries: &[usize]) -> Result<(), PersMatrixError> {
    for pair in entries.windows(2) {
        if pair[0] >= pair[1] {
            return Err(PersMatrixError::UnsortedColumnEntries { column });
        }
    }
    if let Some(&last) = entries.last() {
        if last >= column {
            return Err(PersMatrixError::EntryOutOfRange {
                column,
                entry: last,
            });
        }
    }
    Ok(())
}
