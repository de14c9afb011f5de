//! `BoundaryMatrix`: the matrix consumed by the reduction algorithms.
//!
//! A thin façade over a [`ColumnStorage`] that additionally carries the
//! `dualized` flag. The flag does not change the stored matrix; it is read
//! by the reduction algorithms to determine how persistence-pair indices
//! are calculated (see [`crate::reduction`]).
//!
//! Reduction mutates the matrix in place. [`Clone`] is the explicit
//! duplication operation: callers that still need the original clone it
//! before reducing.

use std::fmt;

use itertools::Itertools;

use crate::matrix::storage::ColumnStorage;
use crate::matrix::vec_storage::VecColumnStorage;
use crate::pers_error::PersMatrixError;

/// Square boundary matrix over the two-element field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryMatrix<S: ColumnStorage = VecColumnStorage> {
    storage: S,
    dualized: bool,
}

impl<S: ColumnStorage> BoundaryMatrix<S> {
    /// Create a matrix of `num_columns` empty columns.
    pub fn with_columns(num_columns: usize) -> Self {
        let mut storage = S::default();
        storage.set_num_columns(num_columns);
        Self {
            storage,
            dualized: false,
        }
    }

    /// Build a matrix from explicit column contents.
    ///
    /// # Errors
    /// Fails if any column violates the entry contract (ascending, unique,
    /// strictly below the column index).
    pub fn from_columns(columns: &[Vec<usize>]) -> Result<Self, PersMatrixError> {
        let mut matrix = Self::with_columns(columns.len());
        for (j, entries) in columns.iter().enumerate() {
            matrix.set_column(j, entries)?;
        }
        Ok(matrix)
    }

    /// Resize to `num_columns`, truncating or extending with empty columns.
    pub fn set_num_columns(&mut self, num_columns: usize) {
        self.storage.set_num_columns(num_columns);
    }

    /// Number of columns (and rows) of the matrix.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.storage.num_columns()
    }

    /// Replace the contents of `column` with `entries`.
    pub fn set_column(&mut self, column: usize, entries: &[usize]) -> Result<(), PersMatrixError> {
        self.storage.set_column(column, entries)
    }

    /// Ascending row indices of `column`.
    pub fn column(&self, column: usize) -> Result<Vec<usize>, PersMatrixError> {
        self.storage.column(column)
    }

    /// Empty `column`.
    pub fn clear_column(&mut self, column: usize) -> Result<(), PersMatrixError> {
        self.storage.clear_column(column)
    }

    /// `target ^= source` over the two-element field.
    pub fn add_columns(&mut self, source: usize, target: usize) -> Result<(), PersMatrixError> {
        self.storage.add_columns(source, target)
    }

    /// Pivot of `column`, or `None` if the column is empty.
    pub fn maximum_index(&self, column: usize) -> Result<Option<usize>, PersMatrixError> {
        self.storage.maximum_index(column)
    }

    /// Dimension of `column` (entry count minus one, 0 when empty).
    pub fn column_dimension(&self, column: usize) -> Result<usize, PersMatrixError> {
        self.storage.column_dimension(column)
    }

    /// Maximum simplex dimension present in the matrix.
    pub fn dimension(&self) -> usize {
        self.storage.dimension()
    }

    /// Whether the matrix was produced by [`crate::matrix::dualize`].
    #[inline]
    pub fn is_dualized(&self) -> bool {
        self.dualized
    }

    /// Mark the matrix as dualized (or not). Read by the reduction
    /// algorithms when calculating persistence-pair indices.
    #[inline]
    pub fn set_dualized(&mut self, dualized: bool) {
        self.dualized = dualized;
    }
}

/// Renders the persisted text shape: one line per column, space-separated
/// ascending row indices, `-` for an empty column.
impl<S: ColumnStorage> fmt::Display for BoundaryMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..self.num_columns() {
            let column = self.column(j).map_err(|_| fmt::Error)?;
            if column.is_empty() {
                writeln!(f, "-")?;
            } else {
                writeln!(f, "{}", column.iter().join(" "))?;
            }
        }
        Ok(())
    }
}
