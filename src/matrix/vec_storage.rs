//! `VecColumnStorage`: sorted-vector column store.
//!
//! Each column is a strictly ascending `Vec<usize>` of row indices; the
//! pivot is the last element and column addition is a linear sorted merge
//! that drops entries occurring in both operands. This is the default
//! representation and the right choice for the shallow, wide columns of
//! typical filtrations.

use crate::matrix::storage::{ColumnStorage, check_column, check_entries};
use crate::pers_error::PersMatrixError;

/// Column store backed by one sorted `Vec<usize>` per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecColumnStorage {
    columns: Vec<Vec<usize>>,
}

/// Symmetric difference of two strictly ascending index sequences.
fn symmetric_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

impl ColumnStorage for VecColumnStorage {
    fn set_num_columns(&mut self, num_columns: usize) {
        self.columns.resize(num_columns, Vec::new());
    }

    #[inline]
    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: usize, entries: &[usize]) -> Result<(), PersMatrixError> {
        check_column(column, self.columns.len())?;
        check_entries(column, entries)?;
        self.columns[column] = entries.to_vec();
        Ok(())
    }

    fn column(&self, column: usize) -> Result<Vec<usize>, PersMatrixError> {
        check_column(column, self.columns.len())?;
        Ok(self.columns[column].clone())
    }

    fn clear_column(&mut self, column: usize) -> Result<(), PersMatrixError> {
        check_column(column, self.columns.len())?;
        self.columns[column].clear();
        Ok(())
    }

    fn add_columns(&mut self, source: usize, target: usize) -> Result<(), PersMatrixError> {
        check_column(source, self.columns.len())?;
        check_column(target, self.columns.len())?;
        if source == target {
            self.columns[target].clear();
            return Ok(());
        }
        let merged = symmetric_difference(&self.columns[source], &self.columns[target]);
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        debug_assert!(
            merged.windows(2).all(|w| w[0] < w[1]),
            "merged column must stay strictly ascending"
        );
        self.columns[target] = merged;
        Ok(())
    }

    fn maximum_index(&self, column: usize) -> Result<Option<usize>, PersMatrixError> {
        check_column(column, self.columns.len())?;
        Ok(self.columns[column].last().copied())
    }

    fn column_dimension(&self, column: usize) -> Result<usize, PersMatrixError> {
        check_column(column, self.columns.len())?;
        Ok(self.columns[column].len().saturating_sub(1))
    }

    fn dimension(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
    }
}
