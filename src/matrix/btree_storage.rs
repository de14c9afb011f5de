//! `BTreeColumnStorage`: ordered-set column store.
//!
//! Each column is a `BTreeSet<usize>`; column addition toggles membership
//! entry by entry. Suited to deep columns with scattered entries, where the
//! sorted-vector merge would shuffle long tails.

use std::collections::BTreeSet;

use crate::matrix::storage::{ColumnStorage, check_column, check_entries};
use crate::pers_error::PersMatrixError;

/// Column store backed by one `BTreeSet<usize>` per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BTreeColumnStorage {
    columns: Vec<BTreeSet<usize>>,
}

impl ColumnStorage for BTreeColumnStorage {
    fn set_num_columns(&mut self, num_columns: usize) {
        self.columns.resize(num_columns, BTreeSet::new());
    }

    #[inline]
    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn set_column(&mut self, column: usize, entries: &[usize]) -> Result<(), PersMatrixError> {
        check_column(column, self.columns.len())?;
        check_entries(column, entries)?;
        self.columns[column] = entries.iter().copied().collect();
        Ok(())
    }

    fn column(&self, column: usize) -> Result<Vec<usize>, PersMatrixError> {
        check_column(column, self.columns.len())?;
        Ok(self.columns[column].iter().copied().collect())
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
        let entries: Vec<usize> = self.columns[source].iter().copied().collect();
        let target = &mut self.columns[target];
        for row in entries {
            // Toggle membership: addition over the two-element field.
            if !target.remove(&row) {
                target.insert(row);
            }
        }
        Ok(())
    }

    fn maximum_index(&self, column: usize) -> Result<Option<usize>, PersMatrixError> {
        check_column(column, self.columns.len())?;
        Ok(self.columns[column].iter().next_back().copied())
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
