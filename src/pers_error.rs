//! `PersMatrixError`: unified error type for pers-matrix public APIs
//!
//! This error type is used throughout the pers-matrix library to provide
//! robust, non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for pers-matrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersMatrixError {
    /// A column index outside `[0, num_columns)` was passed to a matrix
    /// or column-storage operation.
    #[error("column index {column} out of bounds for matrix with {num_columns} columns")]
    ColumnOutOfBounds { column: usize, num_columns: usize },

    /// `set_column` received entries that are not strictly ascending.
    #[error("entries of column {column} must be unique and strictly ascending")]
    UnsortedColumnEntries { column: usize },

    /// A column entry references a row at or above the column itself,
    /// violating acyclicity of the boundary operator.
    #[error("entry {entry} of column {column} must be strictly smaller than the column index")]
    EntryOutOfRange { column: usize, entry: usize },

    /// Dualization requested on a matrix with no columns.
    #[error("cannot dualize a matrix with zero columns")]
    EmptyMatrix,

    /// Diagram conversion referenced an index the filtration does not cover.
    #[error("filtration with {num_simplices} simplices does not cover index {index}")]
    MissingFiltrationIndex { index: usize, num_simplices: usize },

    /// A text-format boundary matrix could not be parsed.
    #[error("boundary matrix parse error: {0}")]
    MatrixIoParse(String),

    /// An underlying I/O operation failed while reading or writing a matrix.
    #[error("boundary matrix I/O error: {0}")]
    Io(String),
}
