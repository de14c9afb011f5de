//! Plain-text boundary matrix reader and writer.
//!
//! # Format
//! One line per column, columns in index order; no header. A line is either
//! space-separated non-negative integers (the ascending row indices of that
//! column) or a single `-` (an empty column). The number of lines defines
//! the number of columns.
//!
//! # Errors
//! Reading fails fast with a descriptive error on an empty file, blank or
//! non-integer lines, descending or duplicate indices, and indices at or
//! above their column. No partial recovery is attempted.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;

use crate::matrix::{BoundaryMatrix, ColumnStorage};
use crate::pers_error::PersMatrixError;

/// Read a boundary matrix from the text format.
pub fn read_boundary_matrix<S, R>(mut reader: R) -> Result<BoundaryMatrix<S>, PersMatrixError>
where
    S: ColumnStorage,
    R: Read,
{
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| PersMatrixError::Io(e.to_string()))?;
    parse(&contents)
}

fn parse<S: ColumnStorage>(contents: &str) -> Result<BoundaryMatrix<S>, PersMatrixError> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(PersMatrixError::MatrixIoParse(
            "empty boundary matrix file".into(),
        ));
    }

    let mut matrix = BoundaryMatrix::with_columns(lines.len());
    for (j, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line == "-" {
            continue;
        }
        if line.is_empty() {
            return Err(PersMatrixError::MatrixIoParse(format!(
                "line {}: blank line (use `-` for an empty column)",
                j + 1
            )));
        }
        let entries = line
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| {
                    PersMatrixError::MatrixIoParse(format!(
                        "line {}: invalid row index `{token}`",
                        j + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        matrix.set_column(j, &entries)?;
    }
    Ok(matrix)
}

/// Write a boundary matrix in the text format.
pub fn write_boundary_matrix<S, W>(
    mut writer: W,
    matrix: &BoundaryMatrix<S>,
) -> Result<(), PersMatrixError>
where
    S: ColumnStorage,
    W: Write,
{
    for j in 0..matrix.num_columns() {
        let column = matrix.column(j)?;
        let result = if column.is_empty() {
            writeln!(writer, "-")
        } else {
            writeln!(writer, "{}", column.iter().join(" "))
        };
        result.map_err(|e| PersMatrixError::Io(e.to_string()))?;
    }
    Ok(())
}

/// Load a boundary matrix from a file.
pub fn load_boundary_matrix<S, P>(path: P) -> Result<BoundaryMatrix<S>, PersMatrixError>
where
    S: ColumnStorage,
    P: AsRef<Path>,
{
    let file = File::open(path).map_err(|e| PersMatrixError::Io(e.to_string()))?;
    read_boundary_matrix(file)
}

/// Store a boundary matrix to a file.
pub fn store_boundary_matrix<S, P>(
    path: P,
    matrix: &BoundaryMatrix<S>,
) -> Result<(), PersMatrixError>
where
    S: ColumnStorage,
    P: AsRef<Path>,
{
    let file = File::create(path).map_err(|e| PersMatrixError::Io(e.to_string()))?;
    write_boundary_matrix(BufWriter::new(file), matrix)
}
