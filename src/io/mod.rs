//! I/O helpers for boundary matrices.
//!
//! The only persisted surface of the core is the plain-text matrix format
//! implemented in [`text`]: one line per column, space-separated ascending
//! row indices, `-` for an empty column. Readers fail fast on malformed
//! input; the writer reproduces the exact shape so that
//! load → store → load is the identity.

pub mod text;

pub use text::{
    load_boundary_matrix, read_boundary_matrix, store_boundary_matrix, write_boundary_matrix,
};
