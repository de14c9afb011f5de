//! # pers-matrix
//!
//! pers-matrix is a modular Rust library implementing the computational kernel of persistent
//! homology: sparse boundary-matrix storage over the two-element field, the standard and twist
//! column-reduction algorithms, the anti-transpose (dualization) transform, and the translation
//! of persistence pairings into per-dimension persistence diagrams.
//!
//! ## Features
//! - [`ColumnStorage`](matrix::ColumnStorage) trait with pluggable column representations
//!   ([`VecColumnStorage`](matrix::VecColumnStorage), [`BTreeColumnStorage`](matrix::BTreeColumnStorage))
//! - [`BoundaryMatrix`](matrix::BoundaryMatrix) façade with in-place, destructive reduction
//!   semantics: callers clone before reducing if they need the original
//! - [`StandardReduction`](reduction::StandardReduction) and
//!   [`TwistReduction`](reduction::TwistReduction), producing identical
//!   [`PersistencePairing`](reduction::PersistencePairing)s
//! - [`dualize`](matrix::dualize) for cohomology-style reductions, with an exact double-dual
//!   round-trip
//! - [`PersistenceDiagram`](diagram::PersistenceDiagram) value types with explicit
//!   diagonal/duplicate/unpaired filtering and Betti number queries
//! - Plain-text matrix format reader/writer with load→store→load round-trip
//!
//! ## Determinism
//!
//! Reduction is strictly sequential and pure: the same matrix always yields the same pairing,
//! pairs are reported sorted by creator, and no state survives between calls. Unit tests that
//! generate inputs fix their seeds explicitly.
//!
//! ## Usage
//! Add `pers-matrix` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pers-matrix = "0.4"
//! ```
//!
//! Compute the persistence of a filtration:
//!
//! ```
//! use pers_matrix::prelude::*;
//!
//! // Filled triangle: three vertices, three edges, one face.
//! let mut filtration = VecFiltration::new();
//! filtration.push(0, 0.0, vec![])?;
//! filtration.push(0, 0.0, vec![])?;
//! filtration.push(0, 0.0, vec![])?;
//! filtration.push(1, 1.0, vec![0, 1])?;
//! filtration.push(1, 1.0, vec![0, 2])?;
//! filtration.push(1, 1.0, vec![1, 2])?;
//! filtration.push(2, 2.0, vec![3, 4, 5])?;
//!
//! let mut matrix: BoundaryMatrix = make_boundary_matrix(&filtration)?;
//! let pairing = compute_persistence_pairs::<TwistReduction, _>(&mut matrix)?;
//! let diagrams = make_persistence_diagrams(&pairing, &filtration)?;
//!
//! assert_eq!(pairing.pairs(), &[(1, 3), (2, 4), (5, 6)]);
//! assert_eq!(pairing.unpaired(), &[0]);
//! assert_eq!(diagrams[0].betti(), 1);
//! # Ok::<(), pers_matrix::pers_error::PersMatrixError>(())
//! ```

// Re-export our major subsystems:
pub mod diagram;
pub mod filtration;
pub mod io;
pub mod matrix;
pub mod pers_error;
pub mod reduction;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::diagram::conversion::make_persistence_diagrams;
    pub use crate::diagram::coordinate::Coordinate;
    pub use crate::diagram::{DiagramPoint, PersistenceDiagram};
    pub use crate::filtration::{Filtration, VecFiltration, make_boundary_matrix};
    pub use crate::io::text::{
        load_boundary_matrix, read_boundary_matrix, store_boundary_matrix, write_boundary_matrix,
    };
    pub use crate::matrix::{
        BTreeColumnStorage, BoundaryMatrix, ColumnStorage, VecColumnStorage, dualize,
    };
    pub use crate::pers_error::PersMatrixError;
    pub use crate::reduction::{
        PersistencePairing, ReductionAlgorithm, StandardReduction, TwistReduction,
        compute_persistence_pairs,
    };
}
