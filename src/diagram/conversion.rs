//! Pairing → diagram conversion.

use crate::diagram::{Coordinate, PersistenceDiagram};
use crate::filtration::Filtration;
use crate::pers_error::PersMatrixError;
use crate::reduction::PersistencePairing;

/// Convert a persistence pairing into one diagram per homological
/// dimension, `0..=max_dimension` of the filtration. Dimensions without
/// features yield empty diagrams.
///
/// Pairings are expressed in primal indices regardless of whether the
/// reduced matrix was dualized (see [`crate::reduction`]), so the lookup
/// here is uniform: a pair `(c, k)` contributes the point
/// `(value(c), value(k))` to the diagram of `c`'s dimension, and an
/// unpaired index contributes an essential point.
///
/// # Errors
/// [`PersMatrixError::MissingFiltrationIndex`] if the pairing references an
/// index the filtration does not cover.
pub fn make_persistence_diagrams<F, T>(
    pairing: &PersistencePairing,
    filtration: &F,
) -> Result<Vec<PersistenceDiagram<T>>, PersMatrixError>
where
    F: Filtration<Value = T>,
    T: Coordinate,
{
    let mut diagrams: Vec<PersistenceDiagram<T>> = (0..=filtration.max_dimension())
        .map(PersistenceDiagram::new)
        .collect();

    for &(creator, destroyer) in pairing.pairs() {
        let dimension = filtration.dimension(creator)?;
        grow_to(&mut diagrams, dimension);
        diagrams[dimension].add(filtration.value(creator)?, filtration.value(destroyer)?);
    }
    for &index in pairing.unpaired() {
        let dimension = filtration.dimension(index)?;
        grow_to(&mut diagrams, dimension);
        diagrams[dimension].add_essential(filtration.value(index)?);
    }

    Ok(diagrams)
}

/// Keep one diagram per dimension even when a filtration reports a simplex
/// dimension above its own `max_dimension`.
fn grow_to<T: Coordinate>(diagrams: &mut Vec<PersistenceDiagram<T>>, dimension: usize) {
    while diagrams.len() <= dimension {
        diagrams.push(PersistenceDiagram::new(diagrams.len()));
    }
}
