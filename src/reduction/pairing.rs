//! `PersistencePairing`: the raw output of a matrix reduction.
//!
//! A pairing records, for one reduced boundary matrix, which creation
//! events were cancelled by a later destruction event and which indices
//! remain essential. Pairs are always expressed in the matrix's primal
//! index space (the reduction algorithms map indices back when reducing a
//! dualized matrix), with `creator < destroyer`, sorted by creator.
//!
//! Every index in `[0, num_columns)` appears in exactly one pair or in the
//! unpaired set. The pairing is produced once by a reduction run and is
//! immutable thereafter.

use serde::{Deserialize, Serialize};

/// Persistence pairs plus essential (unpaired) indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistencePairing {
    pairs: Vec<(usize, usize)>,
    unpaired: Vec<usize>,
}

impl PersistencePairing {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a `(creator, destroyer)` pair. Only reduction algorithms add
    /// pairs; the type exposes no public mutators.
    pub(crate) fn add(&mut self, creator: usize, destroyer: usize) {
        self.pairs.push((creator, destroyer));
    }

    /// Sort the pairs and derive the unpaired set as the complement of all
    /// paired indices in `[0, num_columns)`.
    pub(crate) fn finalize(&mut self, num_columns: usize) {
        self.pairs.sort_unstable();
        let mut paired = vec![false; num_columns];
        for &(creator, destroyer) in &self.pairs {
            #[cfg(any(debug_assertions, feature = "strict-invariants"))]
            debug_assert!(
                !paired[creator] && !paired[destroyer] && creator < destroyer,
                "each index must appear in at most one pair"
            );
            paired[creator] = true;
            paired[destroyer] = true;
        }
        self.unpaired = (0..num_columns).filter(|&j| !paired[j]).collect();
    }

    /// Pairs `(creator, destroyer)`, sorted by creator.
    #[inline]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Essential indices, ascending.
    #[inline]
    pub fn unpaired(&self) -> &[usize] {
        &self.unpaired
    }

    /// Number of pairs.
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Number of essential indices.
    pub fn num_unpaired(&self) -> usize {
        self.unpaired.len()
    }

    /// True if the pairing covers no indices at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.unpaired.is_empty()
    }

    /// Destroyer of `creator`, or `None` if `creator` is essential or
    /// itself a destroyer.
    pub fn destroyer_of(&self, creator: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&creator, |&(c, _)| c)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    /// True if `index` has no destroyer.
    pub fn is_essential(&self, index: usize) -> bool {
        self.unpaired.binary_search(&index).is_ok()
    }
}
