//! Bitset over 1-based tile ids used for possibility tracking

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Set of candidate tile ids for one cell
///
/// Backed by a bitvec so elimination is O(1) and iteration comes back in
/// ascending id order. Ids are 1-based to match the catalogue; bit `id - 1`
/// tracks membership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Empty set sized for a catalogue of `tile_count` tiles
    pub fn none(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Full set: every catalogue id is still possible
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Remove a 1-based id from the set; 0 and out-of-range ids are ignored
    pub fn eliminate(&mut self, id: u32) {
        let Some(index) = id.checked_sub(1).map(|index| index as usize) else {
            return;
        };
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Membership test for a 1-based id
    pub fn contains(&self, id: u32) -> bool {
        id.checked_sub(1)
            .is_some_and(|index| self.bits.get(index as usize).as_deref() == Some(&true))
    }

    /// Number of candidates remaining
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no candidate remains (a contradiction at the queried cell)
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Candidate ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.bits.iter_ones().map(|index| index as u32 + 1)
    }

    /// All candidates as a vector of 1-based ids, ascending
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// The single remaining candidate, if exactly one is left
    pub fn sole(&self) -> Option<u32> {
        if self.count() == 1 { self.iter().next() } else { None }
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
