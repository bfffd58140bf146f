//! Symbol-coded view of a [`Media`]: every element replaced by its interned
//! [`SymbolId`] so equality inside the algorithm is an integer compare.

use crate::media::Media;
use crate::symbol_pool::{SymbolId, SymbolPool};
use std::hash::Hash;

#[derive(Debug)]
pub struct CodedMedia {
    left: Vec<SymbolId>,
    right: Vec<SymbolId>,
    symbol_count: usize,
}

impl CodedMedia {
    /// Interns every element of both sides through one shared pool.
    ///
    /// O(left_len + right_len) amortized.
    pub fn build<M>(media: &M) -> Self
    where
        M: Media + ?Sized,
        M::Item: Hash + Eq,
    {
        let mut pool = SymbolPool::new();
        let left: Vec<SymbolId> = (0..media.left_len())
            .map(|i| pool.intern(media.left(i)))
            .collect();
        let right: Vec<SymbolId> = (0..media.right_len())
            .map(|j| pool.intern(media.right(j)))
            .collect();
        let symbol_count = pool.len();

        Self {
            left,
            right,
            symbol_count,
        }
    }

    pub fn left_len(&self) -> usize {
        self.left.len()
    }

    pub fn right_len(&self) -> usize {
        self.right.len()
    }

    /// Number of distinct element values across both sides.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    pub fn left_symbols(&self) -> &[SymbolId] {
        &self.left
    }

    pub fn right_symbols(&self) -> &[SymbolId] {
        &self.right
    }

    pub fn eq(&self, left_index: usize, right_index: usize) -> bool {
        self.left[left_index] == self.right[right_index]
    }

    pub fn eq_left(&self, a: usize, b: usize) -> bool {
        self.left[a] == self.left[b]
    }

    pub fn eq_right(&self, a: usize, b: usize) -> bool {
        self.right[a] == self.right[b]
    }
}
