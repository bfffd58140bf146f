use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// A dense integer standing in for one distinct element value.
///
/// Interning guarantees `id(a) == id(b)` exactly when `a == b`, so all later
/// equality checks are integer comparisons.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First-seen-wins interning over borrowed elements.
///
/// The pool never shrinks; its size is bounded by the number of elements
/// interned, so at most `left_len + right_len` per diff.
#[derive(Debug)]
pub struct SymbolPool<'a, T: ?Sized> {
    index: FxHashMap<&'a T, SymbolId>,
}

impl<'a, T: ?Sized + Hash + Eq> SymbolPool<'a, T> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    pub fn intern(&mut self, item: &'a T) -> SymbolId {
        let next = SymbolId(self.index.len() as u32);
        *self.index.entry(item).or_insert(next)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<T: ?Sized + Hash + Eq> Default for SymbolPool<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
