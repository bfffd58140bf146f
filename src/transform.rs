//! Index translation for callers that pre-filter or remap sequences before
//! handing them to the engine.
//!
//! The transformer maps every engine-side index to the caller's coordinate
//! space; blocks are translated through it as the final pipeline step. The
//! mapping must be strictly increasing per side or the translated block list
//! loses its ordering guarantees.

use crate::diff::DiffBlock;
use std::ops::Range;

pub trait IndexTransformer {
    fn left_index(&self, index: usize) -> usize;
    fn right_index(&self, index: usize) -> usize;

    /// Length of the caller-side left sequence.
    fn left_len(&self) -> usize;

    /// Length of the caller-side right sequence.
    fn right_len(&self) -> usize;
}

/// Maps every index to itself; the default for callers that hand the engine
/// their sequences unmodified.
#[derive(Debug, Clone, Copy)]
pub struct IdentityTransformer {
    left_len: usize,
    right_len: usize,
}

impl IdentityTransformer {
    pub fn new(left_len: usize, right_len: usize) -> Self {
        Self {
            left_len,
            right_len,
        }
    }
}

impl IndexTransformer for IdentityTransformer {
    fn left_index(&self, index: usize) -> usize {
        index
    }

    fn right_index(&self, index: usize) -> usize {
        index
    }

    fn left_len(&self) -> usize {
        self.left_len
    }

    fn right_len(&self) -> usize {
        self.right_len
    }
}

pub(crate) fn translate_blocks(
    blocks: Vec<DiffBlock>,
    transformer: &dyn IndexTransformer,
    engine_left_len: usize,
    engine_right_len: usize,
) -> Vec<DiffBlock> {
    blocks
        .into_iter()
        .map(|block| {
            DiffBlock::new(
                translate_range(
                    block.left,
                    &|i| transformer.left_index(i),
                    engine_left_len,
                    transformer.left_len(),
                ),
                translate_range(
                    block.right,
                    &|i| transformer.right_index(i),
                    engine_right_len,
                    transformer.right_len(),
                ),
            )
        })
        .collect()
}

fn translate_range(
    range: Range<usize>,
    index: &dyn Fn(usize) -> usize,
    engine_len: usize,
    caller_len: usize,
) -> Range<usize> {
    if range.is_empty() {
        // An empty range is a position, possibly one past the end.
        let position = if range.start < engine_len {
            index(range.start)
        } else {
            caller_len
        };
        position..position
    } else {
        index(range.start)..index(range.end - 1) + 1
    }
}
