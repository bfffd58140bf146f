//! Turns the ordered snake stream into the complementary ordered block list.
//!
//! The assembler walks each snake pair by pair, translating compacted
//! indices back to pre-filter coordinates through the discard maps. A snake
//! whose kept elements straddle discarded ones translates to non-contiguous
//! indices; the gap that opens up becomes part of a block, so discarded
//! elements always land inside blocks, never inside matched runs.

use crate::algorithm::SnakeSink;
use crate::diff::{DiffBlock, DiffError};
use std::ops::Range;

pub(crate) struct BlockAssembler<'a> {
    left_map: &'a [usize],
    right_map: &'a [usize],
    /// Next uncovered original index per side.
    next_left: usize,
    next_right: usize,
    blocks: Vec<DiffBlock>,
}

impl<'a> BlockAssembler<'a> {
    pub(crate) fn new(left_map: &'a [usize], right_map: &'a [usize]) -> Self {
        Self {
            left_map,
            right_map,
            next_left: 0,
            next_right: 0,
            blocks: Vec::new(),
        }
    }

    /// Closes the trailing gap and returns the finished block list.
    pub(crate) fn finish(
        mut self,
        left_len: usize,
        right_len: usize,
    ) -> Result<Vec<DiffBlock>, DiffError> {
        if self.next_left > left_len || self.next_right > right_len {
            return Err(DiffError::internal(format!(
                "assembled blocks overrun the sequences: covered ({}, {}) of ({left_len}, {right_len})",
                self.next_left, self.next_right
            )));
        }
        if self.next_left < left_len || self.next_right < right_len {
            self.blocks.push(DiffBlock::new(
                self.next_left..left_len,
                self.next_right..right_len,
            ));
        }
        Ok(self.blocks)
    }
}

impl SnakeSink for BlockAssembler<'_> {
    fn snake(&mut self, left: Range<usize>, right: Range<usize>) -> Result<(), DiffError> {
        for (l, r) in left.zip(right) {
            let original_left = self.left_map[l];
            let original_right = self.right_map[r];

            if original_left < self.next_left || original_right < self.next_right {
                return Err(DiffError::internal(format!(
                    "non-monotonic index translation at matched pair ({l}, {r})"
                )));
            }
            if original_left > self.next_left || original_right > self.next_right {
                self.blocks.push(DiffBlock::new(
                    self.next_left..original_left,
                    self.next_right..original_right,
                ));
            }
            self.next_left = original_left + 1;
            self.next_right = original_right + 1;
        }
        Ok(())
    }
}
