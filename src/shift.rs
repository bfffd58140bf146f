//! Canonicalizes block placement.
//!
//! When a block boundary sits inside a run of equal elements, several edit
//! scripts of the same cost exist that differ only in where the block is
//! anchored. This pass makes the choice deterministic:
//!
//! 1. merge a block into its predecessor when it can slide upward across the
//!    whole matched run separating them (anchoring it against an already
//!    distinct mismatch instead of leaving it floating inside the run);
//! 2. slide every remaining block downward as far as equality permits,
//!    merging with the successor when they touch.
//!
//! Sliding moves a matched pair from one side of the block to the other, so
//! neither the covered length pair, the matched-element count, nor the
//! reconstructed right sequence ever changes.

use crate::diff::DiffBlock;
use crate::symbol_pool::SymbolId;

pub(crate) fn shift_blocks(blocks: &mut Vec<DiffBlock>, left: &[SymbolId], right: &[SymbolId]) {
    merge_upward(blocks, left, right);
    slide_downward(blocks, left, right);
}

fn merge_upward(blocks: &mut Vec<DiffBlock>, left: &[SymbolId], right: &[SymbolId]) {
    let drained = std::mem::take(blocks);
    for block in drained {
        if let Some(prev) = blocks.last_mut() {
            let gap = block.left.start - prev.left.end;
            debug_assert_eq!(gap, block.right.start - prev.right.end);
            if gap > 0 {
                if let Some(shifted) = shifted_up(&block, gap, left, right) {
                    prev.left.end = shifted.left.end;
                    prev.right.end = shifted.right.end;
                    continue;
                }
            }
        }
        blocks.push(block);
    }
}

/// Returns the block slid upward by exactly `steps`, or `None` if any step
/// is blocked by unequal elements.
fn shifted_up(
    block: &DiffBlock,
    steps: usize,
    left: &[SymbolId],
    right: &[SymbolId],
) -> Option<DiffBlock> {
    let mut shifted = block.clone();
    for _ in 0..steps {
        if !can_shift_up(&shifted, left, right) {
            return None;
        }
        shifted.left.start -= 1;
        shifted.left.end -= 1;
        shifted.right.start -= 1;
        shifted.right.end -= 1;
    }
    Some(shifted)
}

/// Sliding up moves the matched pair just before the block to just after
/// it, so the pair entering the matched region must itself match.
fn can_shift_up(block: &DiffBlock, left: &[SymbolId], right: &[SymbolId]) -> bool {
    block.left.start > 0
        && block.right.start > 0
        && left[block.left.end - 1] == right[block.right.end - 1]
}

fn slide_downward(blocks: &mut Vec<DiffBlock>, left: &[SymbolId], right: &[SymbolId]) {
    let mut i = 0;
    while i < blocks.len() {
        loop {
            let (boundary_left, boundary_right) = if i + 1 < blocks.len() {
                (blocks[i + 1].left.start, blocks[i + 1].right.start)
            } else {
                (left.len(), right.len())
            };

            let block = &blocks[i];
            if block.left.end == boundary_left && block.right.end == boundary_right {
                if i + 1 < blocks.len() {
                    let next = blocks.remove(i + 1);
                    blocks[i].left.end = next.left.end;
                    blocks[i].right.end = next.right.end;
                    continue;
                }
                break;
            }

            // A matched pair sits right after the block; sliding down makes
            // the pair at the block's start matched instead.
            if left[block.left.start] != right[block.right.start] {
                break;
            }
            let block = &mut blocks[i];
            block.left.start += 1;
            block.left.end += 1;
            block.right.start += 1;
            block.right.end += 1;
        }
        i += 1;
    }
}
