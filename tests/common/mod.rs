//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use seq_diff::{diff_slices, DiffBlock, DiffConfig};

pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

pub fn diff_chars(left: &str, right: &str, config: &DiffConfig) -> Vec<DiffBlock> {
    let left = chars(left);
    let right = chars(right);
    diff_slices(&left, &right, config).unwrap_or_else(|e| {
        panic!("diff failed for {left:?} vs {right:?}: {e}");
    })
}

/// Replays the block list: unchanged left runs for the gaps, right-side
/// slices for the blocks. Must reproduce the right sequence exactly.
pub fn reconstruct(left: &[char], right: &[char], blocks: &[DiffBlock]) -> Vec<char> {
    let mut out = Vec::new();
    let mut next_left = 0;
    for block in blocks {
        out.extend_from_slice(&left[next_left..block.left.start]);
        out.extend_from_slice(&right[block.right.clone()]);
        next_left = block.left.end;
    }
    out.extend_from_slice(&left[next_left..]);
    out
}

/// Ordering, coverage, and gap-equality invariants from the output
/// contract.
pub fn assert_block_invariants(left_len: usize, right_len: usize, blocks: &[DiffBlock]) {
    let mut prev_left = 0;
    let mut prev_right = 0;
    for block in blocks {
        assert!(
            block.left.start >= prev_left && block.right.start >= prev_right,
            "blocks must be strictly increasing: {blocks:?}"
        );
        assert!(
            block.left.start - prev_left == block.right.start - prev_right,
            "matched runs between blocks must pair up: {blocks:?}"
        );
        assert!(block.left.end <= left_len && block.right.end <= right_len);
        assert!(
            !block.left.is_empty() || !block.right.is_empty(),
            "a block must change at least one side: {blocks:?}"
        );
        prev_left = block.left.end;
        prev_right = block.right.end;
    }
    assert_eq!(
        left_len - prev_left,
        right_len - prev_right,
        "trailing matched runs must pair up: {blocks:?}"
    );
}

/// Number of left elements not covered by any block, i.e. matched elements.
pub fn matched_len(left_len: usize, blocks: &[DiffBlock]) -> usize {
    left_len - blocks.iter().map(|b| b.left.len()).sum::<usize>()
}

/// The matched subsequence read off the left side.
pub fn matched_subsequence(left: &[char], blocks: &[DiffBlock]) -> Vec<char> {
    let mut out = Vec::new();
    let mut next_left = 0;
    for block in blocks {
        out.extend_from_slice(&left[next_left..block.left.start]);
        next_left = block.left.end;
    }
    out.extend_from_slice(&left[next_left..]);
    out
}

/// Independent O(n*m) DP reference for the LCS length.
pub fn lcs_len(left: &[char], right: &[char]) -> usize {
    let mut row = vec![0usize; right.len() + 1];
    for l in left {
        let mut diagonal = 0;
        for (j, r) in right.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if l == r {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[right.len()]
}

/// Deterministic pseudo-random sequence over a small alphabet.
pub fn lcg_sequence(seed: u64, len: usize, alphabet: u64) -> Vec<char> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (b'a' + ((state >> 33) % alphabet) as u8) as char
        })
        .collect()
}
