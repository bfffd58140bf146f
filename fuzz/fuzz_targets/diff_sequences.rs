#![no_main]

use libfuzzer_sys::fuzz_target;
use seq_diff::{DiffConfig, diff_slices};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point and config bits, the rest becomes
    // the two sequences. Masking keeps the alphabet small enough that
    // matches actually occur.
    let split = (data[0] as usize) % data.len();
    let enable_discard = data[0] & 0x40 != 0;
    let shift_blocks = data[0] & 0x80 != 0;

    let body = &data[1..];
    let cut = split.min(body.len());
    let left: Vec<u8> = body[..cut].iter().map(|b| b & 0x07).collect();
    let right: Vec<u8> = body[cut..].iter().map(|b| b & 0x07).collect();

    let config = match DiffConfig::builder()
        .enable_discard(enable_discard)
        .shift_blocks(shift_blocks)
        .build()
    {
        Ok(config) => config,
        Err(_) => return,
    };

    let blocks = match diff_slices(&left, &right, &config) {
        Ok(blocks) => blocks,
        Err(_) => return,
    };

    // Replaying the blocks over the left sequence must reproduce the right
    // sequence exactly.
    let mut replayed = Vec::new();
    let mut next_left = 0usize;
    let mut next_right = 0usize;
    for block in &blocks {
        assert!(block.left.start >= next_left);
        assert!(block.right.start >= next_right);
        assert_eq!(block.left.start - next_left, block.right.start - next_right);
        assert!(block.left.end <= left.len());
        assert!(block.right.end <= right.len());

        replayed.extend_from_slice(&left[next_left..block.left.start]);
        replayed.extend_from_slice(&right[block.right.clone()]);
        next_left = block.left.end;
        next_right = block.right.end;
    }
    replayed.extend_from_slice(&left[next_left..]);
    assert_eq!(replayed, right);
});
