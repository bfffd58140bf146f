//! Bidirectional middle-snake search (Myers' divide step).
//!
//! Two furthest-reaching D-path frontiers grow toward each other: the
//! forward one from the rectangle's top-left corner, the backward one from
//! the bottom-right, offset by `delta = left_len - right_len`. The first
//! overlap pins down the optimal split point and the edit distance of the
//! whole rectangle: `2D - 1` when the forward frontier detects it, `2D` when
//! the backward one does.
//!
//! Coordinates are 0-based offsets within the searched rectangle; diagonal
//! `k = x - y`.

use crate::cancel::CancelController;
use crate::diff::DiffError;
use crate::symbol_pool::SymbolId;
use std::ops::{Index, IndexMut};

/// Furthest-reached `x` per diagonal for one search direction.
///
/// Diagonals can be negative, so the array carries an offset mapping `k`
/// into a dense `Vec`.
#[derive(Debug)]
struct DiagonalReach {
    offset: isize,
    reach: Vec<usize>,
}

impl DiagonalReach {
    fn new(len: usize, offset: usize) -> Self {
        Self {
            offset: offset as isize,
            reach: vec![0; len],
        }
    }
}

impl Index<isize> for DiagonalReach {
    type Output = usize;

    fn index(&self, diagonal: isize) -> &usize {
        &self.reach[(diagonal + self.offset) as usize]
    }
}

impl IndexMut<isize> for DiagonalReach {
    fn index_mut(&mut self, diagonal: isize) -> &mut usize {
        &mut self.reach[(diagonal + self.offset) as usize]
    }
}

/// The snake on which the two frontiers first overlap, in rectangle-local
/// coordinates. May be empty (`left_start == left_end`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct MiddleSnake {
    pub(crate) left_start: usize,
    pub(crate) right_start: usize,
    pub(crate) left_end: usize,
    pub(crate) right_end: usize,
}

/// Reusable search state: one frontier per direction, sized once for the
/// outermost rectangle so recursion never reallocates.
#[derive(Debug)]
pub(crate) struct MiddleSnakeFinder {
    forward: DiagonalReach,
    backward: DiagonalReach,
}

impl MiddleSnakeFinder {
    pub(crate) fn new(left_len: usize, right_len: usize) -> Self {
        // The search never goes deeper than (n + m + 1) / 2 + 1, and |k| is
        // bounded by the depth, so centering on that bound keeps every
        // diagonal of every sub-rectangle in range even when one side is
        // much shorter than the other.
        let offset = (left_len + right_len) / 2 + 2;
        Self {
            forward: DiagonalReach::new(2 * offset + 1, offset),
            backward: DiagonalReach::new(2 * offset + 1, offset),
        }
    }

    /// Finds the middle snake of a non-empty rectangle and its edit
    /// distance. Cancellation is polled once per search depth.
    pub(crate) fn find(
        &mut self,
        left: &[SymbolId],
        right: &[SymbolId],
        cancel: &mut CancelController<'_>,
    ) -> Result<(usize, MiddleSnake), DiffError> {
        let n = left.len();
        let m = right.len();
        debug_assert!(n > 0 && m > 0, "empty rectangles are handled by the driver");

        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        // Virtual start points just outside the rectangle: (0, -1) forward,
        // (n, m + 1) backward.
        self.forward[1] = 0;
        self.backward[1] = 0;

        let depth_max = ((n + m + 1) / 2 + 1) as isize;
        for depth in 0..depth_max {
            cancel.check()?;

            if let Some(snake) = self.extend_forward(left, right, depth, delta, odd) {
                return Ok(((2 * depth - 1) as usize, snake));
            }
            if let Some(snake) = self.extend_backward(left, right, depth, delta, odd) {
                return Ok(((2 * depth) as usize, snake));
            }
        }

        Err(DiffError::internal(format!(
            "middle-snake search exhausted depth {depth_max} on a {n}x{m} rectangle"
        )))
    }

    /// One forward frontier step at the given depth. Returns the middle
    /// snake if this direction's reach overlaps the backward band.
    fn extend_forward(
        &mut self,
        left: &[SymbolId],
        right: &[SymbolId],
        depth: isize,
        delta: isize,
        odd: bool,
    ) -> Option<MiddleSnake> {
        let n = left.len();
        let m = right.len();

        for k in diagonals(depth) {
            let mut x = if k == -depth || (k != depth && self.forward[k - 1] < self.forward[k + 1])
            {
                self.forward[k + 1]
            } else {
                self.forward[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            let (x0, y0) = (x, y);
            while x < n && y < m && left[x] == right[y] {
                x += 1;
                y += 1;
            }
            self.forward[k] = x;

            // Overlap is only possible on diagonals the backward frontier
            // has already searched, and only at odd total distances.
            if odd
                && (k - delta).abs() <= depth - 1
                && self.forward[k] + self.backward[delta - k] >= n
            {
                return Some(MiddleSnake {
                    left_start: x0,
                    right_start: y0,
                    left_end: x,
                    right_end: y,
                });
            }
        }
        None
    }

    /// One backward frontier step; `x`/`y` count from the bottom-right
    /// corner over the reversed sequences.
    fn extend_backward(
        &mut self,
        left: &[SymbolId],
        right: &[SymbolId],
        depth: isize,
        delta: isize,
        odd: bool,
    ) -> Option<MiddleSnake> {
        let n = left.len();
        let m = right.len();

        for k in diagonals(depth) {
            let mut x = if k == -depth
                || (k != depth && self.backward[k - 1] < self.backward[k + 1])
            {
                self.backward[k + 1]
            } else {
                self.backward[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            let (x0, y0) = (x, y);
            while x < n && y < m && left[n - x - 1] == right[m - y - 1] {
                x += 1;
                y += 1;
            }
            self.backward[k] = x;

            if !odd
                && (k - delta).abs() <= depth
                && self.backward[k] + self.forward[delta - k] >= n
            {
                return Some(MiddleSnake {
                    left_start: n - x,
                    right_start: m - y,
                    left_end: n - x0,
                    right_end: m - y0,
                });
            }
        }
        None
    }
}

fn diagonals(depth: isize) -> impl Iterator<Item = isize> {
    (-depth..=depth).rev().step_by(2)
}
