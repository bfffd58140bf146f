//! Recursive bisection driver: emits every matching run ("snake") of the
//! symbol-coded sequences in strictly increasing left-then-right order.
//!
//! Rectangles are immutable sub-slice bounds passed by parameter, so there is
//! no shared scratch view to restore on exit paths.

use crate::cancel::CancelController;
use crate::diff::DiffError;
use crate::middle_snake::MiddleSnakeFinder;
use crate::symbol_pool::SymbolId;
use std::ops::Range;

/// Consumer of the ordered snake stream.
pub(crate) trait SnakeSink {
    /// Called once per non-empty snake, in order. `left.len() == right.len()`
    /// and every aligned pair matches.
    fn snake(&mut self, left: Range<usize>, right: Range<usize>) -> Result<(), DiffError>;
}

pub(crate) struct SnakeProducer<'a> {
    left: &'a [SymbolId],
    right: &'a [SymbolId],
    finder: MiddleSnakeFinder,
}

impl<'a> SnakeProducer<'a> {
    pub(crate) fn new(left: &'a [SymbolId], right: &'a [SymbolId]) -> Self {
        Self {
            left,
            right,
            finder: MiddleSnakeFinder::new(left.len(), right.len()),
        }
    }

    pub(crate) fn run<S: SnakeSink>(
        &mut self,
        sink: &mut S,
        cancel: &mut CancelController<'_>,
    ) -> Result<(), DiffError> {
        self.bisect(0..self.left.len(), 0..self.right.len(), sink, cancel)
    }

    fn bisect<S: SnakeSink>(
        &mut self,
        left: Range<usize>,
        right: Range<usize>,
        sink: &mut S,
        cancel: &mut CancelController<'_>,
    ) -> Result<(), DiffError> {
        if left.is_empty() || right.is_empty() {
            // The whole rectangle is a gap; the assembler turns it into a
            // block.
            return Ok(());
        }
        cancel.check()?;

        let (distance, snake) = self.finder.find(
            &self.left[left.clone()],
            &self.right[right.clone()],
            cancel,
        )?;

        match distance {
            0 => self.emit(left, right, sink),
            1 => self.split_single_edit(left, right, sink),
            _ => {
                let left_mid = left.start + snake.left_start..left.start + snake.left_end;
                let right_mid = right.start + snake.right_start..right.start + snake.right_end;

                self.bisect(
                    left.start..left_mid.start,
                    right.start..right_mid.start,
                    sink,
                    cancel,
                )?;
                self.emit(left_mid.clone(), right_mid.clone(), sink)?;
                self.bisect(left_mid.end..left.end, right_mid.end..right.end, sink, cancel)
            }
        }
    }

    /// Distance 1: exactly one side is longer by one element, and the edit
    /// script is a single insert or delete at the first mismatch. No
    /// recursion needed.
    fn split_single_edit<S: SnakeSink>(
        &mut self,
        left: Range<usize>,
        right: Range<usize>,
        sink: &mut S,
    ) -> Result<(), DiffError> {
        let n = left.len();
        let m = right.len();

        if m == n + 1 {
            let k = self.common_prefix(left.clone(), right.clone());
            self.emit(left.start..left.start + k, right.start..right.start + k, sink)?;
            self.emit(left.start + k..left.end, right.start + k + 1..right.end, sink)
        } else if n == m + 1 {
            let k = self.common_prefix(left.clone(), right.clone());
            self.emit(left.start..left.start + k, right.start..right.start + k, sink)?;
            self.emit(left.start + k + 1..left.end, right.start + k..right.end, sink)
        } else {
            Err(DiffError::internal(format!(
                "single-edit rectangle with impossible dimensions {n}x{m}"
            )))
        }
    }

    fn common_prefix(&self, left: Range<usize>, right: Range<usize>) -> usize {
        self.left[left]
            .iter()
            .zip(&self.right[right])
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Registers one snake after verifying it. A non-matching pair here
    /// means the search or the media's equality is broken, which is fatal.
    fn emit<S: SnakeSink>(
        &self,
        left: Range<usize>,
        right: Range<usize>,
        sink: &mut S,
    ) -> Result<(), DiffError> {
        if left.len() != right.len() {
            return Err(DiffError::internal(format!(
                "registered snake has mismatched lengths {}..{} vs {}..{}",
                left.start, left.end, right.start, right.end
            )));
        }
        for (l, r) in left.clone().zip(right.clone()) {
            if self.left[l] != self.right[r] {
                return Err(DiffError::internal(format!(
                    "registered snake contains non-matching pair ({l}, {r})"
                )));
            }
        }
        if left.is_empty() {
            return Ok(());
        }
        sink.snake(left, right)
    }
}
