//! The input contract: an ordered pair of sequences of comparable elements.
//!
//! The engine never touches elements directly after the coding step; a
//! `Media` only needs to expose lengths and element references. Equality and
//! hashing come from the element type itself.

/// An ordered pair of sequences, immutable for the duration of a diff.
///
/// Indices are 0-based and dense.
pub trait Media {
    type Item: ?Sized;

    fn left_len(&self) -> usize;
    fn right_len(&self) -> usize;
    fn left(&self, index: usize) -> &Self::Item;
    fn right(&self, index: usize) -> &Self::Item;
}

/// Adapter over two slices.
#[derive(Debug, Clone, Copy)]
pub struct SliceMedia<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<'a, T> SliceMedia<'a, T> {
    pub fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self { left, right }
    }
}

impl<T> Media for SliceMedia<'_, T> {
    type Item = T;

    fn left_len(&self) -> usize {
        self.left.len()
    }

    fn right_len(&self) -> usize {
        self.right.len()
    }

    fn left(&self, index: usize) -> &T {
        &self.left[index]
    }

    fn right(&self, index: usize) -> &T {
        &self.right[index]
    }
}

impl<M: Media + ?Sized> Media for &M {
    type Item = M::Item;

    fn left_len(&self) -> usize {
        (**self).left_len()
    }

    fn right_len(&self) -> usize {
        (**self).right_len()
    }

    fn left(&self, index: usize) -> &Self::Item {
        (**self).left(index)
    }

    fn right(&self, index: usize) -> &Self::Item {
        (**self).right(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_media_exposes_both_sides() {
        let left = [1, 2, 3];
        let right = [4, 5];
        let media = SliceMedia::new(&left, &right);

        assert_eq!(media.left_len(), 3);
        assert_eq!(media.right_len(), 2);
        assert_eq!(*media.left(2), 3);
        assert_eq!(*media.right(0), 4);
    }
}
