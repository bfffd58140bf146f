//! Difference blocks and the diff error taxonomy.
//!
//! - [`DiffBlock`]: one maximal non-matching region between the two
//!   sequences, in original coordinates.
//! - [`DiffError`]: the two ways a diff can fail (cooperative cancellation,
//!   internal invariant violation).

use crate::error_codes;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Errors produced by diffing APIs.
///
/// Both kinds propagate to the top-level caller; nothing is retried and no
/// partial block list is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiffError {
    #[error(
        "[SEQDIFF_DIFF_001] diff cancelled by caller. Suggestion: re-run without the cancellation trigger, or ignore if the abort was intended."
    )]
    Cancelled,

    #[error(
        "[SEQDIFF_DIFF_002] internal error: {message}. Suggestion: report a bug with a reproducing input; this indicates a broken invariant, not a caller mistake."
    )]
    Internal { message: String },
}

impl DiffError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        DiffError::Internal {
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DiffError::Cancelled => error_codes::DIFF_CANCELLED,
            DiffError::Internal { .. } => error_codes::DIFF_INTERNAL,
        }
    }
}

/// One maximal non-matching region between the left and right sequences.
///
/// Ranges are half-open and 0-based in the original (pre-filter) coordinate
/// space. An empty `left` range is a pure insertion, an empty `right` range a
/// pure deletion. Blocks are emitted in strictly increasing, non-overlapping
/// order: concatenating the unchanged left runs between blocks with each
/// block's right slice reconstructs the right sequence exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffBlock {
    pub left: Range<usize>,
    pub right: Range<usize>,
}

impl DiffBlock {
    pub fn new(left: Range<usize>, right: Range<usize>) -> Self {
        Self { left, right }
    }

    /// Nothing is removed from the left sequence.
    pub fn is_insertion(&self) -> bool {
        self.left.is_empty()
    }

    /// Nothing is added from the right sequence.
    pub fn is_deletion(&self) -> bool {
        self.right.is_empty()
    }
}
