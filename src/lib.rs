//! Sequence Diff: a generic sequence-comparison engine.
//!
//! Given two ordered sequences of comparable elements, this crate computes a
//! minimal set of edit regions transforming left into right, expressed as an
//! ordered list of non-overlapping [`DiffBlock`]s; the unchanged runs between
//! blocks are implicit. The pipeline:
//!
//! 1. intern every element to a dense symbol so equality is an integer
//!    compare;
//! 2. discard elements provably absent from any common subsequence;
//! 3. locate matching runs with Myers' bidirectional middle-snake search;
//! 4. assemble the complementary blocks in original coordinates;
//! 5. canonicalize ambiguous block placement.
//!
//! Rendering, I/O, and encoding concerns belong to the callers that consume
//! the block list.
//!
//! # Quick start
//!
//! ```
//! use seq_diff::{diff_slices, DiffConfig};
//!
//! let left: Vec<char> = "public class Foo {".chars().collect();
//! let right: Vec<char> = "class Foo {".chars().collect();
//!
//! let blocks = diff_slices(&left, &right, &DiffConfig::default())?;
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].left, 0..7); // "public " removed
//! assert!(blocks[0].is_deletion());
//! # Ok::<(), seq_diff::DiffError>(())
//! ```

mod algorithm;
mod blocks;
mod cancel;
mod coded_media;
mod config;
mod diff;
pub(crate) mod discard;
mod engine;
pub mod error_codes;
mod media;
mod middle_snake;
mod shift;
mod symbol_pool;
mod transform;

pub use cancel::{CancelCallback, NoCancel};
pub use coded_media::CodedMedia;
pub use config::{ConfigError, DiffConfig, DiffConfigBuilder};
pub use diff::{DiffBlock, DiffError};
pub use discard::{AbsenceDetector, ConfusionDetector, ThresholdDetector};
pub use engine::{try_diff_media, try_diff_media_with};
pub use media::{Media, SliceMedia};
pub use symbol_pool::{SymbolId, SymbolPool};
pub use transform::{IdentityTransformer, IndexTransformer};

use std::hash::Hash;

/// Convenience wrapper: diffs two slices with no cancellation.
pub fn diff_slices<T: Hash + Eq>(
    left: &[T],
    right: &[T],
    config: &DiffConfig,
) -> Result<Vec<DiffBlock>, DiffError> {
    try_diff_media(&SliceMedia::new(left, right), config, &NoCancel)
}
