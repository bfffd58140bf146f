//! Stable machine-readable error codes.
//!
//! Every [`DiffError`](crate::DiffError) display string is prefixed with one
//! of these codes so callers can match on failures without parsing prose.

pub const DIFF_CANCELLED: &str = "SEQDIFF_DIFF_001";
pub const DIFF_INTERNAL: &str = "SEQDIFF_DIFF_002";
