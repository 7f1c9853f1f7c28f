//! Pixel-range utilities shared by the engine and the orchestrator.
//!
//! Modules include:
//! - `merge`: collapse possibly-overlapping ranges into a disjoint sorted set

/// Sort-and-sweep merging of overlapping pixel ranges.
pub mod merge;

use crate::PixelRange;

/// Total number of pixel indices covered by a set of ranges.
///
/// Counts with multiplicity: overlapping ranges are counted once per range, so
/// pass a merged set to get the size of the union.
#[must_use]
pub fn total_pixels(ranges: &[PixelRange]) -> u128 {
    ranges.iter().map(|r| u128::from(r.len())).sum()
}

/// True if `ranges` is sorted by `lower` and no two ranges overlap.
///
/// Touching ranges (`a.upper == b.lower`) are accepted.
#[must_use]
pub fn is_disjoint_sorted(ranges: &[PixelRange]) -> bool {
    ranges.windows(2).all(|w| w[0].upper <= w[1].lower)
}
