//! Nested-scheme pixel ranges and probability tiles.

use serde::{Deserialize, Serialize};

use crate::SkycovError;

/// A half-open interval `[lower, upper)` of nested-scheme pixel indices.
///
/// Fields are public so snapshots coming from the store can be represented
/// as-is; call [`PixelRange::validate`] (the merger and the engine do) before
/// relying on `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PixelRange {
    /// First pixel index covered.
    pub lower: u64,
    /// One past the last pixel index covered.
    pub upper: u64,
}

impl PixelRange {
    /// Build a validated range.
    ///
    /// # Errors
    /// Returns `MalformedInput` if `lower >= upper`.
    pub fn new(lower: u64, upper: u64) -> Result<Self, SkycovError> {
        let range = Self { lower, upper };
        range.validate()?;
        Ok(range)
    }

    /// Check the `lower < upper` invariant.
    ///
    /// # Errors
    /// Returns `MalformedInput` describing the offending range.
    pub fn validate(&self) -> Result<(), SkycovError> {
        if self.lower < self.upper {
            Ok(())
        } else {
            Err(SkycovError::malformed(format!(
                "pixel range [{}, {}) is empty or inverted",
                self.lower, self.upper
            )))
        }
    }

    /// Number of pixel indices covered (zero for a malformed range).
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.upper.saturating_sub(self.lower)
    }

    /// True when the range covers no pixel index.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }

    /// Half-open overlap test. Touching endpoints do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        other.lower < self.upper && self.lower < other.upper
    }

    /// Number of pixel indices shared with `other`.
    #[must_use]
    pub fn overlap_len(&self, other: &Self) -> u64 {
        self.upper
            .min(other.upper)
            .saturating_sub(self.lower.max(other.lower))
    }

    /// Check whether a pixel index lies inside this range.
    #[must_use]
    pub const fn contains(&self, pixel: u64) -> bool {
        self.lower <= pixel && pixel < self.upper
    }
}

/// One disjoint fragment of a localization with its probability per pixel index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTile {
    /// Pixel indices covered by the tile.
    pub range: PixelRange,
    /// Probability density per unit pixel index; must be finite and non-negative.
    pub probdensity: f64,
}

impl ProbabilityTile {
    /// Build a validated tile.
    ///
    /// # Errors
    /// Returns `MalformedInput` for an invalid range or density.
    pub fn new(lower: u64, upper: u64, probdensity: f64) -> Result<Self, SkycovError> {
        let tile = Self {
            range: PixelRange { lower, upper },
            probdensity,
        };
        tile.validate()?;
        Ok(tile)
    }

    /// Check the range invariant and that `probdensity` is finite and non-negative.
    ///
    /// # Errors
    /// Returns `MalformedInput` describing the offending tile.
    pub fn validate(&self) -> Result<(), SkycovError> {
        self.range.validate()?;
        if self.probdensity.is_finite() && self.probdensity >= 0.0 {
            Ok(())
        } else {
            Err(SkycovError::malformed(format!(
                "tile [{}, {}) has invalid probdensity {}",
                self.range.lower, self.range.upper, self.probdensity
            )))
        }
    }

    /// Total probability mass of the tile in pixel-index units.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.range.len() as f64 * self.probdensity
    }
}
