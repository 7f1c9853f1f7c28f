//! Coverage statistics: how much solid angle and probability mass of a
//! localization a merged plan footprint covers.

use async_trait::async_trait;

use crate::{CoverageResult, LocalizationId, PixelRange, ProbabilityTile, SkycovError, StatsMethod};

/// Pixelisation constants (pixel counts and solid angles per order).
pub mod healpix;
mod sum;
mod sweep;

pub use sweep::raw_coverage;

/// Unscaled coverage in pixel-index units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawCoverage {
    /// Number of covered pixel indices, counted exactly.
    pub pixels: u128,
    /// Covered probability mass before pixel-area scaling.
    pub probability: f64,
}

impl RawCoverage {
    /// Scale pixel counts and probability by the solid angle of one pixel.
    #[must_use]
    pub fn scaled(self, pixel_area: f64) -> CoverageResult {
        CoverageResult {
            area_steradians: self.pixels as f64 * pixel_area,
            probability: self.probability * pixel_area,
        }
    }
}

/// In-process coverage statistics engine for one resolution order.
///
/// Stateless apart from the precomputed pixel solid angle; a single engine may
/// be shared by any number of concurrent runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageEngine {
    order: u8,
    pixel_area: f64,
}

impl Default for CoverageEngine {
    fn default() -> Self {
        Self {
            order: healpix::MAX_ORDER,
            pixel_area: healpix::unchecked_pixel_area(healpix::MAX_ORDER),
        }
    }
}

impl CoverageEngine {
    /// Build an engine for pixel indices at `order`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `order` exceeds [`healpix::MAX_ORDER`].
    pub fn new(order: u8) -> Result<Self, SkycovError> {
        Ok(Self {
            order,
            pixel_area: healpix::pixel_area(order)?,
        })
    }

    /// Resolution order of the pixel indices this engine expects.
    #[must_use]
    pub const fn order(&self) -> u8 {
        self.order
    }

    /// Solid angle of one pixel in steradians.
    #[must_use]
    pub const fn pixel_area(&self) -> f64 {
        self.pixel_area
    }

    /// Covered solid angle and probability of `footprint` over `tiles`.
    ///
    /// `footprint` must already be disjoint (see [`crate::merge_ranges`]).
    /// Empty `tiles` or an empty `footprint` yield [`CoverageResult::ZERO`].
    ///
    /// # Errors
    /// Returns `MalformedInput` under the conditions listed on [`raw_coverage`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov_core::coverage::compute",
            skip_all,
            fields(order = self.order, tiles = tiles.len(), ranges = footprint.len()),
        )
    )]
    pub fn compute(
        &self,
        tiles: &[ProbabilityTile],
        footprint: &[PixelRange],
    ) -> Result<CoverageResult, SkycovError> {
        Ok(raw_coverage(tiles, footprint)?.scaled(self.pixel_area))
    }
}

/// A coverage back-end: turns a merged footprint into a [`CoverageResult`]
/// for one localization.
///
/// Implementations differ only in where the intersection runs (in this process
/// over fetched tiles, or inside the store); the contract and the result are
/// the same.
#[async_trait]
pub trait CoverageSource: Send + Sync {
    /// Which configured method this back-end implements.
    fn method(&self) -> StatsMethod;

    /// Compute the coverage of an already merged `footprint` over `localization`.
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
    ) -> Result<CoverageResult, SkycovError>;
}
