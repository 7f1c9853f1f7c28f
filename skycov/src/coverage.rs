//! The two coverage back-ends a `Skycov` can be built with.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use skycov_core::{
    Capability, CoverageEngine, CoverageResult, CoverageSource, LocalizationId, PixelRange,
    PlanStore, SkycovError, StatsMethod,
};

use crate::core::fetch_with_timeout;

/// Fetches the localization tiles and runs the sweep in this process.
pub struct InProcessCoverage {
    store: Arc<dyn PlanStore>,
    engine: CoverageEngine,
    fetch_timeout: Duration,
}

impl InProcessCoverage {
    /// Back-end reading tiles from `store`, each fetch bounded by `fetch_timeout`.
    #[must_use]
    pub fn new(store: Arc<dyn PlanStore>, engine: CoverageEngine, fetch_timeout: Duration) -> Self {
        Self {
            store,
            engine,
            fetch_timeout,
        }
    }
}

#[async_trait]
impl CoverageSource for InProcessCoverage {
    fn method(&self) -> StatsMethod {
        StatsMethod::InProcess
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov::coverage::in_process",
            skip(self, footprint),
            fields(localization = %localization, ranges = footprint.len()),
        )
    )]
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
    ) -> Result<CoverageResult, SkycovError> {
        let provider = self.store.as_tile_provider().ok_or_else(|| {
            SkycovError::unsupported(Capability::LocalizationTiles.to_string())
        })?;
        let tiles = fetch_with_timeout(
            self.store.name(),
            Capability::LocalizationTiles,
            self.fetch_timeout,
            provider.localization_tiles(localization),
        )
        .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(tiles = tiles.len(), "fetched localization tiles");
        self.engine.compute(&tiles, footprint)
    }
}

/// Pushes the merged footprint down to the store's coverage query.
pub struct StoreCoverage {
    store: Arc<dyn PlanStore>,
    order: u8,
    fetch_timeout: Duration,
}

impl StoreCoverage {
    /// Back-end asking `store` for coverage at `order`, each query bounded by `fetch_timeout`.
    #[must_use]
    pub fn new(store: Arc<dyn PlanStore>, order: u8, fetch_timeout: Duration) -> Self {
        Self {
            store,
            order,
            fetch_timeout,
        }
    }
}

#[async_trait]
impl CoverageSource for StoreCoverage {
    fn method(&self) -> StatsMethod {
        StatsMethod::Store
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov::coverage::store",
            skip(self, footprint),
            fields(localization = %localization, ranges = footprint.len(), order = self.order),
        )
    )]
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
    ) -> Result<CoverageResult, SkycovError> {
        let provider = self
            .store
            .as_coverage_query_provider()
            .ok_or_else(|| SkycovError::unsupported(Capability::CoverageQuery.to_string()))?;
        let result = fetch_with_timeout(
            self.store.name(),
            Capability::CoverageQuery,
            self.fetch_timeout,
            provider.coverage(localization, footprint, self.order),
        )
        .await?;
        result.validate()?;
        Ok(result)
    }
}
