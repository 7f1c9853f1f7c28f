use std::sync::Arc;

use async_trait::async_trait;
use skycov_core::connector::{
    CoverageQueryProvider, PlanProvider, PlanStore, RequestProvider, StatisticsSink, TileProvider,
};
use skycov_core::{
    CoverageEngine, CoverageResult, LocalizationId, ObservationPlan, PixelRange, PlanId,
    PlanRequest, PlanStatisticsRecord, ProbabilityTile, RequestId, SkycovError,
};
use tokio::sync::Mutex;

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockStore, MockBehavior};

/// Mock plan store for CI-safe tests and demos. Serves deterministic data from static fixtures.
pub struct MockStore;

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: impl std::fmt::Display) -> SkycovError {
        SkycovError::not_found(what.to_string())
    }
}

impl PlanStore for MockStore {
    fn name(&self) -> &'static str {
        "skycov-mock"
    }

    fn as_plan_provider(&self) -> Option<&dyn PlanProvider> {
        Some(self as &dyn PlanProvider)
    }
    fn as_request_provider(&self) -> Option<&dyn RequestProvider> {
        Some(self as &dyn RequestProvider)
    }
    fn as_tile_provider(&self) -> Option<&dyn TileProvider> {
        Some(self as &dyn TileProvider)
    }
    fn as_coverage_query_provider(&self) -> Option<&dyn CoverageQueryProvider> {
        Some(self as &dyn CoverageQueryProvider)
    }
}

#[async_trait]
impl PlanProvider for MockStore {
    async fn observation_plan(&self, plan: PlanId) -> Result<ObservationPlan, SkycovError> {
        if plan == fixtures::PLAN_FAIL {
            return Err(SkycovError::Other(format!("forced failure: {plan}")));
        }
        fixtures::plan_for(plan).ok_or_else(|| Self::not_found(plan))
    }
}

#[async_trait]
impl RequestProvider for MockStore {
    async fn plan_request(&self, request: RequestId) -> Result<PlanRequest, SkycovError> {
        fixtures::request_for(request).ok_or_else(|| Self::not_found(request))
    }
}

#[async_trait]
impl TileProvider for MockStore {
    async fn localization_tiles(
        &self,
        localization: LocalizationId,
    ) -> Result<Arc<[ProbabilityTile]>, SkycovError> {
        fixtures::tiles_for(localization).ok_or_else(|| Self::not_found(localization))
    }
}

#[async_trait]
impl CoverageQueryProvider for MockStore {
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
        order: u8,
    ) -> Result<CoverageResult, SkycovError> {
        let tiles = fixtures::tiles_for(localization).ok_or_else(|| Self::not_found(localization))?;
        CoverageEngine::new(order)?.compute(&tiles, footprint)
    }
}

/// Statistics sink that keeps every published record in memory.
///
/// Built with [`RecordingSink::failing`] it rejects every record instead.
pub struct RecordingSink {
    records: Mutex<Vec<PlanStatisticsRecord>>,
    fail_with: Option<String>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A sink whose `publish` always fails with `msg`.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(msg.into()),
        }
    }

    /// Records published so far, in publish order.
    pub async fn records(&self) -> Vec<PlanStatisticsRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl StatisticsSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording-sink"
    }

    async fn publish(&self, record: PlanStatisticsRecord) -> Result<(), SkycovError> {
        if let Some(msg) = &self.fail_with {
            return Err(SkycovError::Other(msg.clone()));
        }
        self.records.lock().await.push(record);
        Ok(())
    }
}
