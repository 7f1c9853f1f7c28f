use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    CoverageResult, LocalizationId, ObservationPlan, PixelRange, PlanId, PlanRequest,
    PlanStatisticsRecord, ProbabilityTile, RequestId, SkycovError,
};

/// Focused role trait for stores that provide observation plans.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    /// Fetch the planned observations of `plan`.
    async fn observation_plan(&self, plan: PlanId) -> Result<ObservationPlan, SkycovError>;
}

/// Focused role trait for stores that provide observation-plan requests.
#[async_trait]
pub trait RequestProvider: Send + Sync {
    /// Fetch the instrument, localization and event time of `request`.
    async fn plan_request(&self, request: RequestId) -> Result<PlanRequest, SkycovError>;
}

/// Focused role trait for stores that provide localization tiles.
#[async_trait]
pub trait TileProvider: Send + Sync {
    /// Fetch the disjoint probability tiles of `localization`.
    ///
    /// The snapshot is read-only and may be handed to several concurrent runs
    /// that reference the same localization.
    async fn localization_tiles(
        &self,
        localization: LocalizationId,
    ) -> Result<Arc<[ProbabilityTile]>, SkycovError>;
}

/// Focused role trait for stores able to compute coverage next to the data.
#[async_trait]
pub trait CoverageQueryProvider: Send + Sync {
    /// Compute the coverage of a merged `footprint` over `localization`, with
    /// pixel indices at `order`.
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
        order: u8,
    ) -> Result<CoverageResult, SkycovError>;
}

/// The plan/request store a statistics run reads from.
///
/// A store advertises each capability it supports by returning `Some` from the
/// matching accessor. The orchestrator needs plans and requests, plus tiles
/// (in-process method) or coverage queries (store method).
pub trait PlanStore: Send + Sync {
    /// Human-readable store name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Advertise observation-plan capability.
    fn as_plan_provider(&self) -> Option<&dyn PlanProvider> {
        None
    }

    /// Advertise plan-request capability.
    fn as_request_provider(&self) -> Option<&dyn RequestProvider> {
        None
    }

    /// Advertise localization-tile capability.
    fn as_tile_provider(&self) -> Option<&dyn TileProvider> {
        None
    }

    /// Advertise store-side coverage capability.
    fn as_coverage_query_provider(&self) -> Option<&dyn CoverageQueryProvider> {
        None
    }
}

/// Persistence/notification collaborator receiving finished records.
///
/// Once `publish` returns `Ok`, the run is complete: the sink owns storage of
/// the record and broadcasting the "plan updated" event.
#[async_trait]
pub trait StatisticsSink: Send + Sync {
    /// Human-readable sink name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Take ownership of a finished record.
    async fn publish(&self, record: PlanStatisticsRecord) -> Result<(), SkycovError>;
}
