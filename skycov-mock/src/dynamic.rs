use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use skycov_core::connector::{
    CoverageQueryProvider, PlanProvider, PlanStore, RequestProvider, TileProvider,
};
use skycov_core::{
    CoverageResult, LocalizationId, ObservationPlan, PixelRange, PlanId, PlanRequest,
    ProbabilityTile, RequestId, SkycovError,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(SkycovError),
    /// Hang indefinitely (simulate a stalled store).
    Hang,
}

#[derive(Default)]
struct InternalState {
    plan_rules: HashMap<PlanId, MockBehavior<ObservationPlan>>,
    request_rules: HashMap<RequestId, MockBehavior<PlanRequest>>,
    tile_rules: HashMap<LocalizationId, MockBehavior<Arc<[ProbabilityTile]>>>,
    coverage_rules: HashMap<LocalizationId, MockBehavior<CoverageResult>>,
    tile_fetches: Vec<LocalizationId>,
    coverage_queries: Vec<(LocalizationId, Vec<PixelRange>, u8)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `observation_plan` calls for a specific plan.
    pub async fn set_plan_behavior(&self, plan: PlanId, behavior: MockBehavior<ObservationPlan>) {
        let mut guard = self.state.lock().await;
        guard.plan_rules.insert(plan, behavior);
    }

    /// Set the behavior for `plan_request` calls for a specific request.
    pub async fn set_request_behavior(
        &self,
        request: RequestId,
        behavior: MockBehavior<PlanRequest>,
    ) {
        let mut guard = self.state.lock().await;
        guard.request_rules.insert(request, behavior);
    }

    /// Set the behavior for `localization_tiles` calls for a specific localization.
    pub async fn set_tile_behavior(
        &self,
        localization: LocalizationId,
        behavior: MockBehavior<Arc<[ProbabilityTile]>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.tile_rules.insert(localization, behavior);
    }

    /// Set the behavior for store-side `coverage` calls for a specific localization.
    pub async fn set_coverage_behavior(
        &self,
        localization: LocalizationId,
        behavior: MockBehavior<CoverageResult>,
    ) {
        let mut guard = self.state.lock().await;
        guard.coverage_rules.insert(localization, behavior);
    }

    /// Localizations whose tiles were requested, in call order.
    pub async fn tile_fetches(&self) -> Vec<LocalizationId> {
        self.state.lock().await.tile_fetches.clone()
    }

    /// Store-side coverage calls received, in call order.
    pub async fn coverage_queries(&self) -> Vec<(LocalizationId, Vec<PixelRange>, u8)> {
        self.state.lock().await.coverage_queries.clone()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// Scriptable plan store: every answer is configured through a [`DynamicMockController`].
///
/// Inputs without a configured behavior fail with `NotFound`.
pub struct DynamicMockStore {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    coverage_queries: bool,
}

impl DynamicMockStore {
    /// Create a store advertising every capability, plus its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        Self::build(name, true)
    }

    /// Create a store that does not advertise store-side coverage queries.
    #[must_use]
    pub fn without_coverage_queries(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        Self::build(name, false)
    }

    fn build(name: &'static str, coverage_queries: bool) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let store = Arc::new(Self {
            name,
            state: Arc::clone(&state),
            coverage_queries,
        });
        (store, DynamicMockController { state })
    }
}

async fn resolve<T>(
    rule: Option<MockBehavior<T>>,
    missing: impl FnOnce() -> SkycovError,
) -> Result<T, SkycovError> {
    match rule {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(missing()),
    }
}

impl PlanStore for DynamicMockStore {
    fn name(&self) -> &'static str {
        self.name
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
        if self.coverage_queries {
            Some(self as &dyn CoverageQueryProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl PlanProvider for DynamicMockStore {
    async fn observation_plan(&self, plan: PlanId) -> Result<ObservationPlan, SkycovError> {
        let rule = self.state.lock().await.plan_rules.get(&plan).cloned();
        resolve(rule, || SkycovError::not_found(plan.to_string())).await
    }
}

#[async_trait]
impl RequestProvider for DynamicMockStore {
    async fn plan_request(&self, request: RequestId) -> Result<PlanRequest, SkycovError> {
        let rule = self.state.lock().await.request_rules.get(&request).cloned();
        resolve(rule, || SkycovError::not_found(request.to_string())).await
    }
}

#[async_trait]
impl TileProvider for DynamicMockStore {
    async fn localization_tiles(
        &self,
        localization: LocalizationId,
    ) -> Result<Arc<[ProbabilityTile]>, SkycovError> {
        let rule = {
            let mut guard = self.state.lock().await;
            guard.tile_fetches.push(localization);
            guard.tile_rules.get(&localization).cloned()
        };
        resolve(rule, || SkycovError::not_found(localization.to_string())).await
    }
}

#[async_trait]
impl CoverageQueryProvider for DynamicMockStore {
    async fn coverage(
        &self,
        localization: LocalizationId,
        footprint: &[PixelRange],
        order: u8,
    ) -> Result<CoverageResult, SkycovError> {
        let rule = {
            let mut guard = self.state.lock().await;
            guard
                .coverage_queries
                .push((localization, footprint.to_vec(), order));
            guard.coverage_rules.get(&localization).cloned()
        };
        resolve(rule, || SkycovError::not_found(localization.to_string())).await
    }
}
