use std::sync::Arc;
use std::time::Duration;

use skycov_core::{
    Capability, CoverageEngine, CoverageSource, MAX_ORDER, PlanStore, SkycovConfig, SkycovError,
    StatisticsSink, StatsMethod,
};

use crate::coverage::{InProcessCoverage, StoreCoverage};

/// Orchestrator that turns (plan, request) pairs into statistics records.
pub struct Skycov {
    pub(crate) store: Arc<dyn PlanStore>,
    pub(crate) sink: Option<Arc<dyn StatisticsSink>>,
    pub(crate) cfg: SkycovConfig,
    pub(crate) coverage: Arc<dyn CoverageSource>,
}

/// Builder for constructing a `Skycov` orchestrator with custom configuration.
pub struct SkycovBuilder {
    store: Option<Arc<dyn PlanStore>>,
    sink: Option<Arc<dyn StatisticsSink>>,
    cfg: SkycovConfig,
}

impl Default for SkycovBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkycovBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts without a store; you must provide one via [`with_store`](Self::with_store).
    /// - Defaults: order 29, in-process coverage, 30s per store call, no batch
    ///   deadline, at most 8 concurrent runs per batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            sink: None,
            cfg: SkycovConfig::default(),
        }
    }

    /// Set the plan/request store every run reads from. Replaces any previous store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the sink used by [`Skycov::run_and_publish`].
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn StatisticsSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: SkycovConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the resolution order of the pixel indices stored in plans and localizations.
    #[must_use]
    pub const fn healpix_order(mut self, order: u8) -> Self {
        self.cfg.healpix_order = order;
        self
    }

    /// Select where coverage is computed.
    ///
    /// Behavior and trade-offs:
    /// - `InProcess` needs a store with localization tiles and transfers the full
    ///   tile set for every run with a non-empty footprint.
    /// - `Store` needs a store with coverage queries and transfers only the merged
    ///   footprint.
    #[must_use]
    pub const fn stats_method(mut self, method: StatsMethod) -> Self {
        self.cfg.stats_method = method;
        self
    }

    /// Set the timeout applied to each individual store call.
    ///
    /// An expired call fails the run with `FetchFailure`.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Set an overall deadline for [`Skycov::run_many`].
    ///
    /// When exceeded, the batch returns `RequestTimeout` and partial results are dropped.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Bound the number of runs executing at once inside a batch.
    #[must_use]
    pub const fn max_concurrent_runs(mut self, n: usize) -> Self {
        self.cfg.max_concurrent_runs = n;
        self
    }

    /// Build the `Skycov` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no store was provided, the order exceeds 29, or
    ///   `max_concurrent_runs` is zero.
    /// - `Unsupported` if the store cannot serve plans, requests, or the
    ///   capability the selected coverage method needs.
    pub fn build(self) -> Result<Skycov, SkycovError> {
        let Some(store) = self.store else {
            return Err(SkycovError::InvalidArg(
                "no store registered; add one via with_store(...)".to_string(),
            ));
        };
        if self.cfg.healpix_order > MAX_ORDER {
            return Err(SkycovError::InvalidArg(format!(
                "healpix order {} exceeds the maximum of {MAX_ORDER}",
                self.cfg.healpix_order
            )));
        }
        if self.cfg.max_concurrent_runs == 0 {
            return Err(SkycovError::InvalidArg(
                "max_concurrent_runs must be at least 1".to_string(),
            ));
        }
        if store.as_plan_provider().is_none() {
            return Err(SkycovError::unsupported(Capability::ObservationPlan.to_string()));
        }
        if store.as_request_provider().is_none() {
            return Err(SkycovError::unsupported(Capability::PlanRequest.to_string()));
        }

        let engine = CoverageEngine::new(self.cfg.healpix_order)?;
        let coverage: Arc<dyn CoverageSource> = match self.cfg.stats_method {
            StatsMethod::InProcess => {
                if store.as_tile_provider().is_none() {
                    return Err(SkycovError::unsupported(
                        Capability::LocalizationTiles.to_string(),
                    ));
                }
                Arc::new(InProcessCoverage::new(
                    Arc::clone(&store),
                    engine,
                    self.cfg.fetch_timeout,
                ))
            }
            StatsMethod::Store => {
                if store.as_coverage_query_provider().is_none() {
                    return Err(SkycovError::unsupported(Capability::CoverageQuery.to_string()));
                }
                Arc::new(StoreCoverage::new(
                    Arc::clone(&store),
                    engine.order(),
                    self.cfg.fetch_timeout,
                ))
            }
            other => {
                return Err(SkycovError::InvalidArg(format!(
                    "unknown stats method: {other}"
                )));
            }
        };

        Ok(Skycov {
            store,
            sink: self.sink,
            cfg: self.cfg,
            coverage,
        })
    }
}

/// Tag a store error with the store name and capability.
///
/// Errors that already describe their origin pass through unchanged.
pub(crate) fn tag_err(store: &str, capability: Capability, e: SkycovError) -> SkycovError {
    match e {
        e @ (SkycovError::MalformedInput(_)
        | SkycovError::FetchFailure { .. }
        | SkycovError::RequestTimeout { .. }) => e,
        other => SkycovError::fetch_failure(store, capability.as_str(), other.to_string()),
    }
}

/// Wrap a store future with a timeout and tag its error with the store and capability.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "skycov::core::fetch_with_timeout",
        skip(fut),
        fields(
            store = store_name,
            capability = %capability,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )
)]
pub(crate) async fn fetch_with_timeout<T, Fut>(
    store_name: &'static str,
    capability: Capability,
    timeout: Duration,
    fut: Fut,
) -> Result<T, SkycovError>
where
    Fut: core::future::Future<Output = Result<T, SkycovError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(res) => res.map_err(|e| tag_err(store_name, capability, e)),
        Err(_) => Err(SkycovError::fetch_failure(
            store_name,
            capability.as_str(),
            format!("timed out after {}ms", timeout.as_millis()),
        )),
    }
}

/// Apply an optional overall deadline to a future.
///
/// On expiry returns `RequestTimeout("request")`; callers remap the label to
/// the capability they were serving.
pub(crate) async fn with_request_deadline<F>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<F::Output, SkycovError>
where
    F: core::future::Future,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| SkycovError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Skycov {
    /// Start building a new `Skycov` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use skycov::{Skycov, StatsMethod};
    ///
    /// let skycov = Skycov::builder()
    ///     .with_store(Arc::new(skycov_mock::MockStore::new()))
    ///     .with_sink(Arc::new(skycov_mock::RecordingSink::new()))
    ///     .stats_method(StatsMethod::Store)
    ///     .max_concurrent_runs(4)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SkycovBuilder {
        SkycovBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &SkycovConfig {
        &self.cfg
    }

    /// Coverage back-end selected at build time.
    #[must_use]
    pub fn stats_method(&self) -> StatsMethod {
        self.coverage.method()
    }
}
