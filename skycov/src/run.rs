use std::collections::HashSet;

use chrono::Utc;
use skycov_core::{
    BatchReport, Capability, CoverageResult, ObservationPlan, PlanId, PlanRequest,
    PlanStatisticsRecord, RequestId, RunFailure, SkycovError, group_footprints, merge_ranges,
    summarize_observations,
};

use crate::Skycov;
use crate::core::fetch_with_timeout;

impl Skycov {
    async fn fetch_plan(&self, plan_id: PlanId) -> Result<ObservationPlan, SkycovError> {
        let provider = self
            .store
            .as_plan_provider()
            .ok_or_else(|| SkycovError::unsupported(Capability::ObservationPlan.to_string()))?;
        fetch_with_timeout(
            self.store.name(),
            Capability::ObservationPlan,
            self.cfg.fetch_timeout,
            provider.observation_plan(plan_id),
        )
        .await
    }

    async fn fetch_request(&self, request_id: RequestId) -> Result<PlanRequest, SkycovError> {
        let provider = self
            .store
            .as_request_provider()
            .ok_or_else(|| SkycovError::unsupported(Capability::PlanRequest.to_string()))?;
        fetch_with_timeout(
            self.store.name(),
            Capability::PlanRequest,
            self.cfg.fetch_timeout,
            provider.plan_request(request_id),
        )
        .await
    }

    /// Compute the statistics record of one plan for one request.
    ///
    /// Behavior:
    /// - Fetches the request and the plan concurrently.
    /// - Merges the footprints of the request's instrument only; pointings of
    ///   other instruments count towards the scalar aggregates but not coverage.
    /// - An empty plan, or one without pointings for the instrument, yields zero
    ///   coverage without reading the localization.
    /// - Aggregates (start, filters, counts, exposure) use the raw observations.
    ///
    /// # Errors
    /// - `FetchFailure` if any store call fails or exceeds the fetch timeout.
    /// - `MalformedInput` if a footprint range, an exposure or an overhead is invalid.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov::run",
            skip(self),
            fields(plan = %plan_id, request = %request_id, method = %self.coverage.method()),
        )
    )]
    pub async fn run(
        &self,
        plan_id: PlanId,
        request_id: RequestId,
    ) -> Result<PlanStatisticsRecord, SkycovError> {
        let (request, plan) =
            tokio::try_join!(self.fetch_request(request_id), self.fetch_plan(plan_id))?;

        let summary = summarize_observations(&plan.observations)?;
        let mut footprints = group_footprints(&plan.observations);
        let raw = footprints
            .remove(&request.instrument_id)
            .unwrap_or_default();
        let merged = merge_ranges(raw)?;

        let coverage = if merged.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                instrument = %request.instrument_id,
                observations = plan.observations.len(),
                "no footprint for instrument; skipping coverage"
            );
            CoverageResult::ZERO
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(ranges = merged.len(), "merged footprint");
            self.coverage
                .coverage(request.localization_id, &merged)
                .await?
        };

        let time_since_event_seconds = match (summary.start_observation, request.event_time) {
            (Some(start), Some(event)) => Some((start - event).num_milliseconds() as f64 / 1000.0),
            _ => None,
        };

        Ok(PlanStatisticsRecord {
            plan_id,
            request_id,
            localization_id: request.localization_id,
            instrument_id: request.instrument_id,
            stats_method: self.coverage.method(),
            coverage,
            start_observation: summary.start_observation,
            unique_filters: summary.unique_filters,
            num_observations: summary.num_observations,
            total_exposure_seconds: summary.total_exposure_seconds,
            total_time_with_overhead_seconds: summary.total_time_with_overhead_seconds,
            time_since_event_seconds,
            created_at: Utc::now(),
        })
    }

    /// Run and hand the finished record to the configured sink.
    ///
    /// The returned record is the one the sink accepted.
    ///
    /// # Errors
    /// - `Unsupported` if no sink was configured; nothing is fetched in that case.
    /// - Any error of [`run`](Self::run).
    /// - `Publish` if the sink rejects the record.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov::run_and_publish",
            skip(self),
            fields(plan = %plan_id, request = %request_id),
        )
    )]
    pub async fn run_and_publish(
        &self,
        plan_id: PlanId,
        request_id: RequestId,
    ) -> Result<PlanStatisticsRecord, SkycovError> {
        let sink = self
            .sink
            .as_ref()
            .ok_or_else(|| SkycovError::unsupported(Capability::Publish.to_string()))?;
        let record = self.run(plan_id, request_id).await?;
        sink.publish(record.clone()).await.map_err(|e| match e {
            e @ SkycovError::Publish { .. } => e,
            other => SkycovError::publish(sink.name(), other.to_string()),
        })?;
        Ok(record)
    }

    /// Run many independent (plan, request) pairs.
    ///
    /// Behavior and trade-offs:
    /// - At most `max_concurrent_runs` runs are in flight at once.
    /// - Records keep the order of `pairs`; failed runs are reported in
    ///   [`BatchReport::failures`] without aborting the rest of the batch.
    /// - The optional request timeout bounds the whole batch; on expiry partial
    ///   results are discarded.
    ///
    /// # Errors
    /// - `InvalidArg` if `pairs` is empty or repeats a pair.
    /// - `RequestTimeout` if the batch deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skycov::run_many",
            skip(self, pairs),
            fields(runs = pairs.len(), limit = self.cfg.max_concurrent_runs),
        )
    )]
    pub async fn run_many(
        &self,
        pairs: &[(PlanId, RequestId)],
    ) -> Result<BatchReport, SkycovError> {
        if pairs.is_empty() {
            return Err(SkycovError::InvalidArg(
                "no (plan, request) pairs specified".into(),
            ));
        }
        let mut seen = HashSet::new();
        for &(plan_id, request_id) in pairs {
            if !seen.insert((plan_id, request_id)) {
                return Err(SkycovError::InvalidArg(format!(
                    "duplicate pair ({plan_id}, {request_id}) in batch"
                )));
            }
        }

        let tasks = pairs.iter().map(|&(plan_id, request_id)| async move {
            (plan_id, request_id, self.run(plan_id, request_id).await)
        });
        let joined = crate::util::join_with_deadline(
            tasks,
            self.cfg.max_concurrent_runs,
            self.cfg.request_timeout,
        )
        .await
        .map_err(|e| match e {
            SkycovError::RequestTimeout { .. } => {
                SkycovError::request_timeout(Capability::PlanStatistics.as_str())
            }
            other => other,
        })?;

        let mut report = BatchReport::default();
        for (plan_id, request_id, result) in joined {
            match result {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(plan = %plan_id, request = %request_id, error = %error, "run failed");
                    report.failures.push(RunFailure {
                        plan_id,
                        request_id,
                        error,
                    });
                }
            }
        }
        Ok(report)
    }
}
