// Shared fixtures and helpers for the orchestrator tests.
use std::sync::Arc;

use skycov::connector::{PlanProvider, RequestProvider};
use skycov::{
    CoverageEngine, FieldId, InstrumentId, LocalizationId, ObservationPlan, PixelRange, PlanId,
    PlanRequest, PlanStore, PlannedObservation, RequestId, Skycov, StatsMethod,
};
use skycov_mock::MockStore;

/// Solid angle of one pixel at the default order 29.
pub fn pixel_area() -> f64 {
    CoverageEngine::default().pixel_area()
}

/// Relative float comparison for scaled coverage values.
#[track_caller]
pub fn assert_close(got: f64, want: f64) {
    let tol = 1e-12 * want.abs().max(f64::MIN_POSITIVE);
    assert!(
        (got - want).abs() <= tol,
        "got {got:e}, want {want:e} (tolerance {tol:e})"
    );
}

/// Construct a UTC `DateTime` on the fixture night (2024-05-01, 03:mm UTC).
pub fn at(minute: u32) -> chrono::DateTime<chrono::Utc> {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
    let naive = date.and_hms_opt(3, minute, 0).expect("valid time");
    chrono::DateTime::from_naive_utc_and_offset(naive, chrono::Utc)
}

/// A 30s pointing with 15s overhead.
pub fn pointing(
    instrument: i64,
    minute: u32,
    filter: &str,
    ranges: &[(u64, u64)],
) -> PlannedObservation {
    PlannedObservation {
        instrument_id: InstrumentId(instrument),
        field_id: FieldId(i64::from(minute)),
        obstime: at(minute),
        filter: filter.to_string(),
        exposure_seconds: 30.0,
        overhead_seconds: 15.0,
        footprint: ranges
            .iter()
            .map(|&(lower, upper)| PixelRange { lower, upper })
            .collect(),
    }
}

pub fn plan(id: i64, observations: Vec<PlannedObservation>) -> ObservationPlan {
    ObservationPlan {
        id: PlanId(id),
        observations,
    }
}

pub fn request(id: i64, instrument: i64, localization: i64) -> PlanRequest {
    PlanRequest {
        id: RequestId(id),
        instrument_id: InstrumentId(instrument),
        localization_id: LocalizationId(localization),
        event_time: Some(at(0)),
    }
}

/// `Skycov` over the static fixture store with the given coverage method.
pub fn mock_skycov(method: StatsMethod) -> Skycov {
    Skycov::builder()
        .with_store(Arc::new(MockStore::new()))
        .stats_method(method)
        .build()
        .expect("valid builder")
}

/// Store serving plans and requests only; no localization tiles, no coverage queries.
pub struct PlansOnly(pub MockStore);

impl PlanStore for PlansOnly {
    fn name(&self) -> &'static str {
        "plans-only"
    }

    fn as_plan_provider(&self) -> Option<&dyn PlanProvider> {
        Some(&self.0 as &dyn PlanProvider)
    }
    fn as_request_provider(&self) -> Option<&dyn RequestProvider> {
        Some(&self.0 as &dyn RequestProvider)
    }
}

/// Store advertising nothing at all.
pub struct Bare;

impl PlanStore for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
