//! Immutable result records produced by statistics runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{InstrumentId, LocalizationId, PlanId, RequestId, SkycovError, StatsMethod};

/// Conversion factor from steradians to square degrees, `(180/π)²`.
pub const SQUARE_DEGREES_PER_STERADIAN: f64 =
    (180.0 / core::f64::consts::PI) * (180.0 / core::f64::consts::PI);

/// Covered solid angle and probability mass of a plan footprint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Covered solid angle in steradians.
    pub area_steradians: f64,
    /// Covered probability mass.
    pub probability: f64,
}

impl CoverageResult {
    /// Coverage of an empty footprint.
    pub const ZERO: Self = Self {
        area_steradians: 0.0,
        probability: 0.0,
    };

    /// Check that both quantities are finite and non-negative.
    ///
    /// # Errors
    /// Returns `MalformedInput` naming the offending quantity.
    pub fn validate(&self) -> Result<(), SkycovError> {
        for (what, value) in [
            ("area", self.area_steradians),
            ("probability", self.probability),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SkycovError::malformed(format!(
                    "coverage {what} {value} is not a non-negative finite number"
                )));
            }
        }
        Ok(())
    }

    /// Covered area in square degrees.
    #[must_use]
    pub fn area_square_degrees(&self) -> f64 {
        self.area_steradians * SQUARE_DEGREES_PER_STERADIAN
    }
}

/// Scalar aggregates over the raw (unmerged) planned observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservationSummary {
    /// Earliest observation time; `None` for an empty plan.
    pub start_observation: Option<DateTime<Utc>>,
    /// Sorted distinct filters; `None` for an empty plan.
    pub unique_filters: Option<Vec<String>>,
    /// Number of planned observations.
    pub num_observations: usize,
    /// Sum of exposure times in seconds.
    pub total_exposure_seconds: f64,
    /// Sum of exposure plus overhead times in seconds.
    pub total_time_with_overhead_seconds: f64,
}

/// Result of one statistics run for a (plan, request) pair.
///
/// Created once per run and never mutated; a re-run produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStatisticsRecord {
    /// Plan the statistics describe.
    pub plan_id: PlanId,
    /// Request the plan answers.
    pub request_id: RequestId,
    /// Localization the coverage was computed against.
    pub localization_id: LocalizationId,
    /// Instrument whose pointings contributed to the coverage.
    pub instrument_id: InstrumentId,
    /// Coverage back-end that produced `coverage`.
    pub stats_method: StatsMethod,
    /// Covered area and probability.
    pub coverage: CoverageResult,
    /// Earliest observation time; `None` for an empty plan.
    pub start_observation: Option<DateTime<Utc>>,
    /// Sorted distinct filters; `None` for an empty plan.
    pub unique_filters: Option<Vec<String>>,
    /// Number of planned observations.
    pub num_observations: usize,
    /// Sum of exposure times in seconds.
    pub total_exposure_seconds: f64,
    /// Sum of exposure plus overhead times in seconds.
    pub total_time_with_overhead_seconds: f64,
    /// Seconds between the triggering event and the first observation, when both are known.
    pub time_since_event_seconds: Option<f64>,
    /// When the record was assembled.
    pub created_at: DateTime<Utc>,
}

/// Failure of one run inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFailure {
    /// Plan of the failed run.
    pub plan_id: PlanId,
    /// Request of the failed run.
    pub request_id: RequestId,
    /// Terminal error of the run.
    pub error: SkycovError,
}

/// Summary of a batch of statistics runs.
///
/// Records appear in the order the pairs were submitted; failed runs are listed
/// in `failures` and do not abort the rest of the batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Records of the runs that completed.
    pub records: Vec<PlanStatisticsRecord>,
    /// Runs that ended in a terminal error.
    pub failures: Vec<RunFailure>,
}
