//! Re-export of foundational types from `skycov-types`.
// Consolidated re-exports so downstream crates can depend on `skycov-core` only

pub use skycov_types::{Capability, SkycovError};

pub use skycov_types::{FieldId, InstrumentId, LocalizationId, PlanId, RequestId};
pub use skycov_types::{ObservationPlan, PlanRequest, PlannedObservation};
pub use skycov_types::{PixelRange, ProbabilityTile};
pub use skycov_types::{
    BatchReport, CoverageResult, ObservationSummary, PlanStatisticsRecord, RunFailure,
    SQUARE_DEGREES_PER_STERADIAN,
};
pub use skycov_types::{SkycovConfig, StatsMethod};
