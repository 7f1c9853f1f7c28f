//! Skycov-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod ids;
mod observation;
mod pixel;
mod reports;

pub use capability::Capability;
pub use config::{SkycovConfig, StatsMethod};
pub use error::SkycovError;
pub use ids::{FieldId, InstrumentId, LocalizationId, PlanId, RequestId};
pub use observation::{ObservationPlan, PlanRequest, PlannedObservation};
pub use pixel::{PixelRange, ProbabilityTile};
pub use reports::{
    BatchReport, CoverageResult, ObservationSummary, PlanStatisticsRecord, RunFailure,
    SQUARE_DEGREES_PER_STERADIAN,
};
