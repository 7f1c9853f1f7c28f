//! Skycov computes coverage and scheduling statistics for telescope
//! observation plans laid over a sky localization.
//!
//! Overview
//! - Fetches a plan and its request from a [`PlanStore`], merges the pointings of
//!   the request's instrument into a disjoint footprint and intersects it with the
//!   localization's probability tiles.
//! - Produces one immutable [`PlanStatisticsRecord`] per run: covered area and
//!   probability, plus scalar aggregates (start, filters, counts, exposure time)
//!   over the raw planned observations.
//! - Normalizes store failures into [`SkycovError::FetchFailure`] tagged with the
//!   store name and capability. Nothing is retried; see [`SkycovError::is_retryable`].
//!
//! Key behaviors and trade-offs
//! - Coverage method:
//!   - `InProcess`: fetch the tiles and run the sweep here; portable, but moves
//!     the whole localization over the wire.
//!   - `Store`: hand the merged footprint to the store's coverage query; cheaper
//!     transfer, but the store must implement [`connector::CoverageQueryProvider`].
//! - Empty plans and plans without pointings for the request's instrument yield
//!   zero coverage without touching the localization.
//! - Batches run with bounded concurrency and keep going past individual failures.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use skycov::{Skycov, StatsMethod};
//!
//! let skycov = Skycov::builder()
//!     .with_store(Arc::new(MyStore::connect(url)?))
//!     .stats_method(StatsMethod::InProcess)
//!     .fetch_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let record = skycov.run(PlanId(42), RequestId(7)).await?;
//! println!("{:.2} deg², p = {:.3}", record.coverage.area_square_degrees(), record.coverage.probability);
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod coverage;
mod run;
mod util;

pub use core::{Skycov, SkycovBuilder};
pub use coverage::{InProcessCoverage, StoreCoverage};
pub use util::join_with_deadline;

pub use skycov_core::connector;
pub use skycov_types::{SkycovConfig, StatsMethod};

// Re-export core types for convenience
pub use skycov_core::{
    BatchReport, Capability, CoverageEngine, CoverageResult, CoverageSource, FieldId,
    InstrumentId, LocalizationId, ObservationPlan, ObservationSummary, PixelRange, PlanId,
    PlanRequest, PlanStatisticsRecord, PlanStore, PlannedObservation, ProbabilityTile, RequestId,
    RunFailure, SQUARE_DEGREES_PER_STERADIAN, SkycovError, StatisticsSink,
};
