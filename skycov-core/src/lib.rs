//! skycov-core
//!
//! Core algorithms and collaborator contracts shared across the skycov ecosystem.
//!
//! - `ranges`: merge overlapping pixel ranges into a disjoint, sorted set.
//! - `coverage`: intersect a merged footprint with probability tiles.
//! - `plan`: per-instrument footprint grouping and scalar plan aggregates.
//! - `connector`: the `PlanStore` trait, its role traits and the `StatisticsSink`.
//!
//! The algorithms in `ranges`, `coverage` and `plan` are pure functions over
//! their inputs: they hold no state, perform no I/O and may run concurrently
//! on independent inputs.
#![warn(missing_docs)]

/// Store and sink contracts used by the orchestrator.
pub mod connector;
/// Coverage statistics engine and the coverage back-end contract.
pub mod coverage;
/// Plan-level helpers: footprint grouping and observation summaries.
pub mod plan;
/// Pixel-range merging.
pub mod ranges;
pub mod types;

pub use connector::{PlanStore, StatisticsSink};
pub use coverage::healpix::{MAX_ORDER, npix, pixel_area};
pub use coverage::{CoverageEngine, CoverageSource, RawCoverage, raw_coverage};
pub use plan::{group_footprints, summarize_observations};
pub use ranges::merge::merge_ranges;
pub use types::*;
