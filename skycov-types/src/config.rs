//! Configuration types for the statistics orchestrator.

use core::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Coverage back-end used by a statistics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StatsMethod {
    /// Fetch the localization tiles and compute coverage in this process.
    #[default]
    InProcess,
    /// Push the merged footprint down to the store and let it compute coverage.
    Store,
}

impl fmt::Display for StatsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProcess => "in-process",
            Self::Store => "store",
        })
    }
}

/// Global configuration for the `Skycov` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkycovConfig {
    /// Resolution order of the nested pixel indices (at most 29).
    pub healpix_order: u8,
    /// Coverage back-end.
    pub stats_method: StatsMethod,
    /// Timeout for each individual store call.
    pub fetch_timeout: Duration,
    /// Optional overall deadline for a batch of runs.
    pub request_timeout: Option<Duration>,
    /// Maximum number of runs executing at once inside a batch.
    pub max_concurrent_runs: usize,
}

impl Default for SkycovConfig {
    fn default() -> Self {
        Self {
            healpix_order: 29,
            stats_method: StatsMethod::default(),
            fetch_timeout: Duration::from_secs(30),
            request_timeout: None,
            max_concurrent_runs: 8,
        }
    }
}
