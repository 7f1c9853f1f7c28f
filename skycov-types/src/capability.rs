use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels for store calls, errors, and telemetry.
///
/// Each label maps to one collaborator call made during a statistics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Planned observations of an observation plan.
    ObservationPlan,
    /// Details of the observation-plan request (instrument, localization).
    PlanRequest,
    /// Probability tiles of a localization.
    LocalizationTiles,
    /// Store-side coverage computation.
    CoverageQuery,
    /// Hand-off of a finished record to the persistence/notification sink.
    Publish,
    /// A whole statistics run or batch of runs.
    PlanStatistics,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ObservationPlan => "observation-plan",
            Self::PlanRequest => "plan-request",
            Self::LocalizationTiles => "localization-tiles",
            Self::CoverageQuery => "coverage-query",
            Self::Publish => "publish",
            Self::PlanStatistics => "plan-statistics",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
