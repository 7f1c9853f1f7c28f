//! Read-only snapshots of plans and requests supplied by the plan/request store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FieldId, InstrumentId, LocalizationId, PixelRange, PlanId, RequestId};

/// One planned pointing of one instrument within an observation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedObservation {
    /// Instrument that performs the pointing.
    pub instrument_id: InstrumentId,
    /// Field (fixed pointing) being observed.
    pub field_id: FieldId,
    /// Scheduled start of the exposure.
    pub obstime: DateTime<Utc>,
    /// Filter identifier used for the exposure.
    pub filter: String,
    /// Exposure time in seconds.
    pub exposure_seconds: f64,
    /// Slew/readout overhead in seconds.
    pub overhead_seconds: f64,
    /// Pixel ranges covered by the field. Ranges of different pointings may overlap.
    pub footprint: Vec<PixelRange>,
}

/// An already-decided observation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPlan {
    /// Plan identifier.
    pub id: PlanId,
    /// Planned observations in the order the store returned them.
    pub observations: Vec<PlannedObservation>,
}

/// The observation-plan request a plan was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Request identifier.
    pub id: RequestId,
    /// Instrument the request was allocated to.
    pub instrument_id: InstrumentId,
    /// Localization the request targets.
    pub localization_id: LocalizationId,
    /// Time of the triggering event, if known.
    pub event_time: Option<DateTime<Utc>>,
}
