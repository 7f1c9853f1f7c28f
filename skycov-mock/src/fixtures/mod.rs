//! Deterministic fixture data served by [`crate::MockStore`].
//!
//! The localization is a short strip of pixel indices so expected coverage can
//! be worked out by hand:
//!
//! ```text
//! tile        [0,10)  [10,20)  [20,40)  [40,100)
//! probdensity  0.5     0.3      0.1      0.01
//! ```

mod localizations;
mod plans;
mod requests;

pub(crate) use localizations::tiles_for;
pub(crate) use plans::plan_for;
pub(crate) use requests::request_for;

use skycov_core::{InstrumentId, LocalizationId, PlanId, RequestId};

/// Fixture instrument with overlapping fields.
pub const ZTF: InstrumentId = InstrumentId(1);
/// Second fixture instrument.
pub const DECAM: InstrumentId = InstrumentId(2);

/// Localization backing every fixture request except [`REQUEST_LOST_MAP`].
pub const SKYMAP: LocalizationId = LocalizationId(1);
/// Localization id the store has no tiles for.
pub const MISSING_SKYMAP: LocalizationId = LocalizationId(99);

/// Request allocated to [`ZTF`] with a known event time.
pub const REQUEST_ZTF: RequestId = RequestId(1);
/// Request allocated to [`DECAM`] without an event time.
pub const REQUEST_DECAM: RequestId = RequestId(2);
/// Request pointing at [`MISSING_SKYMAP`].
pub const REQUEST_LOST_MAP: RequestId = RequestId(3);

/// Four overlapping ZTF pointings; merged footprint `[0,10) ∪ [15,25)`,
/// 20 pixels and raw probability `7.0` over [`SKYMAP`].
pub const PLAN_OVERLAPPING: PlanId = PlanId(1);
/// Plan without planned observations.
pub const PLAN_EMPTY: PlanId = PlanId(2);
/// One ZTF pointing `[0,10)` and one DECAM pointing `[50,60)`.
pub const PLAN_MIXED: PlanId = PlanId(3);
/// A pointing whose footprint contains the empty range `[30,30)`.
pub const PLAN_MALFORMED: PlanId = PlanId(4);
/// Plan whose fetch always fails.
pub const PLAN_FAIL: PlanId = PlanId(500);
