use chrono::{DateTime, TimeZone, Utc};
use skycov_core::{
    FieldId, InstrumentId, ObservationPlan, PixelRange, PlanId, PlannedObservation,
};

use super::{DECAM, PLAN_EMPTY, PLAN_MALFORMED, PLAN_MIXED, PLAN_OVERLAPPING, ZTF};

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 3, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn pointing(
    instrument_id: InstrumentId,
    field: i64,
    minute: u32,
    filter: &str,
    ranges: &[(u64, u64)],
) -> PlannedObservation {
    PlannedObservation {
        instrument_id,
        field_id: FieldId(field),
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

pub(crate) fn plan_for(plan: PlanId) -> Option<ObservationPlan> {
    let observations = match plan {
        PLAN_OVERLAPPING => vec![
            pointing(ZTF, 100, 10, "ztfr", &[(0, 5)]),
            pointing(ZTF, 101, 20, "ztfg", &[(3, 8)]),
            pointing(ZTF, 102, 30, "ztfr", &[(7, 10), (15, 25)]),
            pointing(ZTF, 100, 40, "ztfg", &[(0, 5)]),
        ],
        PLAN_EMPTY => vec![],
        PLAN_MIXED => vec![
            pointing(ZTF, 200, 5, "ztfi", &[(0, 10)]),
            pointing(DECAM, 300, 6, "r", &[(50, 60)]),
        ],
        PLAN_MALFORMED => vec![pointing(ZTF, 400, 1, "ztfr", &[(10, 12), (30, 30)])],
        _ => return None,
    };
    Some(ObservationPlan {
        id: plan,
        observations,
    })
}
