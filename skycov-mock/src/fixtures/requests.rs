use chrono::{TimeZone, Utc};
use skycov_core::{PlanRequest, RequestId};

use super::{DECAM, MISSING_SKYMAP, REQUEST_DECAM, REQUEST_LOST_MAP, REQUEST_ZTF, SKYMAP, ZTF};

pub(crate) fn request_for(request: RequestId) -> Option<PlanRequest> {
    let (instrument_id, localization_id, event_time) = match request {
        REQUEST_ZTF => (ZTF, SKYMAP, Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).single()),
        REQUEST_DECAM => (DECAM, SKYMAP, None),
        REQUEST_LOST_MAP => (ZTF, MISSING_SKYMAP, None),
        _ => return None,
    };
    Some(PlanRequest {
        id: request,
        instrument_id,
        localization_id,
        event_time,
    })
}
