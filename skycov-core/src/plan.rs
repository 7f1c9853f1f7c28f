use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use crate::{InstrumentId, ObservationSummary, PixelRange, PlannedObservation, SkycovError};

/// Group the raw footprint ranges of planned observations by instrument.
///
/// Ranges are returned unmerged and in observation order; a field observed
/// several times contributes its ranges several times. Feed a group to
/// [`crate::merge_ranges`] before computing coverage.
#[must_use]
pub fn group_footprints<'a, I>(observations: I) -> BTreeMap<InstrumentId, Vec<PixelRange>>
where
    I: IntoIterator<Item = &'a PlannedObservation>,
{
    let mut grouped: BTreeMap<InstrumentId, Vec<PixelRange>> = BTreeMap::new();
    for obs in observations {
        grouped
            .entry(obs.instrument_id)
            .or_default()
            .extend(obs.footprint.iter().copied());
    }
    grouped
}

/// Compute scalar aggregates over the raw list of planned observations.
///
/// - `start_observation`: earliest `obstime`.
/// - `unique_filters`: distinct filters, sorted.
/// - `num_observations`, `total_exposure_seconds`,
///   `total_time_with_overhead_seconds`: count and sums over every observation.
///
/// An empty plan reports `start_observation` and `unique_filters` as `None`
/// and zero for the count and sums.
///
/// # Errors
/// Returns `Err(SkycovError::MalformedInput)` if an exposure or overhead time is
/// negative or not finite.
pub fn summarize_observations(
    observations: &[PlannedObservation],
) -> Result<ObservationSummary, SkycovError> {
    if observations.is_empty() {
        return Ok(ObservationSummary::default());
    }

    let mut start: Option<DateTime<Utc>> = None;
    let mut filters: BTreeSet<&str> = BTreeSet::new();
    let mut exposure = 0.0;
    let mut with_overhead = 0.0;

    for obs in observations {
        check_duration("exposure", obs.exposure_seconds, obs)?;
        check_duration("overhead", obs.overhead_seconds, obs)?;

        start = Some(start.map_or(obs.obstime, |s| s.min(obs.obstime)));
        filters.insert(obs.filter.as_str());
        exposure += obs.exposure_seconds;
        with_overhead += obs.exposure_seconds + obs.overhead_seconds;
    }

    Ok(ObservationSummary {
        start_observation: start,
        unique_filters: Some(filters.into_iter().map(str::to_owned).collect()),
        num_observations: observations.len(),
        total_exposure_seconds: exposure,
        total_time_with_overhead_seconds: with_overhead,
    })
}

fn check_duration(what: &str, seconds: f64, obs: &PlannedObservation) -> Result<(), SkycovError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(SkycovError::malformed(format!(
            "{what} time {seconds} of {} at {} is not a non-negative number of seconds",
            obs.field_id, obs.obstime
        )))
    }
}
