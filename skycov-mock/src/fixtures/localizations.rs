use std::sync::Arc;

use skycov_core::{LocalizationId, PixelRange, ProbabilityTile};

use super::SKYMAP;

fn tile(lower: u64, upper: u64, probdensity: f64) -> ProbabilityTile {
    ProbabilityTile {
        range: PixelRange { lower, upper },
        probdensity,
    }
}

pub(crate) fn tiles_for(localization: LocalizationId) -> Option<Arc<[ProbabilityTile]>> {
    (localization == SKYMAP).then(|| {
        Arc::from(vec![
            tile(0, 10, 0.5),
            tile(10, 20, 0.3),
            tile(20, 40, 0.1),
            tile(40, 100, 0.01),
        ])
    })
}
