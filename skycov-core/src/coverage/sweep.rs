use super::RawCoverage;
use super::sum::CompensatedSum;
use crate::{PixelRange, ProbabilityTile, SkycovError};

/// Intersect probability tiles with a disjoint footprint, without pixel-area scaling.
///
/// For every tile `t` the overlap is `Σ_f max(0, min(t.upper, f.upper) - max(t.lower, f.lower))`
/// over the footprint ranges `f`; `pixels` accumulates the overlaps and
/// `probability` accumulates `overlap(t) * t.probdensity`.
///
/// Both inputs are sorted by `lower` once and walked as two sorted streams, so
/// the cost is `O((T + F) log(T + F))` instead of comparing every tile with
/// every footprint range. Per tile the result is identical to the nested-loop
/// formulation; only the order in which tiles are summed may differ.
///
/// Tiles are trusted to be mutually disjoint (one localization covers each
/// pixel at most once); this is not re-verified.
///
/// # Errors
/// Returns `Err(SkycovError::MalformedInput)` if any tile or footprint range has
/// `lower >= upper`, if a tile has a negative or non-finite `probdensity`, or if
/// two footprint ranges overlap (merge the footprint first).
pub fn raw_coverage(
    tiles: &[ProbabilityTile],
    footprint: &[PixelRange],
) -> Result<RawCoverage, SkycovError> {
    for tile in tiles {
        tile.validate()?;
    }
    for range in footprint {
        range.validate()?;
    }
    if tiles.is_empty() || footprint.is_empty() {
        return Ok(RawCoverage::default());
    }

    let mut fields: Vec<PixelRange> = footprint.to_vec();
    fields.sort_unstable();
    if let Some(w) = fields.windows(2).find(|w| w[1].lower < w[0].upper) {
        return Err(SkycovError::malformed(format!(
            "footprint ranges [{}, {}) and [{}, {}) overlap; merge the footprint first",
            w[0].lower, w[0].upper, w[1].lower, w[1].upper
        )));
    }

    let mut ordered: Vec<&ProbabilityTile> = tiles.iter().collect();
    ordered.sort_unstable_by_key(|t| t.range);

    let mut pixels: u128 = 0;
    let mut probability = CompensatedSum::default();
    // First footprint range that can still reach the current tile. Tiles are
    // visited by increasing `lower`, so ranges ending at or before it are done.
    let mut first = 0usize;

    for tile in ordered {
        let t = tile.range;
        while first < fields.len() && fields[first].upper <= t.lower {
            first += 1;
        }
        if first == fields.len() {
            break;
        }

        let overlap: u64 = fields[first..]
            .iter()
            .take_while(|f| f.lower < t.upper)
            .map(|f| t.overlap_len(f))
            .sum();
        if overlap > 0 {
            pixels += u128::from(overlap);
            probability.add(overlap as f64 * tile.probdensity);
        }
    }

    Ok(RawCoverage {
        pixels,
        probability: probability.total(),
    })
}
