use crate::{PixelRange, SkycovError};

/// Merge possibly-overlapping pixel ranges into the minimal disjoint set.
///
/// - Output is sorted by `lower` and its union equals the union of the input.
/// - Two ranges merge only when they share at least one pixel index
///   (`b.lower < a.upper && a.lower < b.upper`); touching ranges stay separate.
/// - One sort plus one sweep: `O(n log n)` and always terminates.
/// - Empty input yields an empty output; merging a merged set is a no-op.
///
/// # Errors
/// Returns `Err(SkycovError::MalformedInput)` if any input range has
/// `lower >= upper`. No partial output is produced.
pub fn merge_ranges<I>(ranges: I) -> Result<Vec<PixelRange>, SkycovError>
where
    I: IntoIterator<Item = PixelRange>,
{
    let mut sorted: Vec<PixelRange> = ranges.into_iter().collect();
    for r in &sorted {
        r.validate()?;
    }
    sorted.sort_unstable();

    let mut out: Vec<PixelRange> = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Ok(out);
    };
    for next in iter {
        if next.lower < current.upper {
            current.upper = current.upper.max(next.upper);
        } else {
            out.push(current);
            current = next;
        }
    }
    out.push(current);
    Ok(out)
}
