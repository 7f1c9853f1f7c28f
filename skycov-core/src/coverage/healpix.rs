//! Constants of the nested equal-area pixelisation.

use crate::SkycovError;

/// Deepest resolution order whose pixel indices fit the 64-bit range encoding.
pub const MAX_ORDER: u8 = 29;

/// Number of pixels covering the sphere at `order`, `12 · 4^order`.
///
/// `order` must not exceed [`MAX_ORDER`]; debug builds assert it and release
/// builds clamp to it. Use [`pixel_area`] for a checked conversion.
#[must_use]
pub const fn npix(order: u8) -> u64 {
    debug_assert!(order <= MAX_ORDER, "healpix order exceeds MAX_ORDER");
    let order = if order > MAX_ORDER { MAX_ORDER } else { order };
    12u64 << (2 * order as u32)
}

/// `4π / npix(order)`, with `order` already checked against [`MAX_ORDER`].
pub(crate) const fn unchecked_pixel_area(order: u8) -> f64 {
    4.0 * core::f64::consts::PI / npix(order) as f64
}

/// Solid angle of a single pixel at `order`, in steradians.
///
/// # Errors
/// Returns `InvalidArg` if `order` exceeds [`MAX_ORDER`].
pub fn pixel_area(order: u8) -> Result<f64, SkycovError> {
    if order > MAX_ORDER {
        return Err(SkycovError::InvalidArg(format!(
            "healpix order {order} exceeds the maximum of {MAX_ORDER}"
        )));
    }
    Ok(unchecked_pixel_area(order))
}
