//! Initial compass bearing between two coordinates.

use crate::types::GeoPoint;

/// Computes the initial compass bearing from `from` toward `to`, in whole
/// degrees clockwise from true north.
///
/// Uses the spherical forward-azimuth formula and rounds to the nearest
/// integer. The result is always in 1–360: a rounded 0 maps to 360, so 360
/// means due north and 0 is never produced. Keeping 0 unrepresentable stops
/// it colliding with "heading unset", which is `None` in [`SampledPoint`].
///
/// Total over all valid coordinate pairs; `from == to` degenerates to 360.
///
/// [`SampledPoint`]: crate::types::SampledPoint
#[must_use]
pub fn bearing(from: GeoPoint, to: GeoPoint) -> u16 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let compass = (x.atan2(y).to_degrees() + 360.0) % 360.0;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = compass.round() as u16;
    if rounded == 0 {
        360
    } else {
        rounded
    }
}
